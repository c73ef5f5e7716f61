use thicket::event::{Event, KeyCode};

use crate::treegym::{Step, TreeGym, parse_script, sample};

#[test]
fn parses_scripts() {
    let steps = parse_script("down  pgdn + tick\nclick:3,4").unwrap();
    assert_eq!(steps.len(), 5);
    assert_eq!(steps[0], Step::Event(Event::Key(KeyCode::Down.into())));
    assert_eq!(steps[2], Step::Event(Event::Key(KeyCode::Char('+').into())));
    assert_eq!(steps[3], Step::Tick);
    assert!(matches!(steps[4], Step::Event(Event::Mouse(_))));
    assert!(parse_script("").unwrap().is_empty());
}

#[test]
fn rejects_bad_tokens() {
    assert!(parse_script("sideways").is_err());
    assert!(parse_script("click:3").is_err());
    assert!(parse_script("click:a,b").is_err());
    assert!(parse_script("poke:1,1").is_err());
}

#[test]
fn sample_shape() {
    let l = sample(3, true);
    // Three directories, nine files, two nested directories with two files each.
    assert_eq!(l.tree().len(), 18);
    assert_eq!(l.count(), 3);
    assert!(l.is_tree_view());
    assert!(!sample(1, false).is_tree_view());
}

#[test]
fn keys_move_and_expand() {
    let mut g = TreeGym::new(3, true, 40, 12);
    let steps = parse_script("down down").unwrap();
    g.run(&steps).unwrap();
    assert_eq!(g.status(), "row 3/3  0 bytes");

    let steps = parse_script("home +").unwrap();
    g.run(&steps).unwrap();
    // dir00 holds three files and a nested directory.
    assert_eq!(g.list.count(), 7);
    g.run(&parse_script("down").unwrap()).unwrap();
    assert!(g.status().starts_with("row 2/7"));
    assert!(!g.status().ends_with(" 0 bytes"));
}

#[test]
fn clicks_are_reported() {
    let mut g = TreeGym::new(3, true, 40, 12);
    g.run(&parse_script("down enter").unwrap()).unwrap();
    assert_eq!(g.clicked(), vec!["dir01"]);

    g.run(&parse_script("click:5,1 dclick:5,1").unwrap()).unwrap();
    assert_eq!(g.clicked(), vec!["dir01", "dir00"]);
    assert_eq!(g.list.count(), 7);
}

#[test]
fn frame_shows_headers_and_rows() {
    let mut g = TreeGym::new(2, true, 30, 8);
    let frame = g.frame().unwrap();
    assert_eq!(frame.len(), 8);
    assert!(frame[0].contains("Name"));
    assert!(frame[0].contains("Size"));
    assert!(frame[1].contains("dir00"));
    assert!(frame[2].contains("dir01"));
    assert!(!frame.iter().any(|l| l.contains("file0.rs")));
}
