//! Launch the tree gym example.

use std::path::PathBuf;

use clap::Parser;
use thicket::{backend::crossterm::runloop, style::theme::default_theme};
use thicket_examples::treegym::{TreeGym, init_logging, parse_script};

/// CLI flags for the tree gym example.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Show expanders and indentation.
    #[clap(short, long)]
    tree: bool,

    /// Number of top-level directories.
    #[clap(short, long, default_value_t = 20)]
    rows: usize,

    /// Width of the list when scripted.
    #[clap(long, default_value_t = 40)]
    width: u32,

    /// Height of the list when scripted.
    #[clap(long, default_value_t = 12)]
    height: u32,

    /// Run a key and mouse script, print the final frame and exit.
    #[clap(short, long)]
    keys: Option<String>,

    /// Write debug logs to this file.
    #[clap(long)]
    log: Option<PathBuf>,
}

/// Run the tree gym example.
pub fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    if let Some(path) = &args.log {
        init_logging(path)?;
    }

    let mut gym = TreeGym::new(args.rows, args.tree, args.width, args.height);
    if let Some(script) = &args.keys {
        let steps = parse_script(script)?;
        for line in gym.run(&steps)? {
            println!("{line}");
        }
        println!("{}", gym.status());
        for name in gym.clicked() {
            println!("clicked: {name}");
        }
        return Ok(());
    }

    runloop(&mut gym.list, &default_theme())?;
    Ok(())
}
