//! Property tests for row counting and viewport clamping.

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use proptest::{prelude::*, sample::Index};
    use thicket::{
        Widget,
        event::{
            Event, KeyCode, Wheel, WheelEvent,
            mouse::{Action, MouseEvent},
        },
        geom::{Point, Rect},
        timer::Timers,
        widgets::listview::{ItemId, ItemTree, ListView, ListViewConfig, Parent, Width},
    };

    #[derive(Debug, Clone)]
    enum Op {
        Key(KeyCode),
        Wheel(bool),
        Click(u32, u32),
        Toggle(Index),
        Remove(Index),
        Resize(u32, u32),
        Jump(usize),
        /// Left drag to a screen position, inside or outside the list.
        Drag(u32, u32),
        /// Fire every pending timer.
        Tick,
        /// Press on the vertical bar column and drag along it.
        BarDrag(u32, u32),
    }

    fn op() -> impl Strategy<Value = Op> {
        let keys = prop_oneof![
            Just(KeyCode::Up),
            Just(KeyCode::Down),
            Just(KeyCode::Left),
            Just(KeyCode::Right),
            Just(KeyCode::PageUp),
            Just(KeyCode::PageDown),
            Just(KeyCode::Home),
            Just(KeyCode::End),
            Just(KeyCode::Char('+')),
            Just(KeyCode::Char('-')),
        ];
        prop_oneof![
            4 => keys.prop_map(Op::Key),
            1 => any::<bool>().prop_map(Op::Wheel),
            1 => (0u32..20, 0u32..12).prop_map(|(x, y)| Op::Click(x, y)),
            2 => any::<Index>().prop_map(Op::Toggle),
            1 => any::<Index>().prop_map(Op::Remove),
            1 => (3u32..20, 2u32..12).prop_map(|(w, h)| Op::Resize(w, h)),
            1 => (0usize..50).prop_map(Op::Jump),
            2 => (0u32..20, 0u32..14).prop_map(|(x, y)| Op::Drag(x, y)),
            2 => Just(Op::Tick),
            2 => (0u32..12, 0u32..12).prop_map(|(a, b)| Op::BarDrag(a, b)),
        ]
    }

    /// Each entry picks the parent of the next item: 0 is the top level,
    /// `k` is the `k`th item inserted so far.
    fn shape() -> impl Strategy<Value = Vec<Index>> {
        prop::collection::vec(any::<Index>(), 1..40)
    }

    fn build(shape: &[Index]) -> (ListView, Vec<ItemId>) {
        let mut l = ListView::new(ListViewConfig::default().with_tree_view(true));
        l.add_column("Name", Width::Auto);
        let mut ids: Vec<ItemId> = vec![];
        for (i, pick) in shape.iter().enumerate() {
            let parent = match pick.index(ids.len() + 1) {
                0 => Parent::Root,
                k => Parent::Item(ids[k - 1]),
            };
            ids.push(l.insert(&[format!("item {i}")], (), parent).unwrap());
        }
        l.set_area(Rect::new(0, 0, 16, 8));
        (l, ids)
    }

    fn apply(l: &mut ListView, ids: &[ItemId], timers: &mut Timers, op: &Op) {
        let live: Vec<ItemId> = ids
            .iter()
            .copied()
            .filter(|id| l.item(*id).is_some())
            .collect();
        match op {
            Op::Key(k) => {
                l.on_event(&Event::Key((*k).into()), timers).unwrap();
            }
            Op::Wheel(down) => {
                let direction = if *down { Wheel::Down } else { Wheel::Up };
                let ev = Event::Wheel(WheelEvent {
                    direction,
                    location: Point { x: 2, y: 2 },
                });
                l.on_event(&ev, timers).unwrap();
            }
            Op::Click(x, y) => {
                let ev = Event::Mouse(MouseEvent::left(Action::Down, (*x, *y)));
                l.on_event(&ev, timers).unwrap();
                let ev = Event::Mouse(MouseEvent::left(Action::Up, (*x, *y)));
                l.on_event(&ev, timers).unwrap();
            }
            Op::Toggle(i) if !live.is_empty() => {
                l.toggle(*i.get(&live));
            }
            Op::Remove(i) if !live.is_empty() => {
                l.remove(*i.get(&live));
            }
            Op::Resize(w, h) => l.resize(*w, *h),
            Op::Jump(y) => l.scroll_to_y(*y),
            Op::Drag(x, y) => {
                let ev = Event::Mouse(MouseEvent::left(Action::Drag, (*x, *y)));
                l.on_event(&ev, timers).unwrap();
            }
            Op::Tick => {
                let later = Instant::now() + Duration::from_secs(3600);
                for id in timers.due_at(later) {
                    l.on_event(&Event::Timer(id), timers).unwrap();
                }
            }
            Op::BarDrag(from, to) => {
                let x = l.state().area().w.saturating_sub(1);
                for (action, y) in [(Action::Down, from), (Action::Drag, to), (Action::Up, to)] {
                    let ev = Event::Mouse(MouseEvent::left(action, (x, *y)));
                    l.on_event(&ev, timers).unwrap();
                }
            }
            _ => {}
        }
    }

    fn check_window(l: &ListView) -> Result<(), TestCaseError> {
        let count = l.count();
        let page = l.client_height();
        if count == 0 || page == 0 {
            return Ok(());
        }
        let (first, cur, last) = (
            l.first_visible_position(),
            l.current_position(),
            l.last_visible_position(),
        );
        prop_assert!(first <= cur && cur <= last, "{first} {cur} {last}");
        prop_assert!(last < count);
        prop_assert_eq!(last - first + 1, page.min(count));
        prop_assert!(l.current().is_some());
        Ok(())
    }

    fn check_counts(tree: &ItemTree<()>, id: ItemId) -> Result<usize, TestCaseError> {
        let Some(item) = tree.get(id) else {
            return Ok(0);
        };
        let mut below = 0;
        for c in item.children() {
            below += check_counts(tree, *c)?;
        }
        let expect = if item.is_expanded() && !item.children().is_empty() {
            1 + below
        } else {
            1
        };
        prop_assert_eq!(tree.visible_line_count(id), expect);
        Ok(tree.visible_line_count(id))
    }

    proptest! {
        #[test]
        fn visible_counts_match_structure(
            shape in shape(),
            toggles in prop::collection::vec(any::<Index>(), 0..30),
        ) {
            let (mut l, ids) = build(&shape);
            for t in &toggles {
                l.toggle(*t.get(&ids));
                let mut total = 0;
                for root in l.children(Parent::Root).to_vec() {
                    total += check_counts(l.tree(), root)?;
                }
                prop_assert_eq!(total, l.count());
            }
        }

        #[test]
        fn window_holds_selection(
            shape in shape(),
            ops in prop::collection::vec(op(), 1..60),
        ) {
            let (mut l, ids) = build(&shape);
            let mut timers = Timers::new();
            check_window(&l)?;
            for op in &ops {
                apply(&mut l, &ids, &mut timers, op);
                check_window(&l)?;
                prop_assert!(l.x_offset() <= l.max_line_width());
            }
        }

        #[test]
        fn wheel_never_overshoots(
            n in 1usize..60,
            h in 3u32..15,
            downs in prop::collection::vec(any::<bool>(), 1..40),
        ) {
            let mut l: ListView = ListView::default();
            l.add_column("N", Width::Auto);
            for i in 0..n {
                l.insert(&[i.to_string()], (), Parent::Root);
            }
            l.set_area(Rect::new(0, 0, 10, h));
            let page = l.client_height();
            let mut timers = Timers::new();
            for down in downs {
                let direction = if down { Wheel::Down } else { Wheel::Up };
                let ev = Event::Wheel(WheelEvent { direction, location: Point { x: 1, y: 1 } });
                l.on_event(&ev, &mut timers).unwrap();
                prop_assert!(l.first_visible_position() <= n.saturating_sub(page));
                prop_assert!(l.last_visible_position() < n);
            }
        }
    }
}
