//! Acceptance tests for the documented gesture scenarios.
//!
//! Each test drives the full public surface (controller, arbiter, both
//! machines, driver) with a concrete drag sequence and asserts the single
//! observable commit it must produce.

use crate::config::SheetConfig;
use crate::model::{Detent, DragEvent, SiblingId, Viewport};
use crate::state::{LifecyclePhase, SheetController, SheetEvent};

const DT: f64 = 1.0 / 60.0;

/// Viewport of 1000 points: detents at 100/400/700/850, dismissed at 1000.
fn open_sheet() -> SheetController {
    let mut controller =
        SheetController::new(Viewport::new(400.0, 1000.0), SheetConfig::default()).unwrap();
    controller.set_visible(true);
    tick_for(&mut controller, 3.0);
    assert_eq!(controller.phase(), LifecyclePhase::Open);
    controller.drain_events();
    controller
}

fn tick_for(controller: &mut SheetController, seconds: f64) {
    let ticks = (seconds / DT).round() as usize;
    for _ in 0..ticks {
        controller.tick(DT);
    }
}

fn siblings(ids: &[&str], current: &str) -> (Vec<SiblingId>, Option<SiblingId>) {
    (
        ids.iter().map(|id| SiblingId::from(*id)).collect(),
        Some(SiblingId::from(current)),
    )
}

#[test]
fn scenario_a_slow_deep_drag_commits_mini() {
    // Drag starts at rest on large (offset 100), moves down by 760 and
    // releases at 50 points/s. Final position 860 is short of the dismiss
    // line (880) and too slow for it anyway; the nearest open detent to
    // 860 is mini at 850.
    let mut sheet = open_sheet();
    sheet.handle_drag(DragEvent::began());
    sheet.handle_drag(DragEvent::moved(0.0, 760.0));
    sheet.handle_drag(DragEvent::ended(0.0, 760.0, 0.0, 50.0));

    assert_eq!(sheet.committed_detent(), Some(Detent::Mini));
    assert_eq!(
        sheet.drain_events(),
        vec![SheetEvent::DetentChanged(Detent::Mini)]
    );
    tick_for(&mut sheet, 3.0);
    assert_eq!(sheet.animation().vertical_offset, 850.0);
}

#[test]
fn scenario_b_deep_fast_drag_dismisses() {
    // Drag down 900 at 300 points/s: final position 1000 is past the
    // dismiss line (880) and 300 clears the 200 velocity gate, so the
    // sheet dismisses and the close fires after the settle window.
    let mut sheet = open_sheet();
    sheet.handle_drag(DragEvent::began());
    sheet.handle_drag(DragEvent::moved(0.0, 900.0));
    sheet.handle_drag(DragEvent::ended(0.0, 900.0, 0.0, 300.0));

    assert_eq!(sheet.phase(), LifecyclePhase::Closing);
    assert_eq!(sheet.drain_events(), vec![], "close waits for the animation");

    tick_for(&mut sheet, 2.0);
    assert_eq!(sheet.phase(), LifecyclePhase::Closed);
    assert_eq!(sheet.drain_events(), vec![SheetEvent::CloseRequested]);
}

#[test]
fn scenario_c_left_swipe_from_middle_navigates_next() {
    // siblings [a, b, c], current b: a leftward exit requests "next",
    // which is c, delivered once after the exit animation.
    let mut sheet = open_sheet();
    let (ids, current) = siblings(&["a", "b", "c"], "b");
    sheet.set_siblings(ids, current);

    sheet.handle_drag(DragEvent::began());
    sheet.handle_drag(DragEvent::moved(-120.0, -8.0));
    sheet.handle_drag(DragEvent::ended(-120.0, -8.0, -800.0, 0.0));

    assert_eq!(sheet.drain_events(), vec![], "navigation waits for the toss");
    tick_for(&mut sheet, 1.0);
    assert_eq!(
        sheet.drain_events(),
        vec![SheetEvent::SiblingChanged(SiblingId::from("c"))]
    );
}

#[test]
fn scenario_d_left_swipe_from_last_plays_but_does_not_navigate() {
    // Same gesture with current = c (last element): the exit animation
    // still plays, but no sibling commit may fire.
    let mut sheet = open_sheet();
    let (ids, current) = siblings(&["a", "b", "c"], "c");
    sheet.set_siblings(ids, current);

    sheet.handle_drag(DragEvent::began());
    sheet.handle_drag(DragEvent::moved(-120.0, -8.0));
    sheet.handle_drag(DragEvent::ended(-120.0, -8.0, -800.0, 0.0));

    tick_for(&mut sheet, 0.1);
    assert!(
        sheet.animation().card_dx < -120.0,
        "the toss still animates off-screen"
    );

    tick_for(&mut sheet, 1.0);
    assert_eq!(sheet.drain_events(), vec![]);
    assert_eq!(sheet.animation().card_dx, 0.0, "card resets afterwards");
}

#[test]
fn dismiss_twice_behaves_like_dismiss_once() {
    let mut sheet = open_sheet();
    sheet.dismiss();
    sheet.dismiss();
    tick_for(&mut sheet, 2.0);

    assert_eq!(sheet.phase(), LifecyclePhase::Closed);
    assert_eq!(sheet.drain_events(), vec![SheetEvent::CloseRequested]);
}

#[test]
fn vertical_dominant_drag_never_moves_the_card() {
    // |translation_y| > 0.5 * |translation_x| at every sample: the swipe
    // interpreter must never engage, whatever the magnitudes.
    let mut sheet = open_sheet();
    let (ids, current) = siblings(&["a", "b", "c"], "b");
    sheet.set_siblings(ids, current);

    sheet.handle_drag(DragEvent::began());
    for step in 1..=12 {
        let tx = f64::from(step) * 20.0;
        let ty = f64::from(step) * 11.0;
        sheet.handle_drag(DragEvent::moved(tx, ty));
        assert_eq!(sheet.animation().card_dx, 0.0);
    }
    sheet.handle_drag(DragEvent::ended(240.0, 132.0, 100.0, 60.0));

    tick_for(&mut sheet, 1.0);
    let events = sheet.drain_events();
    assert!(
        events
            .iter()
            .all(|e| !matches!(e, SheetEvent::SiblingChanged(_))),
        "a vertical-dominant drag must never navigate: {events:?}"
    );
}

#[test]
fn horizontal_swipe_leaves_committed_detent_alone() {
    let mut sheet = open_sheet();
    let (ids, current) = siblings(&["a", "b", "c"], "b");
    sheet.set_siblings(ids, current);

    sheet.handle_drag(DragEvent::began());
    sheet.handle_drag(DragEvent::moved(150.0, 20.0));
    sheet.handle_drag(DragEvent::ended(150.0, 600.0, 700.0, 900.0));

    assert_eq!(sheet.committed_detent(), Some(Detent::Large));
    tick_for(&mut sheet, 1.0);
    let events = sheet.drain_events();
    assert!(events
        .iter()
        .all(|e| !matches!(e, SheetEvent::DetentChanged(_))));
}
