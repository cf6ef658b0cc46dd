//! Tests for the horizontal swipe state machine.

use super::*;
use crate::config::SheetTuning;

fn viewport() -> Viewport {
    Viewport::new(400.0, 1000.0)
}

fn tuning() -> SheetTuning {
    SheetTuning::default()
}

fn swiping_machine(driver: &mut AnimationDriver) -> HorizontalSwipeMachine {
    let mut machine = HorizontalSwipeMachine::new();
    machine.begin(driver);
    assert!(machine.update(-120.0, -10.0, &viewport(), &tuning(), driver));
    machine
}

#[test]
fn begin_parks_card_at_neutral() {
    let mut driver = AnimationDriver::new(100.0);
    driver.set_card(50.0, 5.0, 0.1, 0.5);

    let mut machine = HorizontalSwipeMachine::new();
    machine.begin(&mut driver);

    let state = driver.snapshot();
    assert_eq!(machine.phase(), SwipePhase::Tracking);
    assert_eq!(state.card_dx, 0.0);
    assert_eq!(state.card_dy, 0.0);
    assert_eq!(state.card_rotation, 0.0);
    assert_eq!(state.card_opacity, 1.0);
}

#[test]
fn guard_blocks_mostly_vertical_drag() {
    let mut driver = AnimationDriver::new(100.0);
    let mut machine = HorizontalSwipeMachine::new();
    machine.begin(&mut driver);

    // |tx| must exceed 2*|ty|; 60 vs 2*40 fails.
    assert!(!machine.update(60.0, 40.0, &viewport(), &tuning(), &mut driver));
    assert_eq!(machine.phase(), SwipePhase::Tracking);
    assert_eq!(driver.snapshot().card_dx, 0.0);
}

#[test]
fn guard_boundary_is_strict() {
    let mut driver = AnimationDriver::new(100.0);
    let mut machine = HorizontalSwipeMachine::new();
    machine.begin(&mut driver);

    // Exactly 2:1 does not pass.
    assert!(!machine.update(80.0, 40.0, &viewport(), &tuning(), &mut driver));
    assert_eq!(machine.phase(), SwipePhase::Tracking);
}

#[test]
fn dominant_horizontal_drag_claims_and_moves_card() {
    let mut driver = AnimationDriver::new(100.0);
    let mut machine = HorizontalSwipeMachine::new();
    machine.begin(&mut driver);

    assert!(machine.update(-120.0, -10.0, &viewport(), &tuning(), &mut driver));
    assert_eq!(machine.phase(), SwipePhase::Swiping);

    let state = driver.snapshot();
    assert_eq!(state.card_dx, -120.0);
    assert_eq!(state.card_dy, -10.0);
    // rotation = tx / width * max_rotation
    let expected_rotation = -120.0 / 400.0 * tuning().max_rotation;
    assert!((state.card_rotation - expected_rotation).abs() < 1e-12);
    // opacity = 1 - |tx| / (0.5 * width) = 1 - 120/200
    assert!((state.card_opacity - 0.4).abs() < 1e-12);
}

#[test]
fn opacity_never_drops_below_floor() {
    let mut driver = AnimationDriver::new(100.0);
    let mut machine = HorizontalSwipeMachine::new();
    machine.begin(&mut driver);

    machine.update(-190.0, 0.0, &viewport(), &tuning(), &mut driver);
    assert_eq!(driver.snapshot().card_opacity, 0.3);
}

#[test]
fn claim_is_sticky_through_a_below_ratio_frame() {
    let mut driver = AnimationDriver::new(100.0);
    let mut machine = swiping_machine(&mut driver);
    let before = driver.snapshot();

    // Ratio dips under 2:1 mid-gesture: claim holds, card does not move.
    assert!(machine.update(-120.0, -80.0, &viewport(), &tuning(), &mut driver));
    assert_eq!(machine.phase(), SwipePhase::Swiping);
    assert_eq!(driver.snapshot(), before);
}

#[test]
fn short_slow_release_returns_to_center() {
    let mut driver = AnimationDriver::new(100.0);
    let mut machine = HorizontalSwipeMachine::new();
    machine.begin(&mut driver);
    machine.update(-40.0, -5.0, &viewport(), &tuning(), &mut driver);

    let outcome = machine.end(-40.0, -100.0, &tuning());
    assert_eq!(outcome, Some(SwipeOutcome::Return));
    assert_eq!(machine.phase(), SwipePhase::Returning);
}

#[test]
fn far_release_exits_in_travel_direction() {
    let mut driver = AnimationDriver::new(100.0);
    let mut machine = swiping_machine(&mut driver);

    let outcome = machine.end(-120.0, -100.0, &tuning());
    assert_eq!(outcome, Some(SwipeOutcome::Exit(SwipeDirection::Leftward)));
    assert_eq!(machine.phase(), SwipePhase::Exiting);
}

#[test]
fn fast_release_exits_even_with_short_travel() {
    let mut driver = AnimationDriver::new(100.0);
    let mut machine = HorizontalSwipeMachine::new();
    machine.begin(&mut driver);
    machine.update(30.0, 2.0, &viewport(), &tuning(), &mut driver);

    let outcome = machine.end(30.0, 800.0, &tuning());
    assert_eq!(outcome, Some(SwipeOutcome::Exit(SwipeDirection::Rightward)));
}

#[test]
fn fling_direction_overrides_net_travel() {
    let mut driver = AnimationDriver::new(100.0);
    let mut machine = HorizontalSwipeMachine::new();
    machine.begin(&mut driver);
    machine.update(-60.0, 0.0, &viewport(), &tuning(), &mut driver);

    // Dragged left, but flung right on release.
    let outcome = machine.end(-60.0, 900.0, &tuning());
    assert_eq!(outcome, Some(SwipeOutcome::Exit(SwipeDirection::Rightward)));
}

#[test]
fn end_without_claim_returns_none() {
    let mut driver = AnimationDriver::new(100.0);
    let mut machine = HorizontalSwipeMachine::new();
    machine.begin(&mut driver);

    // Guard never passed; release classifies nothing.
    machine.update(10.0, 40.0, &viewport(), &tuning(), &mut driver);
    assert_eq!(machine.end(10.0, 40.0, &tuning()), None);
    assert_eq!(machine.phase(), SwipePhase::Idle);
}

#[test]
fn end_classifies_exactly_once() {
    let mut driver = AnimationDriver::new(100.0);
    let mut machine = swiping_machine(&mut driver);

    assert!(machine.end(-120.0, -800.0, &tuning()).is_some());
    assert_eq!(machine.end(-120.0, -800.0, &tuning()), None);
}

#[test]
fn cancel_makes_release_inert() {
    let mut driver = AnimationDriver::new(100.0);
    let mut machine = swiping_machine(&mut driver);

    machine.cancel();
    assert_eq!(machine.end(-120.0, -800.0, &tuning()), None);
}

#[test]
fn update_after_release_is_inert() {
    let mut driver = AnimationDriver::new(100.0);
    let mut machine = swiping_machine(&mut driver);
    machine.end(-120.0, -800.0, &tuning());

    let before = driver.snapshot();
    assert!(!machine.update(-200.0, 0.0, &viewport(), &tuning(), &mut driver));
    assert_eq!(driver.snapshot(), before);
}
