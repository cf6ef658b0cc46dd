//! Tests for gesture arbitration between the two interpreters.

use super::*;
use crate::model::detent::{Detent, DetentFractions};

fn detents() -> DetentSet {
    DetentSet::compute(1000.0, &DetentFractions::default()).unwrap()
}

fn viewport() -> Viewport {
    Viewport::new(400.0, 1000.0)
}

fn config() -> SheetConfig {
    SheetConfig::default()
}

fn drive(
    arbiter: &mut GestureArbiter,
    driver: &mut AnimationDriver,
    config: &SheetConfig,
    events: &[DragEvent],
) -> Option<GestureOutcome> {
    let mut outcome = None;
    for event in events {
        outcome = arbiter.handle(event, &detents(), &viewport(), config, driver);
    }
    outcome
}

#[test]
fn vertical_drag_routes_to_vertical_machine() {
    let mut arbiter = GestureArbiter::new();
    let mut driver = AnimationDriver::new(100.0);

    let outcome = drive(
        &mut arbiter,
        &mut driver,
        &config(),
        &[
            DragEvent::began(),
            DragEvent::moved(0.0, 300.0),
            DragEvent::ended(0.0, 300.0, 0.0, 50.0),
        ],
    );

    assert_eq!(
        outcome,
        Some(GestureOutcome::Vertical(VerticalOutcome::Settle(
            Detent::Medium
        )))
    );
    assert_eq!(driver.snapshot().card_dx, 0.0, "card must not move");
}

#[test]
fn horizontal_drag_routes_to_horizontal_machine() {
    let mut arbiter = GestureArbiter::new();
    let mut driver = AnimationDriver::new(100.0);

    let outcome = drive(
        &mut arbiter,
        &mut driver,
        &config(),
        &[
            DragEvent::began(),
            DragEvent::moved(-120.0, -10.0),
            DragEvent::ended(-120.0, -10.0, -800.0, 0.0),
        ],
    );

    assert!(matches!(
        outcome,
        Some(GestureOutcome::Horizontal(SwipeOutcome::Exit(_)))
    ));
}

#[test]
fn mostly_vertical_drag_never_reaches_swiping() {
    let mut arbiter = GestureArbiter::new();
    let mut driver = AnimationDriver::new(100.0);
    let config = config();

    arbiter.handle(&DragEvent::began(), &detents(), &viewport(), &config, &mut driver);
    // |ty| > 0.5 * |tx| throughout: the guard can never pass.
    for step in 1..=10 {
        let tx = step as f64 * 10.0;
        let ty = step as f64 * 6.0;
        arbiter.handle(
            &DragEvent::moved(tx, ty),
            &detents(),
            &viewport(),
            &config,
            &mut driver,
        );
        assert!(!arbiter.horizontal_claimed());
        assert_eq!(driver.snapshot().card_dx, 0.0);
    }
}

#[test]
fn horizontal_claim_suppresses_vertical_live_writes() {
    let mut arbiter = GestureArbiter::new();
    let mut driver = AnimationDriver::new(100.0);
    let config = config();

    drive(
        &mut arbiter,
        &mut driver,
        &config,
        &[DragEvent::began(), DragEvent::moved(-150.0, -20.0)],
    );
    assert!(arbiter.horizontal_claimed());

    // Later frames with a vertical component move the card, not the sheet.
    drive(
        &mut arbiter,
        &mut driver,
        &config,
        &[DragEvent::moved(-200.0, -60.0)],
    );
    let state = driver.snapshot();
    assert_eq!(state.card_dx, -200.0);
    assert!(
        state.vertical_offset <= 100.0,
        "sheet must not follow the drag once the card owns it: {}",
        state.vertical_offset
    );
}

#[test]
fn horizontal_claim_springs_sheet_back_to_origin() {
    let mut arbiter = GestureArbiter::new();
    let mut driver = AnimationDriver::new(100.0);
    let config = config();

    // Vertical movement first, then a strongly horizontal frame claims.
    drive(
        &mut arbiter,
        &mut driver,
        &config,
        &[DragEvent::began(), DragEvent::moved(0.0, 80.0)],
    );
    assert_eq!(driver.vertical_offset(), 180.0);

    drive(
        &mut arbiter,
        &mut driver,
        &config,
        &[DragEvent::moved(200.0, 80.0)],
    );
    assert!(arbiter.horizontal_claimed());
    assert!(!driver.vertical_at_rest(), "sheet springs back to origin");

    // Settle the spring and confirm it lands on the drag origin.
    for _ in 0..300 {
        driver.tick(1.0 / 60.0);
    }
    assert!((driver.vertical_offset() - 100.0).abs() < 0.5);
}

#[test]
fn horizontal_gesture_end_does_not_classify_vertically() {
    let mut arbiter = GestureArbiter::new();
    let mut driver = AnimationDriver::new(100.0);

    // Ends with a large vertical translation, but the claim went
    // horizontal: no vertical outcome may surface.
    let outcome = drive(
        &mut arbiter,
        &mut driver,
        &config(),
        &[
            DragEvent::began(),
            DragEvent::moved(300.0, 20.0),
            DragEvent::ended(300.0, 700.0, 900.0, 400.0),
        ],
    );
    assert!(matches!(outcome, Some(GestureOutcome::Horizontal(_))));
}

#[test]
fn swipe_disabled_routes_everything_vertically() {
    let mut arbiter = GestureArbiter::new();
    let mut driver = AnimationDriver::new(100.0);
    let config = SheetConfig {
        swipe_enabled: false,
        ..SheetConfig::default()
    };

    let outcome = drive(
        &mut arbiter,
        &mut driver,
        &config,
        &[
            DragEvent::began(),
            DragEvent::moved(-200.0, 10.0),
            DragEvent::ended(-200.0, 10.0, -900.0, 0.0),
        ],
    );

    assert!(!arbiter.horizontal_claimed());
    assert_eq!(driver.snapshot().card_dx, 0.0);
    assert!(matches!(outcome, Some(GestureOutcome::Vertical(_))));
}

#[test]
fn non_finite_sample_is_dropped() {
    let mut arbiter = GestureArbiter::new();
    let mut driver = AnimationDriver::new(100.0);
    let config = config();

    drive(
        &mut arbiter,
        &mut driver,
        &config,
        &[DragEvent::began(), DragEvent::moved(0.0, 50.0)],
    );
    let before = driver.snapshot();

    let outcome = drive(
        &mut arbiter,
        &mut driver,
        &config,
        &[DragEvent::moved(f64::NAN, f64::NAN)],
    );
    assert_eq!(outcome, None);
    assert_eq!(driver.snapshot(), before, "bad frame must change nothing");

    // The gesture keeps working afterwards.
    let outcome = drive(
        &mut arbiter,
        &mut driver,
        &config,
        &[DragEvent::ended(0.0, 50.0, 0.0, 0.0)],
    );
    assert!(matches!(outcome, Some(GestureOutcome::Vertical(_))));
}

#[test]
fn ended_without_began_classifies_nothing() {
    let mut arbiter = GestureArbiter::new();
    let mut driver = AnimationDriver::new(100.0);

    let outcome = drive(
        &mut arbiter,
        &mut driver,
        &config(),
        &[DragEvent::ended(0.0, 300.0, 0.0, 100.0)],
    );
    assert_eq!(outcome, None);
}

#[test]
fn cancel_drops_gesture_midway() {
    let mut arbiter = GestureArbiter::new();
    let mut driver = AnimationDriver::new(100.0);
    let config = config();

    drive(
        &mut arbiter,
        &mut driver,
        &config,
        &[DragEvent::began(), DragEvent::moved(0.0, 200.0)],
    );
    arbiter.cancel();

    let outcome = drive(
        &mut arbiter,
        &mut driver,
        &config,
        &[DragEvent::ended(0.0, 200.0, 0.0, 0.0)],
    );
    assert_eq!(outcome, None);
}
