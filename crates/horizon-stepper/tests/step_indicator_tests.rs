//! End-to-end behavior of the step indicator.

use std::sync::Arc;
use std::sync::atomic::{AtomicI32, AtomicUsize, Ordering};
use std::time::Duration;

use horizon_stepper::prelude::*;
use horizon_stepper::render::DrawCommand;
use horizon_stepper::widget::step_indicator::{TransitionPhase, offset};

const FRAME: Duration = Duration::from_millis(16);

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn linear() -> AnimationConfig {
    AnimationConfig::default().with_easing(Easing::Linear)
}

fn settle(indicator: &mut StepIndicator) {
    while indicator.tick(FRAME) {}
}

/// Five steps on a 500px wide strip: a 400px track.
fn five_steps() -> StepIndicator {
    let mut indicator = StepIndicator::builder()
        .step_count(5)
        .animation(linear())
        .build()
        .unwrap();
    indicator.resize(Size::new(500.0, 80.0));
    settle(&mut indicator);
    indicator
}

#[test]
fn fill_then_grow_from_zero_to_two() {
    init_tracing();
    let mut indicator = five_steps();
    assert_eq!(indicator.transition().fill_length(), 0.0);

    indicator.update(2);
    assert_eq!(indicator.transition().fill_target(), 200.0);
    // The marker is back at the base size before the fill moves.
    assert_eq!(indicator.transition().marker_size(), 30.0);
    assert_eq!(indicator.transition().marker_radius(), 15.0);

    indicator.tick(Duration::from_millis(250));
    assert!((indicator.transition().fill_length() - 100.0).abs() < 1e-3);
    assert_eq!(indicator.transition().marker_size(), 30.0);

    indicator.tick(Duration::from_millis(250));
    assert_eq!(indicator.transition().fill_length(), 200.0);
    assert_eq!(indicator.transition().phase(), Some(TransitionPhase::Grow));

    indicator.tick(Duration::from_millis(500));
    assert_eq!(indicator.transition().marker_size(), 40.0);
    assert_eq!(indicator.transition().marker_radius(), 20.0);
    assert!(!indicator.transition().is_animating());
}

#[test]
fn relay_offset_in_progress() {
    assert_eq!(offset(1, 3, 300.0, true, 40.0), 205.0);

    let mut indicator = StepIndicator::builder()
        .step_count(3)
        .current_position(1)
        .in_progress(true)
        .build()
        .unwrap();
    indicator.set_container_size(Size::new(400.0, 80.0));
    indicator.set_track_length(300.0);

    assert_eq!(indicator.relay_offset(), 205.0);
    assert_eq!(indicator.transition().fill_target(), 205.0);

    let scene = indicator.scene();
    let relay = scene
        .commands()
        .iter()
        .find_map(|command| match command {
            DrawCommand::Image { bounds, .. } => Some(*bounds),
            _ => None,
        })
        .expect("relay marker drawn");
    let track_start = 400.0 / 3.0 / 2.0;
    assert!((relay.left() - (track_start + 205.0)).abs() < 1e-3);
    assert_eq!(relay.size, Size::new(40.0, 40.0));
}

#[test]
fn label_count_mismatch_fails_at_build() {
    let result = StepIndicator::builder()
        .step_count(5)
        .labels(["Cart", "Delivery", "Address", "Payment"])
        .build();
    match result {
        Err(ConfigError::LabelCount {
            kind,
            expected,
            actual,
        }) => {
            assert_eq!(kind, "labels");
            assert_eq!(expected, 5);
            assert_eq!(actual, 4);
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn pressing_a_step_emits_its_position() {
    let indicator = five_steps();
    let pressed = Arc::new(AtomicUsize::new(usize::MAX));
    let presses = Arc::new(AtomicUsize::new(0));

    let pressed_clone = pressed.clone();
    let presses_clone = presses.clone();
    indicator.step_pressed.connect(move |&position| {
        pressed_clone.store(position, Ordering::SeqCst);
        presses_clone.fetch_add(1, Ordering::SeqCst);
    });

    // Step 3 is unfinished; presses are reported regardless of status.
    assert!(indicator.press(3));
    assert_eq!(pressed.load(Ordering::SeqCst), 3);
    assert_eq!(presses.load(Ordering::SeqCst), 1);
}

#[test]
fn pressing_by_point_hits_markers_and_labels() {
    let mut indicator = StepIndicator::builder()
        .labels(["a", "b", "c", "d", "e"])
        .build()
        .unwrap();
    indicator.resize(Size::new(500.0, 100.0));

    let pressed = Arc::new(AtomicUsize::new(usize::MAX));
    let pressed_clone = pressed.clone();
    indicator.step_pressed.connect(move |&position| {
        pressed_clone.store(position, Ordering::SeqCst);
    });

    assert_eq!(indicator.press_at(Point::new(250.0, 20.0)), Some(2));
    assert_eq!(pressed.load(Ordering::SeqCst), 2);

    assert_eq!(indicator.press_at(Point::new(460.0, 70.0)), Some(4));
    assert_eq!(pressed.load(Ordering::SeqCst), 4);

    assert_eq!(indicator.press_at(Point::new(900.0, 20.0)), None);
}

#[test]
fn repeated_update_is_idempotent() {
    let mut once = five_steps();
    once.update(3);
    settle(&mut once);

    let mut twice = five_steps();
    twice.update(3);
    twice.update(3);
    settle(&mut twice);

    assert_eq!(once.transition().fill_length(), twice.transition().fill_length());
    assert_eq!(once.transition().marker_size(), twice.transition().marker_size());
    assert_eq!(once.transition().marker_radius(), twice.transition().marker_radius());
}

#[test]
fn remeasuring_same_track_keeps_resting_values() {
    let mut settled = five_steps();
    settled.update(3);
    settle(&mut settled);

    let mut remeasured = five_steps();
    remeasured.update(3);
    remeasured.tick(Duration::from_millis(700));
    remeasured.set_track_length(400.0);
    settle(&mut remeasured);

    assert_eq!(remeasured.transition().fill_length(), 300.0);
    assert_eq!(settled.transition().fill_length(), remeasured.transition().fill_length());
    assert_eq!(settled.transition().marker_size(), remeasured.transition().marker_size());
    assert_eq!(
        settled.transition().marker_radius(),
        remeasured.transition().marker_radius()
    );
}

#[test]
fn huge_host_delta_finishes_without_panicking() {
    let mut indicator = five_steps();
    let finished = Arc::new(AtomicI32::new(-1));
    let finished_clone = finished.clone();
    indicator
        .transition_finished
        .connect(move |&position| finished_clone.store(position, Ordering::SeqCst));

    indicator.update(2);
    assert!(indicator.tick(FRAME));
    assert!(!indicator.tick(Duration::MAX));

    assert_eq!(indicator.transition().fill_length(), 200.0);
    assert_eq!(indicator.transition().marker_size(), 40.0);
    assert_eq!(finished.load(Ordering::SeqCst), 2);
}

#[test]
fn marker_stays_circular_mid_animation() {
    let mut indicator = StepIndicator::builder().build().unwrap();
    indicator.resize(Size::new(500.0, 80.0));
    indicator.update(1);

    for _ in 0..80 {
        indicator.tick(Duration::from_millis(13));
        let size = indicator.transition().marker_size();
        assert_eq!(indicator.transition().marker_radius(), size / 2.0);

        let marker = indicator
            .scene()
            .commands()
            .iter()
            .filter_map(|command| match command {
                DrawCommand::FillRoundedRect { rect, .. } => Some(*rect),
                _ => None,
            })
            .nth(1)
            .expect("current marker drawn");
        assert!(marker.is_circular());
    }
}

#[test]
fn out_of_range_positions_clamp_for_geometry_only() {
    let mut indicator = five_steps();
    indicator.update(7);
    assert_eq!(indicator.current_position(), 7);
    assert_eq!(indicator.transition().fill_target(), 400.0);
    assert!((0..5).all(|p| indicator.status(p) == StepStatus::Finished));

    indicator.update(-2);
    assert_eq!(indicator.transition().fill_target(), 0.0);
    assert!((0..5).all(|p| indicator.status(p) == StepStatus::Unfinished));
}

#[test]
fn signals_report_position_changes_and_completion() {
    let mut indicator = five_steps();
    let changed = Arc::new(AtomicI32::new(-1));
    let finished = Arc::new(AtomicI32::new(-1));

    let changed_clone = changed.clone();
    indicator
        .position_changed
        .connect(move |&position| changed_clone.store(position, Ordering::SeqCst));
    let finished_clone = finished.clone();
    indicator
        .transition_finished
        .connect(move |&position| finished_clone.store(position, Ordering::SeqCst));

    indicator.update(4);
    assert_eq!(changed.load(Ordering::SeqCst), 4);
    assert_eq!(finished.load(Ordering::SeqCst), -1);

    settle(&mut indicator);
    assert_eq!(finished.load(Ordering::SeqCst), 4);
}

#[test]
fn new_position_mid_fill_continues_from_live_value() {
    let mut indicator = five_steps();
    indicator.update(4);
    indicator.tick(Duration::from_millis(250));
    let live = indicator.transition().fill_length();
    assert!((live - 200.0).abs() < 1e-3);

    indicator.update(0);
    assert_eq!(indicator.transition().fill_length(), live);
    indicator.tick(Duration::from_millis(250));
    assert!((indicator.transition().fill_length() - 100.0).abs() < 1e-3);
}

#[test]
fn style_document_feeds_geometry() {
    let overrides = StyleOverrides::from_toml(
        r##"
        step-indicator-size = 20
        current-step-indicator-size = 50
        separator-stroke-width = 6
        "##,
    )
    .unwrap();
    let mut indicator = StepIndicator::builder()
        .style_overrides(overrides)
        .build()
        .unwrap();
    indicator.resize(Size::new(500.0, 100.0));
    settle(&mut indicator);

    assert_eq!(indicator.transition().marker_size(), 50.0);
    let geometry = indicator.geometry().unwrap();
    assert_eq!(geometry.track(), Rect::new(50.0, 22.0, 400.0, 6.0));
}

#[test]
fn vertical_indicator_lays_out_along_y() {
    let mut indicator = StepIndicator::builder()
        .step_count(4)
        .orientation(Orientation::Vertical)
        .animation(linear())
        .build()
        .unwrap();
    indicator.resize(Size::new(200.0, 400.0));
    indicator.update(3);
    settle(&mut indicator);

    let scene = indicator.scene();
    match scene.commands()[1] {
        DrawCommand::FillRect { rect, .. } => {
            assert_eq!(rect, Rect::new(18.5, 50.0, 3.0, 300.0));
        }
        ref other => panic!("expected the track fill, got {other:?}"),
    }
}
