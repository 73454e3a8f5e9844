use std::sync::mpsc;
use std::time::{Duration, Instant};

use julia_animator::{
    AnimationController, AnimationSettings, FrameLoop, FramePresenterPort, FrameTelemetry,
    InputCommand, PixelBuffer, StopHandle, TelemetryReadout, ViewLimits, ViewTransform,
    ZoomDirection,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn seeded_controller(width: u32, height: u32, start: Instant) -> AnimationController {
    AnimationController::with_settings(
        ViewLimits::default(),
        AnimationSettings::default(),
        StdRng::seed_from_u64(42),
        width,
        height,
        start,
    )
}

#[test]
fn reset_restores_defaults_after_arbitrary_interaction() {
    let start = Instant::now();
    let mut controller = seeded_controller(800, 600, start);

    controller.apply(InputCommand::DragStart { x: 10.0, y: 10.0 }, start);
    controller.apply(InputCommand::DragMove { x: 70.0, y: -20.0 }, start);
    controller.apply(InputCommand::DragEnd, start);
    for _ in 0..5 {
        controller.apply(
            InputCommand::Zoom {
                direction: ZoomDirection::In,
                pointer_x: 123.0,
                pointer_y: 456.0,
            },
            start,
        );
    }
    controller.apply(InputCommand::SetSpeed(2.7), start);
    controller.apply(InputCommand::SetMaxIterations(420), start);
    controller.tick(start + Duration::from_secs(3));

    let later = start + Duration::from_secs(5);
    controller.apply(InputCommand::Reset, later);
    let report = controller.tick(later);

    let view = controller.view();
    assert_eq!(view.zoom(), 1.0);
    assert_eq!((view.offset_x(), view.offset_y()), (0.0, 0.0));
    assert_eq!(view.speed(), 1.0);
    assert_eq!(view.max_iterations(), 100);
    // The reset tick itself advances the phase once.
    assert!((view.time_phase() - 0.01).abs() < 1e-12);

    let mut readout = TelemetryReadout::default();
    readout.update(&report.telemetry);
    assert_eq!(readout.elapsed(), "0.0");
}

#[test]
fn randomize_stays_within_ranges() {
    let start = Instant::now();
    let mut controller = seeded_controller(16, 16, start);

    for _ in 0..200 {
        controller.apply(InputCommand::Randomize, start);

        let view = controller.view();
        assert!((50..300).contains(&view.max_iterations()));
        assert!(view.zoom() >= 0.5 && view.zoom() < 3.0);
        assert!(view.speed() >= 0.1 && view.speed() < 3.0);
        assert!(view.time_phase() >= 0.0 && view.time_phase() < 100.0);
    }
}

#[test]
fn wheel_zoom_keeps_point_under_pointer_fixed() {
    let start = Instant::now();
    let mut controller = seeded_controller(800, 600, start);
    controller.apply(InputCommand::Drag { dx: 37.0, dy: -12.0 }, start);

    let (pointer_x, pointer_y) = (250.0, 410.0);
    let surface = controller.surface_size().expect("surface is non-empty");
    let before =
        ViewTransform::from_view(controller.view(), surface).to_fractal_space(pointer_x, pointer_y);

    controller.apply(
        InputCommand::Zoom {
            direction: ZoomDirection::Out,
            pointer_x,
            pointer_y,
        },
        start,
    );

    let after =
        ViewTransform::from_view(controller.view(), surface).to_fractal_space(pointer_x, pointer_y);
    assert!((controller.view().zoom() - 0.9).abs() < 1e-12);
    assert!((before.real - after.real).abs() < 1e-9);
    assert!((before.imag - after.imag).abs() < 1e-9);
}

#[test]
fn zoom_at_surface_centre_leaves_offsets_unchanged() {
    let start = Instant::now();
    let mut controller = seeded_controller(800, 600, start);

    controller.apply(
        InputCommand::Zoom {
            direction: ZoomDirection::In,
            pointer_x: 400.0,
            pointer_y: 300.0,
        },
        start,
    );

    let view = controller.view();
    assert!((view.zoom() - 1.1).abs() < 1e-12);
    assert!(view.offset_x().abs() < 1e-9);
    assert!(view.offset_y().abs() < 1e-9);
}

#[test]
fn identical_sessions_render_identical_frames() {
    let start = Instant::now();
    let mut first = seeded_controller(2, 2, start);
    let mut second = seeded_controller(2, 2, start);

    let first_frame = first.tick(start).pixel_buffer.expect("frame rendered");
    let second_frame = second.tick(start).pixel_buffer.expect("frame rendered");

    assert_eq!(first_frame.data(), second_frame.data());
    assert_eq!(first_frame.data().len(), 2 * 2 * 4);
    assert!(first_frame.data().chunks_exact(4).all(|pixel| pixel[3] == 255));
}

#[test]
fn zero_area_surface_skips_render_but_keeps_ticking() {
    let start = Instant::now();
    let mut controller = seeded_controller(0, 600, start);

    let report = controller.tick(start);

    assert!(report.pixel_buffer.is_none());
    assert!(controller.view().time_phase() > 0.0);
}

struct RecordingPresenter {
    frames: usize,
    last_telemetry: Option<FrameTelemetry>,
    stop_after: usize,
    stop: StopHandle,
}

impl FramePresenterPort for RecordingPresenter {
    fn present(&mut self, pixel_buffer: &PixelBuffer) {
        assert_eq!((pixel_buffer.width(), pixel_buffer.height()), (8, 6));
        self.frames += 1;
        if self.frames >= self.stop_after {
            self.stop.stop();
        }
    }

    fn publish_telemetry(&mut self, telemetry: &FrameTelemetry) {
        self.last_telemetry = Some(*telemetry);
    }
}

#[test]
fn frame_loop_applies_queued_commands_before_ticking() {
    let start = Instant::now();
    let mut controller = seeded_controller(8, 6, start);
    let frame_loop = FrameLoop::new();
    let (sender, receiver) = mpsc::channel();

    sender.send(InputCommand::SetSpeed(0.0)).expect("receiver alive");
    sender.send(InputCommand::SetMaxIterations(64)).expect("receiver alive");

    let mut presenter = RecordingPresenter {
        frames: 0,
        last_telemetry: None,
        stop_after: 3,
        stop: frame_loop.stop_handle(),
    };

    let ticks = frame_loop.run(&mut controller, &receiver, &mut presenter);

    assert_eq!(ticks, 3);
    assert_eq!(presenter.frames, 3);
    assert!(presenter.last_telemetry.is_some());
    assert_eq!(controller.view().time_phase(), 0.0);
    assert_eq!(controller.view().max_iterations(), 64);
}
