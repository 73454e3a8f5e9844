use crate::controllers::animation::commands::InputCommand;
use crate::controllers::animation::drag::DragState;
use crate::core::actions::render_frame::render_frame;
use crate::core::animation::clock::SessionClock;
use crate::core::animation::fps_counter::FpsCounter;
use crate::core::animation::settings::AnimationSettings;
use crate::core::animation::telemetry::FrameTelemetry;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::surface_size::SurfaceSize;
use crate::core::data::view_state::{Adjustment, ViewState};
use crate::core::view::limits::ViewLimits;
use crate::core::view::zoom::{ZoomDirection, zoom_at_pointer};
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Instant;

/// Result of one animation tick.
#[derive(Debug)]
pub struct TickReport {
    /// `None` while the surface has zero area.
    pub pixel_buffer: Option<PixelBuffer>,
    pub telemetry: FrameTelemetry,
}

/// Owns all mutable animation state and is its only writer.
///
/// Input is fed in through [`apply`](Self::apply) and frames come out of
/// [`tick`](Self::tick). Callers interleave the two on one thread.
pub struct AnimationController {
    view: ViewState,
    limits: ViewLimits,
    settings: AnimationSettings,
    drag: DragState,
    fps: FpsCounter,
    clock: SessionClock,
    last_fps: Option<u32>,
    surface_width: u32,
    surface_height: u32,
    rng: StdRng,
}

impl AnimationController {
    #[must_use]
    pub fn new(surface_width: u32, surface_height: u32, now: Instant) -> Self {
        Self::with_settings(
            ViewLimits::default(),
            AnimationSettings::default(),
            StdRng::from_entropy(),
            surface_width,
            surface_height,
            now,
        )
    }

    #[must_use]
    pub fn with_settings(
        limits: ViewLimits,
        settings: AnimationSettings,
        rng: StdRng,
        surface_width: u32,
        surface_height: u32,
        now: Instant,
    ) -> Self {
        let fps = FpsCounter::new(now, settings.fps_window);

        Self {
            view: ViewState::default(),
            limits,
            settings,
            drag: DragState::default(),
            fps,
            clock: SessionClock::new(now),
            last_fps: None,
            surface_width,
            surface_height,
            rng,
        }
    }

    #[must_use]
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// The most recently published FPS value.
    #[must_use]
    pub fn last_fps(&self) -> Option<u32> {
        self.last_fps
    }

    #[must_use]
    pub fn zoom_slider_value(&self) -> f64 {
        self.limits.slider_zoom(self.view.zoom())
    }

    #[must_use]
    pub fn surface_size(&self) -> Option<SurfaceSize> {
        SurfaceSize::new(self.surface_width, self.surface_height).ok()
    }

    pub fn resize(&mut self, surface_width: u32, surface_height: u32) {
        self.surface_width = surface_width;
        self.surface_height = surface_height;
    }

    pub fn apply(&mut self, command: InputCommand, now: Instant) {
        match command {
            InputCommand::DragStart { x, y } => self.drag.start(x, y),
            InputCommand::DragMove { x, y } => {
                if let Some((dx, dy)) = self.drag.move_to(x, y) {
                    self.pan(dx, dy);
                }
            }
            InputCommand::DragEnd => self.drag.end(),
            InputCommand::Drag { dx, dy } => self.pan(dx, dy),
            InputCommand::Zoom {
                direction,
                pointer_x,
                pointer_y,
            } => self.zoom_at(direction, pointer_x, pointer_y),
            InputCommand::SetSpeed(speed) => {
                report("speed", speed, self.view.set_speed(speed));
            }
            InputCommand::SetZoom(zoom) => {
                report("zoom", zoom, self.view.set_zoom(zoom, &self.limits));
            }
            InputCommand::SetMaxIterations(max_iterations) => {
                let adjustment = self.view.set_max_iterations(max_iterations);
                report("max iterations", max_iterations as f64, adjustment);
            }
            InputCommand::Reset => self.reset(now),
            InputCommand::Randomize => self.randomize(),
        }
    }

    /// Advances the phase, renders a frame and updates the readouts.
    pub fn tick(&mut self, now: Instant) -> TickReport {
        self.view.advance_phase(self.settings.phase_step);

        let started = Instant::now();
        let pixel_buffer = self
            .surface_size()
            .map(|surface| render_frame(&self.view, surface));
        let render_duration = started.elapsed();

        let fps = self.fps.record_frame(now);
        if let Some(fps) = fps {
            debug!(
                "{} fps, last frame rendered in {:.1} ms",
                fps,
                render_duration.as_secs_f64() * 1000.0
            );
            self.last_fps = Some(fps);
        }

        TickReport {
            pixel_buffer,
            telemetry: FrameTelemetry {
                fps,
                elapsed_secs: self.clock.elapsed_secs(now),
                render_duration,
            },
        }
    }

    fn pan(&mut self, dx: f64, dy: f64) {
        if self.view.pan_by(dx, dy) == Adjustment::Ignored {
            warn!("ignoring non-finite pan delta ({dx}, {dy})");
        }
    }

    fn zoom_at(&mut self, direction: ZoomDirection, pointer_x: f64, pointer_y: f64) {
        let Some(surface) = self.surface_size() else {
            return;
        };

        if !pointer_x.is_finite() || !pointer_y.is_finite() {
            warn!("ignoring zoom at non-finite pointer ({pointer_x}, {pointer_y})");
            return;
        }

        let step = zoom_at_pointer(
            &self.view,
            surface,
            pointer_x,
            pointer_y,
            direction,
            &self.limits,
        );

        self.view.set_zoom(step.zoom, &self.limits);
        self.view.set_offset(step.offset_x, step.offset_y);
    }

    fn reset(&mut self, now: Instant) {
        self.view.reset();
        self.clock.restart(now);

        info!("view reset to defaults");
    }

    fn randomize(&mut self) {
        let ranges = self.settings.randomize.clone();

        self.view
            .set_time_phase(self.rng.gen_range(ranges.time_phase));
        self.view.set_speed(self.rng.gen_range(ranges.speed));
        self.view
            .set_zoom(self.rng.gen_range(ranges.zoom), &self.limits);
        self.view
            .set_max_iterations(i64::from(self.rng.gen_range(ranges.max_iterations)));

        info!(
            "randomized: phase {:.2}, speed {:.2}, zoom {:.2}, max iterations {}",
            self.view.time_phase(),
            self.view.speed(),
            self.view.zoom(),
            self.view.max_iterations()
        );
    }
}

fn report(parameter: &str, requested: f64, adjustment: Adjustment) {
    match adjustment {
        Adjustment::Exact => {}
        Adjustment::Clamped => warn!("{parameter} {requested} out of range, clamped"),
        Adjustment::Ignored => warn!("ignoring non-finite {parameter}"),
    }
}

impl std::fmt::Debug for AnimationController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnimationController")
            .field("view", &self.view)
            .field("dragging", &self.drag.is_dragging())
            .field("last_fps", &self.last_fps)
            .field("surface", &(self.surface_width, self.surface_height))
            .finish_non_exhaustive()
    }
}
