use crate::controllers::animation::commands::InputCommand;
use crate::controllers::animation::controller::AnimationController;
use crate::controllers::animation::ports::presenter::FramePresenterPort;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

/// Roughly one display refresh at 60 Hz.
pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_micros(16_667);

/// Shared flag that stops a [`FrameLoop`] before its next tick.
#[derive(Debug, Clone, Default)]
pub struct StopHandle {
    stopped: Arc<AtomicBool>,
}

impl StopHandle {
    pub fn stop(&self) {
        self.stopped.store(true, Ordering::Release);
    }

    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Acquire)
    }
}

/// Free-running tick loop for hosts without their own event loop.
///
/// Each iteration drains pending commands, runs one tick and hands the
/// results to the presenter. Stopping only prevents the next tick; a tick in
/// progress always completes.
#[derive(Debug, Clone)]
pub struct FrameLoop {
    frame_interval: Option<Duration>,
    stop: StopHandle,
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameLoop {
    /// A loop that yields between ticks but never sleeps.
    #[must_use]
    pub fn new() -> Self {
        Self {
            frame_interval: None,
            stop: StopHandle::default(),
        }
    }

    /// A loop that sleeps off whatever is left of `frame_interval` after each tick.
    #[must_use]
    pub fn paced(frame_interval: Duration) -> Self {
        Self {
            frame_interval: Some(frame_interval),
            stop: StopHandle::default(),
        }
    }

    #[must_use]
    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    /// Runs until stopped and returns the number of ticks completed.
    pub fn run<P: FramePresenterPort>(
        &self,
        controller: &mut AnimationController,
        commands: &Receiver<InputCommand>,
        presenter: &mut P,
    ) -> u64 {
        let mut ticks = 0;

        while !self.stop.is_stopped() {
            let tick_started = Instant::now();

            drain_commands(controller, commands, tick_started);

            let report = controller.tick(tick_started);
            if let Some(pixel_buffer) = &report.pixel_buffer {
                presenter.present(pixel_buffer);
            }
            presenter.publish_telemetry(&report.telemetry);
            ticks += 1;

            match self.frame_interval {
                Some(interval) => {
                    let remaining = interval.saturating_sub(tick_started.elapsed());
                    if !remaining.is_zero() {
                        thread::sleep(remaining);
                    }
                }
                None => thread::yield_now(),
            }
        }

        ticks
    }
}

fn drain_commands(
    controller: &mut AnimationController,
    commands: &Receiver<InputCommand>,
    now: Instant,
) {
    loop {
        match commands.try_recv() {
            Ok(command) => controller.apply(command, now),
            Err(TryRecvError::Empty | TryRecvError::Disconnected) => break,
        }
    }
}
