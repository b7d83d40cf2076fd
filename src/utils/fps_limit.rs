use std::{
    future::Future,
    time::{Duration, Instant},
};

/// Suspension point between two generations.
pub trait Clock {
    fn wait_frame(&mut self) -> impl Future<Output = ()>;
}

/// Paces frames to `1 / max_fps` seconds, counting time already spent on the frame.
pub struct FpsLimiter {
    target_frametime: Duration,
    frame_timer: Instant,
    frametime_smoothed: f64,
}

impl FpsLimiter {
    /// `max_fps` must pass `Config::validate`, otherwise the frame time overflows.
    pub fn new(max_fps: f64) -> Self {
        Self {
            target_frametime: Duration::from_secs_f64(1. / max_fps),
            frame_timer: Instant::now(),
            frametime_smoothed: 0.,
        }
    }

    pub fn target_frametime(&self) -> Duration {
        self.target_frametime
    }

    pub fn fps(&self) -> f64 {
        1. / self.frametime_smoothed
    }
}

impl Clock for FpsLimiter {
    async fn wait_frame(&mut self) {
        let before_wait = self.frame_timer.elapsed();

        if self.target_frametime > before_wait {
            tokio::time::sleep(self.target_frametime - before_wait).await;
        }

        let after_wait = self.frame_timer.elapsed();
        let frametime = after_wait.as_secs_f64();
        self.frametime_smoothed += (frametime - self.frametime_smoothed) * 0.1;

        self.frame_timer = Instant::now();
    }
}

/// Never waits.
#[derive(Clone, Copy, Debug, Default)]
pub struct Unpaced;

impl Clock for Unpaced {
    async fn wait_frame(&mut self) {}
}
