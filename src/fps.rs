use std::collections::VecDeque;
use std::time::Instant;

/// Number of frame-rate samples kept in the rolling window.
const WINDOW: usize = 100;

/// Rolling-window frames-per-second estimator.
///
/// Each `render` call measures the time since the previous one and records
/// the instantaneous rate `1000 / delta_ms`. A zero delta yields `+inf` on
/// purpose: exceptional timing (first frame, throttled terminal) should be
/// visible in the stats rather than silently clamped.
pub struct FrameTimer {
    window: VecDeque<f64>,
    last: Instant,
    summary: String,
}

impl FrameTimer {
    pub fn new() -> Self {
        Self {
            window: VecDeque::with_capacity(WINDOW + 1),
            last: Instant::now(),
            summary: String::new(),
        }
    }

    /// Record one frame boundary. Called once per frame, never concurrently.
    pub fn render(&mut self) {
        let now = Instant::now();
        let delta_ms = now.duration_since(self.last).as_secs_f64() * 1000.0;
        self.last = now;

        self.record_delta(delta_ms);
    }

    /// Record an explicit frame delta in milliseconds.
    ///
    /// Split out from [`render`](Self::render) so the window arithmetic can
    /// be driven without a clock.
    pub fn record_delta(&mut self, delta_ms: f64) {
        let rate = 1000.0 / delta_ms;

        self.window.push_back(rate);
        while self.window.len() > WINDOW {
            self.window.pop_front();
        }

        self.rebuild_summary();
    }

    pub fn len(&self) -> usize {
        self.window.len()
    }

    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }

    /// The most recent instantaneous rate.
    pub fn latest(&self) -> Option<f64> {
        self.window.back().copied()
    }

    pub fn mean(&self) -> Option<f64> {
        if self.window.is_empty() {
            return None;
        }

        let sum: f64 = self.window.iter().sum();
        Some(sum / self.window.len() as f64)
    }

    pub fn min(&self) -> Option<f64> {
        self.window.iter().copied().reduce(f64::min)
    }

    pub fn max(&self) -> Option<f64> {
        self.window.iter().copied().reduce(f64::max)
    }

    /// The formatted stats block, rewritten on every sample.
    pub fn summary(&self) -> &str {
        &self.summary
    }

    fn rebuild_summary(&mut self) {
        let latest = self.latest().unwrap_or(0.0);
        let mean = self.mean().unwrap_or(0.0);
        let min = self.min().unwrap_or(0.0);
        let max = self.max().unwrap_or(0.0);

        self.summary = format!(
            "Frames per Second:\n         latest = {}\navg of last 100 = {}\nmin of last 100 = {}\nmax of last 100 = {}",
            latest.round(),
            mean.round(),
            min.round(),
            max.round(),
        );
    }
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new()
    }
}
