use std::time::Duration;
use std::time::Instant;

use tracing::debug;

use crate::canvas::Canvas;
use crate::fps::FrameTimer;
use crate::render::Renderer;
use crate::universe::Universe;

/// Play/pause state machine driving the tick-then-render cycle.
///
/// There is no separate running flag: the pending frame deadline in
/// `next_frame` IS the state. `Some` means Running with a frame scheduled,
/// `None` means Paused. Pausing discards the pending deadline, which is the
/// cooperative equivalent of cancelling one scheduled animation frame.
pub struct Playback {
    next_frame: Option<Instant>,
    generation: u64,
    speed: u32,
    frame_interval: Duration,
}

impl Playback {
    /// Start Paused, at generation 1, one step per frame.
    pub fn new(frame_interval: Duration) -> Self {
        Self {
            next_frame: None,
            generation: 1,
            speed: 1,
            frame_interval,
        }
    }

    pub fn is_running(&self) -> bool {
        self.next_frame.is_some()
    }

    /// The generation counter. Updated once per step, not once per frame,
    /// so a mid-frame observer sees monotonically increasing values.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }

    /// Set the steps advanced per rendered frame. The caller guarantees a
    /// positive value.
    pub fn set_speed(&mut self, speed: u32) {
        debug_assert!(speed > 0, "speed must be positive");
        self.speed = speed;
    }

    /// Paused -> Running: request the first frame immediately.
    pub fn play(&mut self, now: Instant) {
        debug!("play");
        self.next_frame = Some(now);
    }

    /// Running -> Paused: cancel the one pending scheduled frame.
    pub fn pause(&mut self) {
        debug!("pause");
        self.next_frame = None;
    }

    pub fn toggle(&mut self, now: Instant) {
        if self.is_running() {
            self.pause();
        } else {
            self.play(now);
        }
    }

    /// Whether the scheduled frame is due.
    pub fn due(&self, now: Instant) -> bool {
        matches!(self.next_frame, Some(deadline) if now >= deadline)
    }

    /// Time until the pending frame, for the event-loop poll timeout.
    /// `None` while Paused.
    pub fn poll_timeout(&self, now: Instant) -> Option<Duration> {
        self.next_frame
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    /// Reset the generation counter for a replacement universe.
    pub fn reset_generation(&mut self) {
        self.generation = 1;
    }

    /// One frame body: record timing, advance `speed` generations, repaint,
    /// and schedule the next frame.
    pub fn frame(
        &mut self,
        now: Instant,
        universe: &mut Universe,
        renderer: &Renderer,
        canvas: &mut Canvas,
        timer: &mut FrameTimer,
    ) {
        timer.render();

        for _ in 0..self.speed {
            universe.tick();
            // published per step: the counter is readable between ticks
            self.generation += 1;
        }

        renderer.draw(canvas, universe.cells());

        self.next_frame = Some(now + self.frame_interval);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::GridGeometry;

    fn fixture() -> (Playback, Universe, Renderer, Canvas, FrameTimer) {
        let geometry = GridGeometry::new(2, 8, 8);
        let canvas = Canvas::new(geometry.canvas_width(), geometry.canvas_height());

        (
            Playback::new(Duration::from_millis(16)),
            Universe::new_dead(8, 8),
            Renderer::new(geometry),
            canvas,
            FrameTimer::new(),
        )
    }

    #[test]
    fn starts_paused_at_generation_one() {
        let (playback, ..) = fixture();

        assert!(!playback.is_running());
        assert_eq!(playback.generation(), 1);
        assert_eq!(playback.speed(), 1);
    }

    #[test]
    fn pending_deadline_is_the_running_flag() {
        let (mut playback, ..) = fixture();
        let now = Instant::now();

        playback.play(now);
        assert!(playback.is_running());
        assert!(playback.due(now));

        playback.pause();
        assert!(!playback.is_running());
        assert!(!playback.due(now));
        assert_eq!(playback.poll_timeout(now), None);
    }

    #[test]
    fn frame_advances_speed_generations_then_reschedules() {
        let (mut playback, mut universe, renderer, mut canvas, mut timer) = fixture();
        let now = Instant::now();

        playback.play(now);
        playback.set_speed(3);
        playback.frame(now, &mut universe, &renderer, &mut canvas, &mut timer);

        // three ticks happened before the single redraw
        assert_eq!(playback.generation(), 4);
        assert_eq!(timer.len(), 1);

        // the next frame is scheduled one interval out
        assert!(!playback.due(now));
        assert!(playback.due(now + Duration::from_millis(16)));
    }

    #[test]
    fn pause_and_resume_does_not_skip_or_duplicate_steps() {
        let (mut playback, mut universe, renderer, mut canvas, mut timer) = fixture();
        let now = Instant::now();

        playback.play(now);
        playback.frame(now, &mut universe, &renderer, &mut canvas, &mut timer);
        playback.frame(now, &mut universe, &renderer, &mut canvas, &mut timer);

        let at_pause = playback.generation();
        playback.pause();
        playback.play(now);

        playback.frame(now, &mut universe, &renderer, &mut canvas, &mut timer);
        assert_eq!(playback.generation(), at_pause + playback.speed() as u64);
    }

    #[test]
    fn replacement_resets_generation_to_one() {
        let (mut playback, mut universe, renderer, mut canvas, mut timer) = fixture();
        let now = Instant::now();

        playback.play(now);
        for _ in 0..5 {
            playback.frame(now, &mut universe, &renderer, &mut canvas, &mut timer);
        }
        assert_eq!(playback.generation(), 6);

        playback.reset_generation();
        assert_eq!(playback.generation(), 1);
    }
}
