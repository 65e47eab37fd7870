/// A source of frame timestamps in milliseconds.
pub trait FrameClock {
    fn next_frame(&mut self) -> f64;
}

/// Evenly spaced synthetic frames, for headless runs and tests.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FixedStepClock {
    now: f64,
    step: f64,
}

impl FixedStepClock {
    pub const SIXTY_HZ: f64 = 1000.0 / 60.0;

    pub fn new(start: f64, step: f64) -> Self {
        FixedStepClock { now: start, step }
    }

    pub fn sixty_hz() -> Self {
        Self::new(0.0, Self::SIXTY_HZ)
    }

    pub fn now(&self) -> f64 {
        self.now
    }
}

impl FrameClock for FixedStepClock {
    fn next_frame(&mut self) -> f64 {
        self.now += self.step;
        self.now
    }
}

/// Feed frames to `step` until it yields a value or `max_frames` run out.
pub fn drive<C, T, F>(clock: &mut C, max_frames: usize, mut step: F) -> Option<T>
where
    C: FrameClock + ?Sized,
    F: FnMut(f64) -> Option<T>,
{
    for _ in 0..max_frames {
        if let Some(value) = step(clock.next_frame()) {
            return Some(value);
        }
    }
    log::debug!("gave up after {max_frames} frames");
    None
}
