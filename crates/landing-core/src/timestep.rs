use crate::constants::{MAX_STEPS_PER_FRAME, STEPS_PER_SEC};
use std::time::Duration;

/// Converts variable frame times into a whole number of fixed simulation
/// steps, carrying the remainder into the next frame.
#[derive(Clone, Debug)]
pub struct FixedStep {
    step: Duration,
    max_steps: u32,
    accum: Duration,
}

impl Default for FixedStep {
    fn default() -> Self {
        Self::new(STEPS_PER_SEC, MAX_STEPS_PER_FRAME)
    }
}

impl FixedStep {
    pub fn new(steps_per_sec: u32, max_steps: u32) -> Self {
        Self {
            step: Duration::from_secs(1) / steps_per_sec.max(1),
            max_steps: max_steps.max(1),
            accum: Duration::ZERO,
        }
    }

    pub fn step(&self) -> Duration {
        self.step
    }

    /// Feed `dt` of wall time and return how many steps to run now.
    pub fn advance(&mut self, dt: Duration) -> u32 {
        self.accum += dt;
        let mut steps = 0;
        while self.accum >= self.step {
            self.accum -= self.step;
            steps += 1;
            if steps == self.max_steps {
                // drop backlog (e.g. a tab coming back from the background)
                self.accum = Duration::ZERO;
                break;
            }
        }
        steps
    }

    pub fn reset(&mut self) {
        self.accum = Duration::ZERO;
    }
}
