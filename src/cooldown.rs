/// One-shot debounce counted in simulation steps.
///
/// After [`trigger`](Cooldown::trigger) the cooldown stays active for `period`
/// steps, the triggering step included. A period of zero never blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cooldown {
    period: u32,
    remaining: u32,
}

impl Cooldown {
    pub fn new(period: u32) -> Self {
        Self {
            period,
            remaining: 0,
        }
    }

    pub fn period(&self) -> u32 {
        self.period
    }

    pub fn is_ready(&self) -> bool {
        self.remaining == 0
    }

    pub fn trigger(&mut self) {
        self.remaining = self.period;
    }

    /// Advance one step. Called once at the start of every step.
    pub fn tick(&mut self) {
        self.remaining = self.remaining.saturating_sub(1);
    }

    pub fn reset(&mut self) {
        self.remaining = 0;
    }
}
