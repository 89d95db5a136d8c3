//! Reveal-once latch for scroll-triggered animations.

/// Latches on the first visible observation and never resets
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct RevealOnce {
    revealed: bool,
}

impl RevealOnce {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Record a visibility observation.
    ///
    /// Returns true only for the observation that starts the animation.
    pub fn fire(&mut self, visible: bool) -> bool {
        if self.revealed || !visible {
            return false;
        }
        self.revealed = true;
        tracing::trace!("reveal fired");
        true
    }
}
