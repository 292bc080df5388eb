use std::time::{Duration, Instant};

/// How long a "copied" confirmation stays visible.
pub const COPY_INDICATOR_WINDOW: Duration = Duration::from_secs(2);

/// Transient confirmation that some text was copied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyIndicator {
    copied_at: Option<Instant>,
}

impl CopyIndicator {
    pub fn mark(&mut self, now: Instant) {
        self.copied_at = Some(now);
    }

    pub fn is_active(&self, now: Instant) -> bool {
        self.copied_at
            .is_some_and(|at| now.saturating_duration_since(at) < COPY_INDICATOR_WINDOW)
    }

    pub fn reset(&mut self) {
        self.copied_at = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expires_after_window() {
        let start = Instant::now();
        let mut indicator = CopyIndicator::default();
        assert!(!indicator.is_active(start));

        indicator.mark(start);
        assert!(indicator.is_active(start + Duration::from_millis(1999)));
        assert!(!indicator.is_active(start + COPY_INDICATOR_WINDOW));
    }

    #[test]
    fn test_reset() {
        let now = Instant::now();
        let mut indicator = CopyIndicator::default();
        indicator.mark(now);
        indicator.reset();
        assert!(!indicator.is_active(now));
    }
}
