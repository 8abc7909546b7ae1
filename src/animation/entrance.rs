/// One-shot "has this scene been presented" flag.
///
/// Bound the first time the host displays a frame and never reset, so the
/// background entrance fade plays exactly once per renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EntranceLatch {
    presented: bool,
}

impl EntranceLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that a frame has been shown. Returns true on the first call only.
    pub fn mark_presented(&mut self) -> bool {
        let first = !self.presented;
        self.presented = true;
        first
    }

    pub fn has_played(&self) -> bool {
        self.presented
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latch_binds_once() {
        let mut latch = EntranceLatch::new();
        assert!(!latch.has_played());

        assert!(latch.mark_presented());
        assert!(latch.has_played());

        assert!(!latch.mark_presented());
        assert!(latch.has_played());
    }
}
