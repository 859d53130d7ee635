//! One-shot section reveals.
//!
//! A section stays in its pre-entrance presentation until it first scrolls
//! into view, then keeps the revealed presentation for the rest of its life.
//! Children of a revealed section animate in document order with a constant
//! per-child delay.

/// Visibility phase of a section. There is no edge back to `Hidden`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Hidden,
    Revealed,
}

/// One-way latch from `Hidden` to `Revealed`.
///
/// Viewport observers fire on every threshold crossing; the latch absorbs
/// everything after the first so the entrance animation plays at most once
/// per mount.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealLatch {
    state: RevealState,
}

impl RevealLatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(self) -> RevealState {
        self.state
    }

    pub fn is_revealed(self) -> bool {
        self.state == RevealState::Revealed
    }

    /// Records a threshold crossing. Returns `true` only on the
    /// `Hidden` -> `Revealed` edge.
    pub fn trigger(&mut self) -> bool {
        match self.state {
            RevealState::Hidden => {
                self.state = RevealState::Revealed;
                true
            }
            RevealState::Revealed => false,
        }
    }
}

/// Delay before the `index`-th sibling of a revealed group starts animating.
pub fn stagger_delay_ms(index: usize, base_unit_ms: u32, leading_offset: u32) -> u32 {
    (index as u32 + leading_offset) * base_unit_ms
}

/// Inline style fragment carrying the stagger delay.
///
/// Only meaningful once the owning section is revealed; hidden sections must
/// not apply it, or children would start their entrance ahead of the parent.
pub fn stagger_style(index: usize, base_unit_ms: u32, leading_offset: u32) -> String {
    format!(
        "animation-delay: {}ms;",
        stagger_delay_ms(index, base_unit_ms, leading_offset)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latch_starts_hidden() {
        let latch = RevealLatch::new();
        assert_eq!(latch.state(), RevealState::Hidden);
        assert!(!latch.is_revealed());
    }

    #[test]
    fn test_latch_triggers_once() {
        let mut latch = RevealLatch::new();
        assert!(latch.trigger());
        assert!(latch.is_revealed());
        assert!(!latch.trigger());
        assert!(latch.is_revealed());
    }

    #[test]
    fn test_latch_survives_repeated_crossings() {
        let mut latch = RevealLatch::new();
        latch.trigger();
        // Scrolling the section out of view and back produces more observer
        // callbacks; none of them may move the latch.
        for _ in 0..10 {
            assert!(!latch.trigger());
            assert_eq!(latch.state(), RevealState::Revealed);
        }
    }

    #[test]
    fn test_stagger_delay_is_linear() {
        assert_eq!(stagger_delay_ms(0, 150, 0), 0);
        assert_eq!(stagger_delay_ms(1, 150, 0), 150);
        assert_eq!(stagger_delay_ms(2, 100, 3), 500);
    }

    #[test]
    fn test_stagger_delay_is_pure() {
        for _ in 0..3 {
            assert_eq!(stagger_delay_ms(2, 100, 3), 500);
        }
    }

    #[test]
    fn test_stagger_style_formats_delay() {
        assert_eq!(stagger_style(2, 200, 0), "animation-delay: 400ms;");
    }
}
