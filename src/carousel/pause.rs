//! Pause reasons
//!
//! Hover, keyboard focus and the manual toggle pause the carousel
//! independently. The carousel is paused while any reason is active.

use std::collections::BTreeSet;
use std::fmt;
use strum::{Display, EnumIter, EnumString};

/// An independent source that suspends autoplay while active
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum PauseReason {
    /// Pointer is over the carousel surface
    Hover,
    /// Keyboard focus is on one of the carousel controls
    Focus,
    /// User toggled pause explicitly
    Manual,
}

/// Set of currently active pause reasons
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PauseReasons {
    active: BTreeSet<PauseReason>,
}

impl PauseReasons {
    /// Empty set: not paused
    pub fn new() -> Self {
        Self::default()
    }

    /// Activate a reason. Returns `true` if it was not already active.
    pub fn insert(&mut self, reason: PauseReason) -> bool {
        self.active.insert(reason)
    }

    /// Deactivate a reason. Returns `true` if it was active.
    pub fn remove(&mut self, reason: PauseReason) -> bool {
        self.active.remove(&reason)
    }

    pub fn contains(&self, reason: PauseReason) -> bool {
        self.active.contains(&reason)
    }

    /// Paused iff at least one reason is active
    pub fn is_paused(&self) -> bool {
        !self.active.is_empty()
    }
}

impl fmt::Display for PauseReasons {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.active.is_empty() {
            return write!(f, "none");
        }
        let names: Vec<String> = self.active.iter().map(|r| r.to_string()).collect();
        write!(f, "{}", names.join("+"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlapping_reasons_need_all_resumes() {
        let mut reasons = PauseReasons::new();
        reasons.insert(PauseReason::Hover);
        reasons.insert(PauseReason::Focus);
        reasons.remove(PauseReason::Hover);
        assert!(reasons.is_paused());
        reasons.remove(PauseReason::Focus);
        assert!(!reasons.is_paused());
    }

    #[test]
    fn test_insert_reports_change() {
        let mut reasons = PauseReasons::new();
        assert!(reasons.insert(PauseReason::Manual));
        assert!(!reasons.insert(PauseReason::Manual));
        assert!(reasons.remove(PauseReason::Manual));
        assert!(!reasons.remove(PauseReason::Manual));
    }

    #[test]
    fn test_display() {
        let mut reasons = PauseReasons::new();
        assert_eq!(reasons.to_string(), "none");
        reasons.insert(PauseReason::Focus);
        reasons.insert(PauseReason::Hover);
        assert_eq!(reasons.to_string(), "hover+focus");
    }
}
