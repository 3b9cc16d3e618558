use std::collections::HashSet;

/// Tracks which element is focused and which one the viewport last scrolled to.
#[derive(Debug, Default)]
pub struct FocusState {
    focused: Option<String>,
    scrolled_to: Option<String>,
    scrolls: u64,
}

impl FocusState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the currently focused element ID.
    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    /// Programmatically focus an element by ID.
    /// Returns true if focus changed.
    pub fn focus(&mut self, id: &str) -> bool {
        if self.focused.as_deref() == Some(id) {
            return false;
        }
        self.focused = Some(id.to_string());
        true
    }

    /// Element the viewport was last scrolled to.
    pub fn scrolled_to(&self) -> Option<&str> {
        self.scrolled_to.as_deref()
    }

    /// How many times the viewport has been scrolled to an element.
    pub fn scrolls(&self) -> u64 {
        self.scrolls
    }

    /// Scroll the viewport to an element. Always counts, even if already there.
    pub fn scroll_to(&mut self, id: &str) {
        self.scrolled_to = Some(id.to_string());
        self.scrolls += 1;
    }

    /// Forget elements no longer in the tree.
    pub fn retain(&mut self, current_ids: &HashSet<String>) {
        if self.focused.as_ref().is_some_and(|id| !current_ids.contains(id)) {
            self.focused = None;
        }
        if self.scrolled_to.as_ref().is_some_and(|id| !current_ids.contains(id)) {
            self.scrolled_to = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_reports_changes() {
        let mut state = FocusState::new();
        assert!(state.focus("a"));
        assert!(!state.focus("a"));
        assert!(state.focus("b"));
        assert_eq!(state.focused(), Some("b"));
    }

    #[test]
    fn retain_drops_removed_targets() {
        let mut state = FocusState::new();
        state.focus("gone");
        state.scroll_to("gone");
        state.retain(&HashSet::new());
        assert_eq!(state.focused(), None);
        assert_eq!(state.scrolled_to(), None);
        assert_eq!(state.scrolls(), 1);
    }
}
