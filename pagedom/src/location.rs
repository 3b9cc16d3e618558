/// The page address fragment, the part after `#`.
///
/// Stored without the leading `#`, so `"#main"` and `"main"` name the same
/// target. An empty fragment points nowhere.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Location {
    fragment: String,
    navigations: u64,
}

impl Location {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    /// Number of times the fragment actually changed.
    pub fn navigations(&self) -> u64 {
        self.navigations
    }

    /// Set the fragment.
    /// Returns true if it changed, which is what counts as a navigation.
    pub fn set_fragment(&mut self, value: &str) -> bool {
        let value = value.strip_prefix('#').unwrap_or(value);
        if self.fragment == value {
            return false;
        }
        self.fragment = value.to_string();
        self.navigations += 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_hash_is_ignored() {
        let mut location = Location::new();
        assert!(location.set_fragment("#top"));
        assert_eq!(location.fragment(), "top");
        assert!(!location.set_fragment("top"));
        assert_eq!(location.navigations(), 1);
    }
}
