use unicode_segmentation::UnicodeSegmentation;

/// A validated username. Lookups go through [`UserName::key`], which ignores case.
#[derive(Clone, Debug)]
pub struct UserName(String);

impl UserName {
    pub fn parse(s: impl Into<String>) -> Result<Self, String> {
        let s = s.into();
        if s.trim().is_empty() {
            Err(format!("Username {:?} has no non-whitespace characters.", s))
        } else if s.graphemes(true).count() > 256 {
            Err(format!("Username {} is too long.", s))
        } else if s.chars().any(char::is_control) {
            Err(format!("Username {:?} contains control characters.", s))
        } else {
            Ok(Self(s))
        }
    }

    /// Lowercased form, used as a case-insensitive lookup key.
    pub fn key(&self) -> String {
        self.0.to_lowercase()
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
