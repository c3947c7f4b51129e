//! Dotted Unicode version strings as comparable integer tuples.
//!
//! Version order is numeric, never lexical: `"10.0.0"` sorts after `"9.0.0"`
//! because the comparison runs componentwise over parsed integers. A token
//! with any non-numeric component is a hard error; resolution never guesses
//! at what a caller meant by `"9.x"`.

use smallvec::SmallVec;
use std::fmt;

/// Error raised for version tokens that cannot be parsed.
///
/// This is the only hard failure in the crate. Unknown-but-parseable
/// versions are substituted with an advisory warning instead (see
/// [`crate::resolve::Resolver`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    /// A dotted component was empty or non-numeric.
    Malformed { token: String },
}

impl fmt::Display for VersionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionError::Malformed { token } => write!(
                f,
                "malformed version token {token:?}: expected dot-separated non-negative integers"
            ),
        }
    }
}

impl std::error::Error for VersionError {}

/// A parsed dotted version, e.g. `"9.0.0"` -> `[9, 0, 0]`.
///
/// Tokens may be partial (`"8.0"`, `"8"`); components beyond the third are
/// accepted but never occur in bundled data. Ordering is derived, which for
/// the inner vector is exactly lexicographic integer-tuple comparison.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct UnicodeVersion {
    components: SmallVec<[u32; 3]>,
}

impl UnicodeVersion {
    /// Parse a dotted token. Empty tokens and non-numeric components fail.
    pub fn parse(token: &str) -> Result<Self, VersionError> {
        let mut components = SmallVec::new();
        for part in token.split('.') {
            let value: u32 = part.parse().map_err(|_| VersionError::Malformed {
                token: token.to_string(),
            })?;
            components.push(value);
        }
        Ok(Self { components })
    }

    /// Number of dotted components the token carried.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// True when this version, truncated to as many leading components as
    /// `requested` carries, is numerically at or below `requested`.
    ///
    /// Truncation is what makes a partial token behave as an exact numeric
    /// match: `"8.0.0"` satisfies a requested `"8.0"` because `[8, 0] <=
    /// [8, 0]`, while the untruncated `[8, 0, 0]` would not.
    pub fn satisfies(&self, requested: &UnicodeVersion) -> bool {
        let keep = self.components.len().min(requested.components.len());
        self.components[..keep] <= requested.components[..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn v(token: &str) -> UnicodeVersion {
        UnicodeVersion::parse(token).expect("test token parses")
    }

    #[test]
    fn parses_full_and_partial_tokens() {
        assert_eq!(v("9.0.0").len(), 3);
        assert_eq!(v("8.0").len(), 2);
        assert_eq!(v("1").len(), 1);
    }

    #[test]
    fn ordering_is_numeric_not_lexical() {
        assert!(v("10.0.0") > v("9.0.0"));
        assert!(v("5.2.0") > v("5.1.0"));
        assert!(v("4.1.0") < v("4.9.9"));
    }

    #[test]
    fn shorter_prefix_sorts_below_its_extension() {
        assert!(v("8.0") < v("8.0.0"));
    }

    #[test]
    fn malformed_components_are_hard_errors() {
        for bad in ["", "latest ", "9.x.0", "4..0", "9.0.0-beta", "one"] {
            assert!(
                UnicodeVersion::parse(bad).is_err(),
                "token {bad:?} should not parse"
            );
        }
    }

    #[test]
    fn satisfies_truncates_to_requested_length() {
        assert!(v("8.0.0").satisfies(&v("8.0")));
        assert!(v("8.0.0").satisfies(&v("8")));
        assert!(v("4.1.0").satisfies(&v("4.9.9")));
        assert!(!v("5.0.0").satisfies(&v("4.9.9")));
        assert!(!v("9.0.0").satisfies(&v("8.0")));
    }
}
