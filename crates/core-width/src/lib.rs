//! Terminal cell-width classification for Unicode code points.
//!
//! Answers one question: how many fixed-width terminal cells does a code
//! point (or string) advance the cursor? Widths are `-1` (control /
//! unprintable), `0` (combining marks, format controls), `1` (the narrow
//! default), or `2` (East Asian Wide / Fullwidth and VS16-promoted emoji
//! bases).
//!
//! Classification is table-driven against the generations bundled in
//! `core-tables`, one per supported Unicode release, selected by a version
//! token: an exact or partial version string, `"latest"`, or `"auto"` (an
//! injected override source, by default the `UNICODE_VERSION` environment
//! variable). Unknown versions degrade to the nearest lower bundled
//! generation with an advisory `tracing` warning; only a malformed token is
//! an error.
//!
//! ```
//! use core_width::{WidthEngine, wcswidth, wcwidth};
//!
//! assert_eq!(wcwidth('a'), 1);
//! assert_eq!(wcwidth('界'), 2);
//! assert_eq!(wcswidth("コンニチハ"), 10);
//!
//! let engine = WidthEngine::new();
//! assert_eq!(engine.resolve("4.9.9").unwrap(), "4.1.0");
//! assert_eq!(engine.char_width('界', "9.0.0").unwrap(), 2);
//! ```
//!
//! Everything here operates on scalar values; grapheme segmentation and
//! rendering are out of scope. All table data is immutable static state, so
//! classification is freely shareable across threads.

mod cache;
mod classify;
mod resolve;
mod version;

pub use cache::ResolveCache;
pub use classify::{UNPRINTABLE, WidthEngine};
pub use core_tables::supported_versions;
pub use resolve::{AUTO, EnvOverride, FixedOverride, LATEST, OverrideSource, Resolver,
    UNICODE_VERSION_ENV};
pub use version::{UnicodeVersion, VersionError};

/// Cells one `char` occupies under `"auto"` version resolution.
///
/// Returns `-1` for C0/C1 controls, `0` for zero-advance code points,
/// otherwise `1` or `2`.
pub fn wcwidth(c: char) -> i8 {
    WidthEngine::new().width_of_auto(c as u32)
}

/// Cells a whole string occupies under `"auto"` version resolution, or `-1`
/// if any of its chars is unprintable.
pub fn wcswidth(s: &str) -> isize {
    WidthEngine::new().string_width_auto(s, None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn convenience_functions_classify() {
        assert_eq!(wcwidth('a'), 1);
        assert_eq!(wcwidth('界'), 2);
        assert_eq!(wcwidth('\u{0301}'), 0);
        assert_eq!(wcwidth('\u{7}'), -1);
    }

    #[test]
    fn convenience_string_width() {
        assert_eq!(wcswidth(""), 0);
        assert_eq!(wcswidth("hello"), 5);
        assert_eq!(wcswidth("h\u{8}i"), -1);
    }

    #[test]
    fn supported_versions_reexported_and_ordered() {
        let versions: Vec<_> = supported_versions().collect();
        assert_eq!(versions.first(), Some(&"4.1.0"));
        assert_eq!(versions.last(), Some(&"16.0.0"));
    }
}
