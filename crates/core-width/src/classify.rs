//! Cell-width classification for code points and strings.
//!
//! Classification order, first match wins: control rule, zero-width table,
//! wide table, variation-selector block, VS16 promotion set, then the
//! single-cell default. The ambiguous East Asian category is deliberately
//! collapsed into that default; callers wanting historic-CJK double-width
//! ambiguity handling need a different policy layer, not this one.
//!
//! All tables are immutable statics, so any number of threads may classify
//! concurrently with no synchronization.

use crate::resolve::{EnvOverride, OverrideSource, Resolver};
use crate::version::VersionError;
use core_tables::{Interval, VS16_NARROW_TO_WIDE, VersionTables};

/// Control characters and other unprintables classify as this.
pub const UNPRINTABLE: i8 = -1;

/// Interval membership via binary search over a sorted, disjoint table.
///
/// Queries outside the table's overall span return early without searching.
pub(crate) fn bisearch(cp: u32, table: &[Interval]) -> bool {
    let (Some(&(first_start, _)), Some(&(_, last_end))) = (table.first(), table.last()) else {
        return false;
    };
    if cp < first_start || cp > last_end {
        return false;
    }
    let mut lo = 0usize;
    let mut hi = table.len();
    while lo < hi {
        let mid = (lo + hi) / 2;
        let (start, end) = table[mid];
        if cp > end {
            lo = mid + 1;
        } else if cp < start {
            hi = mid;
        } else {
            return true;
        }
    }
    false
}

/// Classify one code point against a resolved table generation.
fn classify(cp: u32, tables: &VersionTables) -> i8 {
    // Beyond the Unicode scalar range there is nothing to display; treated
    // like a control character rather than a panic. Documented decision.
    if cp > 0x0010_FFFF {
        return UNPRINTABLE;
    }
    // C0/C1 controls: indeterminate effect on the terminal.
    if cp < 0x20 || (0x7F..0xA0).contains(&cp) {
        return UNPRINTABLE;
    }
    if bisearch(cp, tables.zero_width) {
        return 0;
    }
    if bisearch(cp, tables.wide_eastasian) {
        return 2;
    }
    // Variation selectors themselves occupy no cell.
    if (0xFE00..=0xFE0F).contains(&cp) {
        return 0;
    }
    // Narrow bases promoted to emoji presentation by a trailing VS16.
    if bisearch(cp, VS16_NARROW_TO_WIDE) {
        return 2;
    }
    1
}

/// Width classification engine over the bundled tables.
///
/// Generic over the `"auto"` override source; the default reads the
/// `UNICODE_VERSION` environment variable. Construction is free of I/O and
/// allocation, so creating one per call site is fine.
#[derive(Debug, Clone, Copy, Default)]
pub struct WidthEngine<S = EnvOverride> {
    resolver: Resolver<S>,
}

impl WidthEngine<EnvOverride> {
    pub fn new() -> Self {
        Self {
            resolver: Resolver::new(EnvOverride),
        }
    }
}

impl<S: OverrideSource> WidthEngine<S> {
    pub fn with_source(source: S) -> Self {
        Self {
            resolver: Resolver::new(source),
        }
    }

    /// Resolve a version token to the supported version it pins.
    pub fn resolve(&self, token: &str) -> Result<&'static str, VersionError> {
        self.resolver.resolve(token)
    }

    /// Cell width of one code point: `-1`, `0`, `1`, or `2`.
    pub fn width_of(&self, cp: u32, version: &str) -> Result<i8, VersionError> {
        let tables = self.resolver.resolve_tables(version)?;
        Ok(classify(cp, tables))
    }

    /// Cell width of one `char`.
    pub fn char_width(&self, c: char, version: &str) -> Result<i8, VersionError> {
        self.width_of(c as u32, version)
    }

    /// [`Self::width_of`] under `"auto"` resolution. Infallible: no caller
    /// token is parsed, and a broken override degrades to latest.
    pub fn width_of_auto(&self, cp: u32) -> i8 {
        classify(cp, self.resolver.resolve_auto())
    }

    /// [`Self::string_width`] under `"auto"` resolution.
    pub fn string_width_auto(&self, s: &str, limit: Option<usize>) -> isize {
        fold_width(s, limit, self.resolver.resolve_auto())
    }

    /// Total cell width of up to `limit` chars of `s` (all when `None`).
    ///
    /// Resolves the version once for the whole pass. Returns `-1` as soon as
    /// any char classifies unprintable; the remainder is not summed.
    pub fn string_width(
        &self,
        s: &str,
        limit: Option<usize>,
        version: &str,
    ) -> Result<isize, VersionError> {
        Ok(fold_width(s, limit, self.resolver.resolve_tables(version)?))
    }
}

/// Sum widths over the first `limit` chars against one resolved generation,
/// bailing to `-1` on the first unprintable rather than summing negatives.
fn fold_width(s: &str, limit: Option<usize>, tables: &VersionTables) -> isize {
    let take = limit.unwrap_or(usize::MAX);
    let mut total = 0isize;
    for c in s.chars().take(take) {
        let width = classify(c as u32, tables);
        if width < 0 {
            return -1;
        }
        total += isize::from(width);
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::FixedOverride;
    use pretty_assertions::assert_eq;

    fn engine() -> WidthEngine<FixedOverride> {
        WidthEngine::with_source(FixedOverride::absent())
    }

    #[test]
    fn bisearch_three_way_boundaries() {
        let table: &[Interval] = &[(10, 20), (30, 40)];
        let expected = [
            (9, false),
            (10, true),
            (20, true),
            (21, false),
            (29, false),
            (30, true),
            (41, false),
        ];
        for (query, hit) in expected {
            assert_eq!(bisearch(query, table), hit, "query {query}");
        }
    }

    #[test]
    fn bisearch_empty_and_single() {
        assert!(!bisearch(5, &[]));
        assert!(bisearch(7, &[(7, 7)]));
        assert!(!bisearch(8, &[(7, 7)]));
    }

    #[test]
    fn ascii_printable_is_single_cell() {
        assert_eq!(engine().char_width('a', "latest").unwrap(), 1);
        assert_eq!(engine().char_width(' ', "latest").unwrap(), 1);
        assert_eq!(engine().char_width('~', "latest").unwrap(), 1);
    }

    #[test]
    fn c0_and_c1_controls_unprintable() {
        let eng = engine();
        for cp in (0u32..0x20).chain(0x7F..0xA0) {
            assert_eq!(eng.width_of(cp, "latest").unwrap(), -1, "cp {cp:#X}");
        }
        // Boundary neighbours stay printable.
        assert_eq!(eng.width_of(0x20, "latest").unwrap(), 1);
        assert_eq!(eng.width_of(0x7E, "latest").unwrap(), 1);
        assert_eq!(eng.width_of(0xA0, "latest").unwrap(), 1);
    }

    #[test]
    fn combining_mark_zero_cells() {
        assert_eq!(engine().width_of(0x0301, "latest").unwrap(), 0);
    }

    #[test]
    fn cjk_ideograph_two_cells() {
        assert_eq!(engine().char_width('界', "latest").unwrap(), 2);
        assert_eq!(engine().char_width('漢', "9.0.0").unwrap(), 2);
    }

    #[test]
    fn hangul_jungseong_zero_cells() {
        assert_eq!(engine().width_of(0x1160, "latest").unwrap(), 0);
    }

    #[test]
    fn variation_selector_block_zero_cells() {
        let eng = engine();
        for cp in 0xFE00..=0xFE0F {
            assert_eq!(eng.width_of(cp, "latest").unwrap(), 0, "cp {cp:#X}");
        }
    }

    #[test]
    fn vs16_promoted_base_two_cells() {
        // COPYRIGHT SIGN sits in the narrow-to-wide promotion set.
        assert_eq!(engine().width_of(0xA9, "latest").unwrap(), 2);
    }

    #[test]
    fn beyond_scalar_range_unprintable() {
        assert_eq!(engine().width_of(0x0011_0000, "latest").unwrap(), -1);
        assert_eq!(engine().width_of(u32::MAX, "latest").unwrap(), -1);
    }

    #[test]
    fn emoji_width_depends_on_generation() {
        let eng = engine();
        // CYCLONE became East Asian Wide in the 9.0.0 emoji reclassification.
        assert_eq!(eng.width_of(0x1F300, "8.0.0").unwrap(), 1);
        assert_eq!(eng.width_of(0x1F300, "9.0.0").unwrap(), 2);
    }

    #[test]
    fn string_width_sums_mixed_text() {
        let eng = engine();
        assert_eq!(eng.string_width("abc", None, "latest").unwrap(), 3);
        assert_eq!(eng.string_width("コンニチハ", None, "latest").unwrap(), 10);
        assert_eq!(eng.string_width("a界b", None, "latest").unwrap(), 4);
        // Combining mark adds nothing.
        assert_eq!(eng.string_width("e\u{0301}", None, "latest").unwrap(), 1);
    }

    #[test]
    fn string_width_empty_and_zero_limit() {
        let eng = engine();
        assert_eq!(eng.string_width("", None, "latest").unwrap(), 0);
        assert_eq!(eng.string_width("界界界", Some(0), "latest").unwrap(), 0);
    }

    #[test]
    fn string_width_limit_counts_chars_not_cells() {
        let eng = engine();
        assert_eq!(eng.string_width("界界界", Some(2), "latest").unwrap(), 4);
        assert_eq!(eng.string_width("abc", Some(10), "latest").unwrap(), 3);
    }

    #[test]
    fn string_width_short_circuits_on_control() {
        let eng = engine();
        assert_eq!(eng.string_width("界\u{0}界", None, "latest").unwrap(), -1);
        assert_eq!(eng.string_width("abc\tdef", None, "latest").unwrap(), -1);
        // Control outside the limit window is never reached.
        assert_eq!(eng.string_width("ab\u{1}", Some(2), "latest").unwrap(), 2);
    }
}
