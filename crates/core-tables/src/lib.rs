//! Static Unicode width interval tables.
//!
//! One table generation per bundled Unicode release: a `zero_width` list
//! (combining marks and format controls that consume no cell) and a
//! `wide_eastasian` list (East Asian Wide / Fullwidth, two cells), plus a
//! version-independent VS16 promotion list. All data is produced by an
//! offline table build against the Unicode Character Database and checked in
//! as generated source; this crate only shapes and exposes it.
//!
//! Invariants the generator guarantees (and the test module re-checks, since
//! lookups trust them without re-validating):
//! - every table is sorted ascending by range start;
//! - ranges are inclusive, non-empty, and pairwise non-overlapping;
//! - `TABLES` is sorted ascending by numeric version order and non-empty.

mod vs16;
mod wide_eastasian;
mod zero_width;

pub use vs16::VS16_NARROW_TO_WIDE;

/// Inclusive range of code points sharing one width classification.
pub type Interval = (u32, u32);

/// Interval tables for one Unicode release.
#[derive(Debug, Clone, Copy)]
pub struct VersionTables {
    /// Dotted release string, e.g. `"9.0.0"`.
    pub version: &'static str,
    /// Code points that advance the cursor zero cells.
    pub zero_width: &'static [Interval],
    /// Code points that advance the cursor two cells.
    pub wide_eastasian: &'static [Interval],
}

/// Every bundled table generation, ascending by numeric version order.
///
/// The version strings of this slice are the authoritative supported-version
/// set for the whole process; it is fixed at compile time and never mutated.
pub static TABLES: &[VersionTables] = &[
    VersionTables {
        version: "4.1.0",
        zero_width: zero_width::ZERO_WIDTH_4_1_0,
        wide_eastasian: wide_eastasian::WIDE_EASTASIAN_4_1_0,
    },
    VersionTables {
        version: "5.0.0",
        zero_width: zero_width::ZERO_WIDTH_5_0_0,
        wide_eastasian: wide_eastasian::WIDE_EASTASIAN_5_0_0,
    },
    VersionTables {
        version: "5.1.0",
        zero_width: zero_width::ZERO_WIDTH_5_1_0,
        wide_eastasian: wide_eastasian::WIDE_EASTASIAN_5_1_0,
    },
    VersionTables {
        version: "5.2.0",
        zero_width: zero_width::ZERO_WIDTH_5_2_0,
        wide_eastasian: wide_eastasian::WIDE_EASTASIAN_5_2_0,
    },
    VersionTables {
        version: "6.0.0",
        zero_width: zero_width::ZERO_WIDTH_6_0_0,
        wide_eastasian: wide_eastasian::WIDE_EASTASIAN_6_0_0,
    },
    VersionTables {
        version: "6.1.0",
        zero_width: zero_width::ZERO_WIDTH_6_1_0,
        wide_eastasian: wide_eastasian::WIDE_EASTASIAN_6_1_0,
    },
    VersionTables {
        version: "7.0.0",
        zero_width: zero_width::ZERO_WIDTH_7_0_0,
        wide_eastasian: wide_eastasian::WIDE_EASTASIAN_7_0_0,
    },
    VersionTables {
        version: "8.0.0",
        zero_width: zero_width::ZERO_WIDTH_8_0_0,
        wide_eastasian: wide_eastasian::WIDE_EASTASIAN_8_0_0,
    },
    VersionTables {
        version: "9.0.0",
        zero_width: zero_width::ZERO_WIDTH_9_0_0,
        wide_eastasian: wide_eastasian::WIDE_EASTASIAN_9_0_0,
    },
    VersionTables {
        version: "10.0.0",
        zero_width: zero_width::ZERO_WIDTH_10_0_0,
        wide_eastasian: wide_eastasian::WIDE_EASTASIAN_10_0_0,
    },
    VersionTables {
        version: "11.0.0",
        zero_width: zero_width::ZERO_WIDTH_11_0_0,
        wide_eastasian: wide_eastasian::WIDE_EASTASIAN_11_0_0,
    },
    VersionTables {
        version: "12.0.0",
        zero_width: zero_width::ZERO_WIDTH_12_0_0,
        wide_eastasian: wide_eastasian::WIDE_EASTASIAN_12_0_0,
    },
    VersionTables {
        version: "12.1.0",
        zero_width: zero_width::ZERO_WIDTH_12_1_0,
        wide_eastasian: wide_eastasian::WIDE_EASTASIAN_12_1_0,
    },
    VersionTables {
        version: "13.0.0",
        zero_width: zero_width::ZERO_WIDTH_13_0_0,
        wide_eastasian: wide_eastasian::WIDE_EASTASIAN_13_0_0,
    },
    VersionTables {
        version: "14.0.0",
        zero_width: zero_width::ZERO_WIDTH_14_0_0,
        wide_eastasian: wide_eastasian::WIDE_EASTASIAN_14_0_0,
    },
    VersionTables {
        version: "15.0.0",
        zero_width: zero_width::ZERO_WIDTH_15_0_0,
        wide_eastasian: wide_eastasian::WIDE_EASTASIAN_15_0_0,
    },
    VersionTables {
        version: "15.1.0",
        zero_width: zero_width::ZERO_WIDTH_15_1_0,
        wide_eastasian: wide_eastasian::WIDE_EASTASIAN_15_1_0,
    },
    VersionTables {
        version: "16.0.0",
        zero_width: zero_width::ZERO_WIDTH_16_0_0,
        wide_eastasian: wide_eastasian::WIDE_EASTASIAN_16_0_0,
    },
];

/// Supported version strings, ascending by numeric version order.
pub fn supported_versions()
-> impl DoubleEndedIterator<Item = &'static str> + ExactSizeIterator {
    TABLES.iter().map(|t| t.version)
}

/// Oldest bundled generation. `TABLES` is statically non-empty.
pub fn earliest() -> &'static VersionTables {
    &TABLES[0]
}

/// Newest bundled generation.
pub fn latest() -> &'static VersionTables {
    &TABLES[TABLES.len() - 1]
}

/// Look up the table generation for an exactly matching version string.
///
/// Returns `None` only when the caller bypassed version resolution; resolved
/// versions are always present.
pub fn tables_for(version: &str) -> Option<&'static VersionTables> {
    TABLES.iter().find(|t| t.version == version)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numeric(version: &str) -> Vec<u32> {
        version
            .split('.')
            .map(|part| part.parse().expect("bundled version component"))
            .collect()
    }

    fn assert_sorted_disjoint(label: &str, table: &[Interval]) {
        assert!(!table.is_empty(), "{label}: empty table");
        let mut prev_end: Option<u32> = None;
        for &(start, end) in table {
            assert!(start <= end, "{label}: inverted range {start:#X}..{end:#X}");
            if let Some(prev) = prev_end {
                assert!(
                    start > prev,
                    "{label}: overlap or disorder at {start:#X} (prev end {prev:#X})"
                );
            }
            prev_end = Some(end);
        }
    }

    #[test]
    fn generations_sorted_ascending_numerically() {
        assert!(!TABLES.is_empty());
        for pair in TABLES.windows(2) {
            assert!(
                numeric(pair[0].version) < numeric(pair[1].version),
                "{} must precede {}",
                pair[0].version,
                pair[1].version
            );
        }
    }

    #[test]
    fn every_table_sorted_and_disjoint() {
        for tables in TABLES {
            assert_sorted_disjoint(&format!("{} zero_width", tables.version), tables.zero_width);
            assert_sorted_disjoint(
                &format!("{} wide_eastasian", tables.version),
                tables.wide_eastasian,
            );
        }
        assert_sorted_disjoint("vs16", VS16_NARROW_TO_WIDE);
    }

    #[test]
    fn earliest_and_latest_bracket_the_set() {
        assert_eq!(earliest().version, "4.1.0");
        assert_eq!(latest().version, "16.0.0");
        assert_eq!(supported_versions().len(), TABLES.len());
    }

    #[test]
    fn lookup_by_exact_version() {
        let tables = tables_for("9.0.0").expect("9.0.0 bundled");
        assert_eq!(tables.version, "9.0.0");
        assert!(tables_for("9.0").is_none());
        assert!(tables_for("99.0.0").is_none());
    }

    #[test]
    fn cjk_unified_wide_in_every_generation() {
        // U+4E00 has been East Asian Wide since the earliest bundled release.
        for tables in TABLES {
            assert!(
                tables
                    .wide_eastasian
                    .iter()
                    .any(|&(start, end)| (start..=end).contains(&0x4E00)),
                "{} missing CJK unified block",
                tables.version
            );
        }
    }

    #[test]
    fn combining_acute_zero_in_every_generation() {
        for tables in TABLES {
            assert!(
                tables
                    .zero_width
                    .iter()
                    .any(|&(start, end)| (start..=end).contains(&0x0301)),
                "{} missing combining diacriticals block",
                tables.version
            );
        }
    }
}
