//! Property-based tests for resolution totality and classification range.

use core_width::{FixedOverride, ResolveCache, Resolver, WidthEngine, supported_versions};
use proptest::prelude::*;

fn engine() -> WidthEngine<FixedOverride> {
    WidthEngine::with_source(FixedOverride::absent())
}

proptest! {
    // Any numerically parseable token resolves to a member of the supported set.
    #[test]
    fn resolution_is_total_over_numeric_tokens(major in 0u32..30, minor in 0u32..30, patch in 0u32..30) {
        let token = format!("{major}.{minor}.{patch}");
        let resolved = engine().resolve(&token).unwrap();
        prop_assert!(supported_versions().any(|v| v == resolved), "{token} -> {resolved}");
    }

    // Resolving a resolved version is the identity.
    #[test]
    fn resolution_is_idempotent(major in 0u32..30, minor in 0u32..30) {
        let token = format!("{major}.{minor}");
        let once = engine().resolve(&token).unwrap();
        prop_assert_eq!(engine().resolve(once).unwrap(), once);
    }

    // Classification never leaves the {-1, 0, 1, 2} range, including beyond
    // the scalar ceiling.
    #[test]
    fn width_stays_in_range(cp in 0u32..0x0011_0100) {
        let width = engine().width_of(cp, "latest").unwrap();
        prop_assert!((-1..=2).contains(&width), "cp {cp:#X} -> {width}");
    }

    // Printable ASCII is always one cell per char, any generation.
    #[test]
    fn printable_ascii_sums_to_char_count(s in "[ -~]{0,64}") {
        for version in ["4.1.0", "9.0.0", "latest"] {
            let width = engine().string_width(&s, None, version).unwrap();
            prop_assert_eq!(width, s.chars().count() as isize);
        }
    }

    // The limit argument only ever shrinks the measured prefix.
    #[test]
    fn limit_is_monotone(s in "\\PC{0,32}", limit in 0usize..40) {
        let eng = engine();
        let full = eng.string_width(&s, None, "latest").unwrap();
        let clipped = eng.string_width(&s, Some(limit), "latest").unwrap();
        if full >= 0 && clipped >= 0 {
            prop_assert!(clipped <= full);
        }
    }

    // A cached resolution always agrees with a fresh one.
    #[test]
    fn cache_is_transparent(major in 0u32..30, minor in 0u32..30) {
        let token = format!("{major}.{minor}");
        let resolver = Resolver::new(FixedOverride::absent());
        let mut cache = ResolveCache::new(4);
        let cached = cache.resolve_with(&resolver, &token).unwrap();
        let cached_again = cache.resolve_with(&resolver, &token).unwrap();
        let fresh = resolver.resolve(&token).unwrap();
        prop_assert_eq!(cached, fresh);
        prop_assert_eq!(cached_again, fresh);
    }

    // Tokens with a non-numeric component never resolve.
    #[test]
    fn malformed_tokens_error(junk in "[a-z]{1,8}") {
        let token = format!("9.{junk}.0");
        prop_assert!(engine().resolve(&token).is_err());
    }
}
