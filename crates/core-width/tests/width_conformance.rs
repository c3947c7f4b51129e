//! End-to-end conformance for version resolution and width classification.

use core_width::{FixedOverride, WidthEngine, supported_versions};
use pretty_assertions::assert_eq;

fn engine() -> WidthEngine<FixedOverride> {
    WidthEngine::with_source(FixedOverride::absent())
}

#[test]
fn control_range_unprintable_in_every_generation() {
    let eng = engine();
    for version in supported_versions() {
        for cp in (0u32..32).chain(0x7F..0xA0) {
            assert_eq!(
                eng.width_of(cp, version).unwrap(),
                -1,
                "cp {cp:#X} under {version}"
            );
        }
    }
}

#[test]
fn resolve_latest_is_maximal() {
    let last = supported_versions().next_back().unwrap();
    assert_eq!(engine().resolve("latest").unwrap(), last);
}

#[test]
fn resolve_nearest_lower_and_fallbacks() {
    let eng = engine();
    assert_eq!(eng.resolve("4.9.9").unwrap(), "4.1.0");
    assert_eq!(eng.resolve("8.0").unwrap(), "8.0.0");
    assert_eq!(eng.resolve("1").unwrap(), "4.1.0");
}

#[test]
fn resolve_round_trip_preserves_classification() {
    let eng = engine();
    let samples = [0x41u32, 0x301, 0x4E00, 0x1F300, 0xFE0F, 0x07];
    for token in ["latest", "auto", "4.9.9", "8.0", "9.0.0", "1"] {
        let resolved = eng.resolve(token).unwrap();
        for &cp in &samples {
            assert_eq!(
                eng.width_of(cp, resolved).unwrap(),
                eng.width_of(cp, token).unwrap(),
                "cp {cp:#X}, token {token}"
            );
        }
    }
}

#[test]
fn generations_are_independent_per_version() {
    let eng = engine();
    // The 9.0.0 emoji reclassification must not leak backwards.
    assert_eq!(eng.width_of(0x1F9C0, "8.0.0").unwrap(), 1);
    assert_eq!(eng.width_of(0x1F9C0, "9.0.0").unwrap(), 2);
    // CJK Extension C arrived with 5.2.0 tables.
    assert_eq!(eng.width_of(0x2A700, "5.1.0").unwrap(), 1);
    assert_eq!(eng.width_of(0x2A700, "5.2.0").unwrap(), 2);
}

#[test]
fn string_width_edge_cases() {
    let eng = engine();
    assert_eq!(eng.string_width("", None, "latest").unwrap(), 0);
    assert_eq!(eng.string_width("anything", Some(0), "latest").unwrap(), 0);
    // A control anywhere poisons the whole measurement.
    assert_eq!(
        eng.string_width("漢字\u{0}漢字", None, "latest").unwrap(),
        -1
    );
    assert_eq!(eng.string_width("ok\r\n", None, "latest").unwrap(), -1);
}

#[test]
fn auto_override_pins_generation() {
    let pinned = WidthEngine::with_source(FixedOverride::pinned("8.0.0"));
    assert_eq!(pinned.resolve("auto").unwrap(), "8.0.0");
    // Under the pinned generation this emoji is still narrow.
    assert_eq!(pinned.width_of_auto(0x1F300), 1);
    // Explicit tokens ignore the override entirely.
    assert_eq!(pinned.width_of(0x1F300, "9.0.0").unwrap(), 2);
}

#[test]
fn mixed_script_line_measures_like_a_terminal() {
    let eng = engine();
    // 5 narrow + 2 wide CJK + 1 narrow + combining mark.
    let line = "hello界x\u{0301}";
    assert_eq!(eng.string_width(line, None, "latest").unwrap(), 8);
}
