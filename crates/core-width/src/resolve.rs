//! Version token resolution against the bundled table generations.
//!
//! Resolution is a pure function of the token and the (injected) override
//! source; it has no side effect besides an advisory `tracing` warning when a
//! requested version is substituted. It never fails for a numerically
//! parseable token: unknown versions degrade to the nearest lower bundled
//! generation, and versions predating everything bundled degrade to the
//! earliest one. Only a malformed explicit token is a hard error.

use crate::version::{UnicodeVersion, VersionError};
use core_tables::VersionTables;
use tracing::warn;

/// Sentinel token: consult the override source, then fall back to latest.
pub const AUTO: &str = "auto";

/// Sentinel token: the newest bundled generation.
pub const LATEST: &str = "latest";

/// Environment key consulted by [`EnvOverride`].
pub const UNICODE_VERSION_ENV: &str = "UNICODE_VERSION";

/// Where `"auto"` resolution looks for a process-wide requested version.
///
/// Injected rather than read ambiently so resolution stays deterministic and
/// testable; the source is consulted once per `"auto"` call, never cached.
pub trait OverrideSource {
    fn requested_version(&self) -> Option<String>;
}

/// Reads the `UNICODE_VERSION` environment variable. Absence (or an empty
/// value) is the normal state and means no override.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvOverride;

impl OverrideSource for EnvOverride {
    fn requested_version(&self) -> Option<String> {
        std::env::var(UNICODE_VERSION_ENV)
            .ok()
            .filter(|value| !value.is_empty())
    }
}

/// A pinned override value, for embedders and tests.
#[derive(Debug, Clone, Default)]
pub struct FixedOverride(pub Option<String>);

impl FixedOverride {
    pub fn pinned(version: impl Into<String>) -> Self {
        Self(Some(version.into()))
    }

    pub fn absent() -> Self {
        Self(None)
    }
}

impl OverrideSource for FixedOverride {
    fn requested_version(&self) -> Option<String> {
        self.0.clone()
    }
}

/// Maps version tokens to bundled table generations.
#[derive(Debug, Clone, Copy, Default)]
pub struct Resolver<S = EnvOverride> {
    source: S,
}

impl<S: OverrideSource> Resolver<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Resolve a token to a supported version string.
    ///
    /// The returned string is always a key of the bundled table set, so a
    /// second resolution of it is the identity.
    pub fn resolve(&self, token: &str) -> Result<&'static str, VersionError> {
        Ok(self.resolve_tables(token)?.version)
    }

    /// Resolve a token straight to its table generation. Classification goes
    /// through this so a string-width pass resolves once, not per character.
    pub(crate) fn resolve_tables(
        &self,
        token: &str,
    ) -> Result<&'static VersionTables, VersionError> {
        if token == AUTO {
            return Ok(self.resolve_auto());
        }
        self.resolve_explicit(token)
    }

    /// `"auto"`: honor the override source when present and usable.
    ///
    /// An override that fails to parse is ambient state, not a caller token,
    /// so it degrades to latest with an advisory warning instead of failing
    /// the call.
    pub(crate) fn resolve_auto(&self) -> &'static VersionTables {
        let Some(requested) = self.source.requested_version() else {
            return core_tables::latest();
        };
        if requested == LATEST {
            return core_tables::latest();
        }
        match self.resolve_explicit(&requested) {
            Ok(tables) => tables,
            Err(_) => {
                warn!(
                    target: "width.version",
                    requested = requested.as_str(),
                    substituted = core_tables::latest().version,
                    "unparseable version override ignored"
                );
                core_tables::latest()
            }
        }
    }

    fn resolve_explicit(&self, token: &str) -> Result<&'static VersionTables, VersionError> {
        if token == LATEST {
            return Ok(core_tables::latest());
        }
        let requested = UnicodeVersion::parse(token)?;
        for tables in core_tables::TABLES.iter().rev() {
            let candidate = UnicodeVersion::parse(tables.version)?;
            if candidate.satisfies(&requested) {
                if tables.version != token {
                    warn!(
                        target: "width.version",
                        requested = token,
                        substituted = tables.version,
                        "unicode version substituted"
                    );
                }
                return Ok(tables);
            }
        }
        // Requested version predates every bundled generation.
        let earliest = core_tables::earliest();
        warn!(
            target: "width.version",
            requested = token,
            substituted = earliest.version,
            "requested version predates bundled tables"
        );
        Ok(earliest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use std::sync::{Arc, Mutex, MutexGuard};
    use tracing::Level;
    use tracing::subscriber::with_default;
    use tracing_subscriber::fmt::MakeWriter;

    fn resolver() -> Resolver<FixedOverride> {
        Resolver::new(FixedOverride::absent())
    }

    // Shared in-memory writer so tests can assert on emitted advisories.
    #[derive(Clone)]
    struct BufferWriter {
        inner: Arc<Mutex<Vec<u8>>>,
    }

    impl BufferWriter {
        fn new() -> (Self, Arc<Mutex<Vec<u8>>>) {
            let buf = Arc::new(Mutex::new(Vec::new()));
            (Self { inner: buf.clone() }, buf)
        }
    }

    struct LockedWriter<'a> {
        guard: MutexGuard<'a, Vec<u8>>,
    }

    impl<'a> Write for LockedWriter<'a> {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.guard.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for BufferWriter {
        type Writer = LockedWriter<'a>;

        fn make_writer(&'a self) -> Self::Writer {
            LockedWriter {
                guard: self.inner.lock().expect("log buffer poisoned"),
            }
        }
    }

    fn capture_warnings(run: impl FnOnce()) -> String {
        let (writer, buffer) = BufferWriter::new();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(Level::WARN)
            .with_target(true)
            .with_ansi(false)
            .without_time()
            .with_writer(writer)
            .finish();
        with_default(subscriber, run);
        String::from_utf8(buffer.lock().unwrap().clone()).unwrap()
    }

    #[test]
    fn latest_is_the_maximal_supported_version() {
        let last = core_tables::supported_versions().next_back().unwrap();
        assert_eq!(resolver().resolve("latest").unwrap(), last);
    }

    #[test]
    fn exact_version_resolves_to_itself_silently() {
        let output = capture_warnings(|| {
            assert_eq!(resolver().resolve("9.0.0").unwrap(), "9.0.0");
        });
        assert!(output.is_empty(), "no advisory expected: {output}");
    }

    #[test]
    fn unknown_version_resolves_to_nearest_lower() {
        assert_eq!(resolver().resolve("4.9.9").unwrap(), "4.1.0");
        assert_eq!(resolver().resolve("6.5.0").unwrap(), "6.1.0");
    }

    #[test]
    fn partial_token_matches_numerically() {
        assert_eq!(resolver().resolve("8.0").unwrap(), "8.0.0");
        assert_eq!(resolver().resolve("8").unwrap(), "8.0.0");
    }

    #[test]
    fn below_range_falls_back_to_earliest() {
        assert_eq!(resolver().resolve("1").unwrap(), "4.1.0");
        assert_eq!(resolver().resolve("0.0.1").unwrap(), "4.1.0");
    }

    #[test]
    fn resolution_is_idempotent() {
        for token in ["latest", "4.9.9", "8.0", "1", "9.0.0"] {
            let once = resolver().resolve(token).unwrap();
            assert_eq!(resolver().resolve(once).unwrap(), once);
        }
    }

    #[test]
    fn malformed_token_is_a_hard_error() {
        assert!(resolver().resolve("9.x").is_err());
        assert!(resolver().resolve("").is_err());
    }

    #[test]
    fn auto_without_override_behaves_as_latest() {
        let last = core_tables::supported_versions().next_back().unwrap();
        assert_eq!(resolver().resolve("auto").unwrap(), last);
    }

    #[test]
    fn auto_honors_pinned_override() {
        let pinned = Resolver::new(FixedOverride::pinned("9.0.0"));
        assert_eq!(pinned.resolve("auto").unwrap(), "9.0.0");
    }

    #[test]
    fn auto_with_unparseable_override_degrades_to_latest() {
        let broken = Resolver::new(FixedOverride::pinned("not-a-version"));
        let last = core_tables::supported_versions().next_back().unwrap();
        let output = capture_warnings(|| {
            assert_eq!(broken.resolve("auto").unwrap(), last);
        });
        assert!(output.contains("width.version"));
        assert!(output.contains("unparseable version override ignored"));
    }

    #[test]
    fn substitution_emits_advisory_warning() {
        let output = capture_warnings(|| {
            resolver().resolve("4.9.9").unwrap();
        });
        assert!(output.contains("WARN"), "missing level: {output}");
        assert!(output.contains("width.version"), "missing target: {output}");
        assert!(output.contains("4.1.0"), "missing substitution: {output}");
    }

    #[test]
    fn below_range_emits_advisory_warning() {
        let output = capture_warnings(|| {
            resolver().resolve("1").unwrap();
        });
        assert!(output.contains("predates bundled tables"), "{output}");
    }
}
