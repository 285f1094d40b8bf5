//! Knobs shared by every resolution operation.

/// Controls how leniently specs are resolved.
///
/// The defaults are what interactive callers want: implicit aliases on, the
/// `sg_` auto-prefix on, and unresolved names passed through untouched so a
/// downstream consumer can reject them with a precise message. Pipelines
/// that need hard guarantees opt into [`ResolveOptions::strict`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolveOptions {
    /// Let a bare name fall back to the alias tables when it is not an
    /// exact entity or field name.
    pub implicit_aliases: bool,
    /// Retry a missed bare field name with the `sg_` convention prefix.
    pub auto_prefix: bool,
    /// Fail with an unknown-name error instead of passing unresolved bare
    /// names through.
    pub strict: bool,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            implicit_aliases: true,
            auto_prefix: true,
            strict: false,
        }
    }
}

impl ResolveOptions {
    /// Default options with `strict` enabled.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            strict: true,
            ..Self::default()
        }
    }
}
