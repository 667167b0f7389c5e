use std::fmt;
use tracing::debug;

/// Environment variable consulted by [`base_from_env`] for the deployment base
/// path.
pub const BASE_URL_ENV: &str = "WAYFINDER_BASE_URL";

/// How application paths are projected into hrefs.
///
/// The mode is chosen once when the navigator is created and never changes. All
/// variants share the same matching and stack behavior; they differ only in the
/// href they render for a given application path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryMode {
    /// Clean URLs under a base prefix (`/base/students/42`)
    Web {
        /// Normalized base prefix, `""` for root deployments
        base: String,
    },
    /// Fragment URLs under a base prefix (`/base#/students/42`), for hosts that
    /// cannot rewrite paths
    WebHash {
        /// Normalized base prefix, `""` for root deployments
        base: String,
    },
    /// In-memory only, no href projection; the default for tests and headless
    /// embedding
    Memory,
}

impl HistoryMode {
    /// Web history rooted at the given base path.
    #[must_use]
    pub fn web(base: impl AsRef<str>) -> Self {
        HistoryMode::Web {
            base: normalize_base(base.as_ref()),
        }
    }

    /// Hash-fragment history rooted at the given base path.
    #[must_use]
    pub fn web_hash(base: impl AsRef<str>) -> Self {
        HistoryMode::WebHash {
            base: normalize_base(base.as_ref()),
        }
    }

    /// In-memory history with no base.
    #[must_use]
    pub fn memory() -> Self {
        HistoryMode::Memory
    }

    /// The normalized base prefix, `""` when the mode has none.
    #[must_use]
    pub fn base(&self) -> &str {
        match self {
            HistoryMode::Web { base } | HistoryMode::WebHash { base } => base,
            HistoryMode::Memory => "",
        }
    }

    /// Project an application path into the href this mode would put in the
    /// address bar.
    ///
    /// `path` is expected to be absolute (leading `/`), as produced by the
    /// matcher and reverse router.
    #[must_use]
    pub fn href(&self, path: &str) -> String {
        match self {
            HistoryMode::Web { base } => format!("{base}{path}"),
            HistoryMode::WebHash { base } => format!("{base}#{path}"),
            HistoryMode::Memory => path.to_string(),
        }
    }

    /// Short label for logs.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            HistoryMode::Web { .. } => "web",
            HistoryMode::WebHash { .. } => "web_hash",
            HistoryMode::Memory => "memory",
        }
    }
}

impl fmt::Display for HistoryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryMode::Memory => f.write_str("memory"),
            mode => write!(f, "{}(base='{}')", mode.kind(), mode.base()),
        }
    }
}

/// Normalize a deployment base path.
///
/// Guarantees a leading `/` and no trailing `/`, and collapses a bare root
/// (`""`, `"/"`) to the empty string so `href` concatenation never doubles
/// slashes.
#[must_use]
pub fn normalize_base(base: &str) -> String {
    let trimmed = base.trim();
    if trimmed.is_empty() || trimmed == "/" {
        return String::new();
    }
    let mut out = String::with_capacity(trimmed.len() + 1);
    if !trimmed.starts_with('/') {
        out.push('/');
    }
    out.push_str(trimmed.trim_end_matches('/'));
    out
}

/// Read the deployment base path from the environment.
///
/// Returns the normalized value of `WAYFINDER_BASE_URL`, or `""` when the
/// variable is unset. This is the usual argument to [`HistoryMode::web`], so a
/// deployment can move the whole application under a subpath without code
/// changes.
#[must_use]
pub fn base_from_env() -> String {
    let base = std::env::var(BASE_URL_ENV)
        .map(|raw| normalize_base(&raw))
        .unwrap_or_default();
    if !base.is_empty() {
        debug!(%base, "History base resolved from environment");
    }
    base
}
