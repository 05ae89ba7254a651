use serde::Serialize;

/// Build metadata printed by `convexkit-cli report`.
#[derive(Debug, Serialize)]
pub struct Report {
    pub tool: &'static str,
    pub tool_version: &'static str,
    pub library_version: &'static str,
    /// `GIT_COMMIT` at build time, `"unknown"` when unset or empty.
    pub code_rev: &'static str,
}

impl Report {
    pub fn collect() -> Self {
        Self {
            tool: env!("CARGO_PKG_NAME"),
            tool_version: env!("CARGO_PKG_VERSION"),
            library_version: convexkit::VERSION,
            code_rev: build_rev(option_env!("GIT_COMMIT")),
        }
    }
}

fn build_rev(from_env: Option<&'static str>) -> &'static str {
    from_env.filter(|rev| !rev.is_empty()).unwrap_or("unknown")
}
