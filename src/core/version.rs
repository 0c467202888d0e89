//! Build metadata and bridge API version accessors.
//! The generated version.rs from the build script is included here so there is
//! a single source of truth for the binary and the library.

include!(concat!(env!("OUT_DIR"), "/version.rs"));

/// Parse the bridge API version string from the build script into u32.
/// Falls back to a stable default if parsing fails.
pub fn get_api_version() -> u32 {
    BRIDGE_API_VERSION.parse().unwrap_or(20250727)
}

/// Build time string from the build script (UTC)
pub fn build_time() -> &'static str {
    BUILD_TIME
}

/// Short git hash captured by the build script
pub fn git_hash() -> &'static str {
    GIT_HASH
}

/// One-line version banner used by `--version` and the startup log
pub fn version_banner() -> String {
    format!(
        "{} {} (bridge api {}, {}, built {})",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        get_api_version(),
        git_hash(),
        build_time()
    )
}
