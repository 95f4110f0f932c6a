pub const APP_NAME: &str = "Star Trade Router";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const GIT_TAG: Option<&str> = option_env!("GIT_TAG");

const PACKAGE_LABEL: &str = concat!("v", env!("CARGO_PKG_VERSION"));

/// Release tag when built from a tagged checkout, otherwise the crate version.
pub fn version_label() -> &'static str {
    GIT_TAG.unwrap_or(PACKAGE_LABEL)
}
