//! Application-level configuration constants and startup options.

use std::path::PathBuf;

// Window
pub const WINDOW_SIZE: [f32; 2] = [1280.0, 860.0];
pub const MIN_WINDOW_SIZE: [f32; 2] = [720.0, 480.0];

// Environment variable naming a catalog file to load at startup.
pub const CATALOG_ENV: &str = "RECIPE_DASH_CATALOG";

/// Cuisines always offered in the filter, merged with those found in the
/// loaded catalog.
pub const CUISINE_OPTIONS: [&str; 10] = [
    "Italian",
    "Mexican",
    "Asian",
    "American",
    "Mediterranean",
    "Indian",
    "French",
    "Thai",
    "Japanese",
    "Chinese",
];

// Layout
pub const CHART_HEIGHT: f32 = 220.0;
pub const TABLE_HEADER_HEIGHT: f32 = 22.0;
pub const TABLE_ROW_HEIGHT: f32 = 44.0;
pub const THUMBNAIL_WIDTH: f32 = 64.0;
pub const DETAIL_IMAGE_HEIGHT: f32 = 240.0;

/// Catalog to load at startup: first CLI argument, else `RECIPE_DASH_CATALOG`.
pub fn startup_catalog() -> Option<PathBuf> {
    resolve_startup_catalog(
        std::env::args_os().nth(1).map(PathBuf::from),
        std::env::var_os(CATALOG_ENV).map(PathBuf::from),
    )
}

fn resolve_startup_catalog(arg: Option<PathBuf>, env: Option<PathBuf>) -> Option<PathBuf> {
    arg.or(env).filter(|p| !p.as_os_str().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_argument_wins_over_environment() {
        let arg = Some(PathBuf::from("a.json"));
        let env = Some(PathBuf::from("b.json"));
        assert_eq!(resolve_startup_catalog(arg, env.clone()), Some(PathBuf::from("a.json")));
        assert_eq!(resolve_startup_catalog(None, env), Some(PathBuf::from("b.json")));
        assert_eq!(resolve_startup_catalog(None, Some(PathBuf::new())), None);
        assert_eq!(resolve_startup_catalog(None, None), None);
    }
}
