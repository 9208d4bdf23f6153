use std::path::PathBuf;

use directories::ProjectDirs;

/// Directory holding the SQLite database and other runtime assets.
///
/// `MERIDIAN_ASSET_DIR` overrides the platform default, which is handy for
/// containers and tests.
pub fn asset_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("MERIDIAN_ASSET_DIR") {
        return PathBuf::from(dir);
    }
    ProjectDirs::from("com", "meridianlabs", "meridian-site")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".meridian-site"))
}
