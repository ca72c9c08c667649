// SPDX-License-Identifier: MPL-2.0
//! Where `settings.toml` lives.
//!
//! The first non-empty candidate wins:
//!
//! 1. a directory passed by the caller (tests)
//! 2. `--config-dir` on the command line
//! 3. `$GALLERY_ADMIN_CONFIG_DIR`
//! 4. the platform config directory plus `GalleryAdmin`

use std::path::PathBuf;
use std::sync::OnceLock;

const APP_DIR_NAME: &str = "GalleryAdmin";

pub const ENV_CONFIG_DIR: &str = "GALLERY_ADMIN_CONFIG_DIR";

static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records `--config-dir`. Only the first call counts.
pub fn init_cli_overrides(config_dir: Option<String>) {
    if CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err() {
        tracing::warn!("--config-dir override already recorded, ignoring");
    }
}

/// Resolves the configuration directory, or `None` when the platform has
/// no notion of one and nothing overrides it.
pub fn config_dir(explicit: Option<PathBuf>) -> Option<PathBuf> {
    let cli = CLI_CONFIG_DIR.get().cloned().flatten();
    let env = std::env::var_os(ENV_CONFIG_DIR).map(PathBuf::from);
    let platform = dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME));
    first_usable([explicit, cli, env, platform])
}

fn first_usable<const N: usize>(candidates: [Option<PathBuf>; N]) -> Option<PathBuf> {
    candidates
        .into_iter()
        .flatten()
        .find(|path| !path.as_os_str().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn some(path: &str) -> Option<PathBuf> {
        Some(PathBuf::from(path))
    }

    #[test]
    fn earlier_candidates_win() {
        let picked = first_usable([some("/explicit"), some("/cli"), some("/env"), some("/platform")]);
        assert_eq!(picked, some("/explicit"));

        let picked = first_usable([None, None, some("/env"), some("/platform")]);
        assert_eq!(picked, some("/env"));
    }

    #[test]
    fn empty_values_are_skipped() {
        let picked = first_usable([None, some(""), some(""), some("/platform")]);
        assert_eq!(picked, some("/platform"));
    }

    #[test]
    fn nothing_usable_is_none() {
        assert_eq!(first_usable::<2>([None, some("")]), None);
    }

    #[test]
    fn explicit_directory_is_returned_as_is() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert_eq!(config_dir(Some(dir.path().to_path_buf())), Some(dir.path().to_path_buf()));
    }
}
