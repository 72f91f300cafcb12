//! Locates the directory device configuration is stored in.

use camino::Utf8PathBuf;
use directories_next::ProjectDirs;

use crate::BeaconError;

/// Returns `override_home` if given, otherwise the default OS configuration
/// directory. Returns an error if it cannot determine the default OS
/// configuration directory.
pub fn dir(override_home: Option<Utf8PathBuf>) -> Result<Utf8PathBuf, BeaconError> {
    let dir = match override_home {
        Some(home) => home,
        None => {
            // Lin: /home/alice/.config/redirect
            // Win: C:\Users\Alice\AppData\Roaming\Foundry\Redirect\config
            // Mac: /Users/Alice/Library/Application Support/com.Foundry.Redirect
            let dirs = ProjectDirs::from("com", "Foundry", "Redirect")
                .ok_or(BeaconError::DefaultConfigDirNotFound)?;
            Utf8PathBuf::try_from(dirs.config_dir().to_path_buf())?
        }
    };
    if dir.exists() && !dir.is_dir() {
        return Err(BeaconError::InvalidConfigHome(dir.to_string()));
    }
    Ok(dir)
}
