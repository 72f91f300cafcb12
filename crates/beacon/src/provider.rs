use std::{fs, io};

use camino::{Utf8Path, Utf8PathBuf};
use redirect_client::{DeviceIdentity, IdentityProvider};
use uuid::Uuid;

use crate::BeaconError;

/// Name of the file, inside the configuration home, holding the device id
pub const IDENTITY_FILE_NAME: &str = "foundry_id";

/// Identity provider backed by a file holding a UUID.
///
/// The identifier is read, or created and written, once in [`FileIdentityProvider::load`].
/// After that every lookup returns the same value.
#[derive(Debug, Clone)]
pub struct FileIdentityProvider {
    path: Utf8PathBuf,
    identity: DeviceIdentity,
}

impl FileIdentityProvider {
    /// Loads the identity stored at `path`, writing a fresh one if there is none
    pub fn load(path: impl Into<Utf8PathBuf>) -> Result<FileIdentityProvider, BeaconError> {
        let path = path.into();
        let identity = DeviceIdentity::new(get_or_write_device_id(&path)?.to_string());
        Ok(FileIdentityProvider { path, identity })
    }

    /// Loads the identity stored in the configuration home
    pub fn from_home(home: &Utf8Path) -> Result<FileIdentityProvider, BeaconError> {
        FileIdentityProvider::load(home.join(IDENTITY_FILE_NAME))
    }

    /// Where the identity is stored
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }
}

impl IdentityProvider for FileIdentityProvider {
    fn get_or_create_device_identity(&self) -> DeviceIdentity {
        self.identity.clone()
    }
}

/// Identity provider that always returns the same, caller supplied, identity
#[derive(Debug, Clone)]
pub struct StaticIdentityProvider(DeviceIdentity);

impl StaticIdentityProvider {
    /// Creates a provider for `identity`
    pub fn new(identity: impl Into<DeviceIdentity>) -> StaticIdentityProvider {
        StaticIdentityProvider(identity.into())
    }
}

impl IdentityProvider for StaticIdentityProvider {
    fn get_or_create_device_identity(&self) -> DeviceIdentity {
        self.0.clone()
    }
}

fn get_or_write_device_id(path: &Utf8Path) -> Result<Uuid, BeaconError> {
    match fs::read_to_string(path) {
        Ok(contents) => {
            if let Ok(device_id) = Uuid::parse_str(contents.trim()) {
                tracing::trace!(%path, "read device id");
                return Ok(device_id);
            }
            tracing::warn!(%path, "stored device id is not a UUID, replacing it");
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => return Err(err.into()),
    }
    write_device_id(path)
}

fn write_device_id(path: &Utf8Path) -> Result<Uuid, BeaconError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let device_id = Uuid::new_v4();
    fs::write(path, device_id.to_string())?;
    tracing::debug!(%path, "wrote new device id");
    Ok(device_id)
}
