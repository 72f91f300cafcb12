use crate::DeviceIdentity;

/// Supplies the identity this device is known by.
///
/// Implementations create the identity on first use and return the same value afterwards.
pub trait IdentityProvider: Send + Sync {
    /// returns the device identity, creating it if needed
    fn get_or_create_device_identity(&self) -> DeviceIdentity;
}
