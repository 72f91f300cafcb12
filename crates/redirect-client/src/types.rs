use std::fmt;

use serde::Serialize;

/// Opaque token identifying this device to the redirect service
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct DeviceIdentity(String);

impl DeviceIdentity {
    /// wraps an identity string
    pub fn new(identity: impl Into<String>) -> DeviceIdentity {
        DeviceIdentity(identity.into())
    }
}

impl fmt::Display for DeviceIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DeviceIdentity {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for DeviceIdentity {
    fn from(value: String) -> Self {
        DeviceIdentity(value)
    }
}

impl From<&str> for DeviceIdentity {
    fn from(value: &str) -> Self {
        DeviceIdentity(value.to_string())
    }
}

/// Where a device can be reached
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RedirectAddresses {
    /// the address reachable from outside the device's network
    pub external_address: String,
    /// the address to use from inside the device's network
    pub local_address: String,
}

impl RedirectAddresses {
    pub(crate) fn from_external(external_address: String) -> RedirectAddresses {
        let local_address = format!("{}/local", external_address);
        RedirectAddresses {
            external_address,
            local_address,
        }
    }
}

/// Whether an alias can still be claimed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomAddressStatus {
    /// true when the service answered 200
    pub is_available: bool,
    /// explanation from the service, or from the client when it never got an answer
    pub message: String,
}

/// Outcome of claiming an alias
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomizeAddressResponse {
    /// true when the service answered 200
    pub success: bool,
    /// explanation from the service, or from the client when it never got an answer
    pub message: String,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn local_address_is_derived_from_the_external_one() {
        let addresses = RedirectAddresses::from_external("1.2.3.4".to_string());
        assert_eq!(addresses.external_address, "1.2.3.4");
        assert_eq!(addresses.local_address, "1.2.3.4/local");
    }

    #[test]
    fn records_serialize_in_camel_case() {
        let status = CustomAddressStatus {
            is_available: true,
            message: "ok".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&status).unwrap(),
            json!({ "isAvailable": true, "message": "ok" })
        );

        let addresses = RedirectAddresses::from_external("host".to_string());
        assert_eq!(
            serde_json::to_value(&addresses).unwrap(),
            json!({ "externalAddress": "host", "localAddress": "host/local" })
        );
    }
}
