use redirect_client::{
    CustomAddressStatus, CustomizeAddressResponse, DeviceIdentity, RedirectAddresses,
};
use serde_json::{json, Value};

use crate::style::Style;

/// RedirectOutput defines all of the different types of data that are printed
/// to `stdout`. Every command returns one, and its print logic lives in
/// `RedirectOutput::print` so that `--json` gets the same data.
///
/// Operations that produced no answer have already reported why on stderr,
/// so their output prints nothing.
#[derive(Clone, PartialEq, Debug)]
pub enum RedirectOutput {
    Addresses(Option<RedirectAddresses>),
    AddressStatus {
        alias: String,
        status: CustomAddressStatus,
    },
    Customized {
        alias: String,
        response: CustomizeAddressResponse,
    },
    Identity(DeviceIdentity),
    EmptySuccess,
}

impl RedirectOutput {
    pub fn print(&self, json: bool) {
        if json {
            println!("{}", self.get_json());
            return;
        }
        match self {
            RedirectOutput::Addresses(Some(addresses)) => {
                eprint!("External address: ");
                println!("{}", Style::Link.paint(&addresses.external_address));
                eprint!("Local address: ");
                println!("{}", Style::Link.paint(&addresses.local_address));
            }
            RedirectOutput::AddressStatus { alias, status } => {
                if status.is_available {
                    eprintln!("'{}' is {}", alias, Style::Success.paint("available"));
                } else {
                    eprintln!("'{}' is {}", alias, Style::Failure.paint("not available"));
                }
                println!("{}", status.message);
            }
            RedirectOutput::Customized { alias, response } => {
                if response.success {
                    eprintln!("This device is now reachable as '{}'", alias);
                } else {
                    eprintln!("{}", Style::Failure.paint(format!("Could not claim '{}'", alias)));
                }
                println!("{}", response.message);
            }
            RedirectOutput::Identity(identity) => {
                eprint!("Foundry ID: ");
                println!("{}", identity);
            }
            RedirectOutput::Addresses(None) | RedirectOutput::EmptySuccess => {}
        }
    }

    pub fn get_json(&self) -> Value {
        match self {
            RedirectOutput::Addresses(addresses) => json!({ "addresses": addresses }),
            RedirectOutput::AddressStatus { alias, status } => {
                json!({ "alias": alias, "status": status })
            }
            RedirectOutput::Customized { alias, response } => {
                json!({ "alias": alias, "response": response })
            }
            RedirectOutput::Identity(identity) => json!({ "foundryId": identity }),
            RedirectOutput::EmptySuccess => json!({}),
        }
    }
}
