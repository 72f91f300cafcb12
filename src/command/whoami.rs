use clap::Parser;
use redirect_client::RedirectClient;

use crate::{command::RedirectOutput, Result};

#[derive(Debug, Parser)]
pub struct WhoAmI {}

impl WhoAmI {
    pub fn run(&self, client: &RedirectClient) -> Result<RedirectOutput> {
        Ok(RedirectOutput::Identity(client.device_identity()))
    }
}
