use clap::Parser;
use redirect_client::RedirectClient;

use crate::{command::RedirectOutput, Result};

#[derive(Debug, Parser)]
pub struct Check {
    /// The alias to look up
    #[arg(value_name = "ALIAS")]
    alias: String,
}

impl Check {
    pub async fn run(&self, client: &RedirectClient) -> Result<RedirectOutput> {
        let status = client.check_custom_address(&self.alias).await;
        Ok(RedirectOutput::AddressStatus {
            alias: self.alias.clone(),
            status,
        })
    }
}
