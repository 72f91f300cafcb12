use clap::Parser;
use redirect_client::RedirectClient;

use crate::{command::RedirectOutput, Result};

#[derive(Debug, Parser)]
pub struct Customize {
    /// The alias to claim for this device
    #[arg(value_name = "ALIAS")]
    alias: String,
}

impl Customize {
    pub async fn run(&self, client: &RedirectClient) -> Result<RedirectOutput> {
        let response = client.customize_redirect_address(&self.alias).await;
        Ok(RedirectOutput::Customized {
            alias: self.alias.clone(),
            response,
        })
    }
}
