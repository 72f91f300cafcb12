use clap::Parser;
use redirect_client::RedirectClient;

use crate::{command::RedirectOutput, Result};

#[derive(Debug, Parser)]
pub struct Register {
    /// The address this device can be reached at from outside its network
    #[arg(long)]
    external_address: String,

    /// The address this device can be reached at from inside its network
    #[arg(long)]
    local_address: String,

    /// Register under this id instead of the one stored in the config home
    #[arg(long)]
    foundry_id: Option<String>,
}

impl Register {
    pub(crate) fn foundry_id(&self) -> Option<&str> {
        self.foundry_id.as_deref()
    }

    pub async fn run(&self, client: &RedirectClient) -> Result<RedirectOutput> {
        let device_id = client.device_identity();
        client
            .post_foundry_info(
                device_id.as_ref(),
                &self.external_address,
                &self.local_address,
            )
            .await;
        Ok(RedirectOutput::EmptySuccess)
    }
}
