use clap::Parser;
use redirect_client::RedirectClient;

use crate::{command::RedirectOutput, Result};

#[derive(Debug, Parser)]
pub struct Address {}

impl Address {
    pub async fn run(&self, client: &RedirectClient) -> Result<RedirectOutput> {
        Ok(RedirectOutput::Addresses(client.get_redirect_address().await))
    }
}
