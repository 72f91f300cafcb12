use std::{sync::Arc, time::Duration};

use beacon::{FileIdentityProvider, StaticIdentityProvider};
use camino::Utf8PathBuf;
use clap::{Parser, Subcommand, ValueEnum};
use lumberjack::Level;
use redirect_client::{IdentityProvider, Notifier, RedirectClient};
use redirect_http::{HttpService, HttpServiceConfig, ReqwestService};
use url::Url;

use crate::command::{self, RedirectOutput};
use crate::notify::TerminalNotifier;
use crate::utils::env::{RedirectEnv, RedirectEnvKey};
use crate::{Context, Result, PKG_VERSION};

#[derive(Debug, Parser)]
#[command(
    name = "foundry-redirect",
    version,
    about = "
foundry-redirect - reach your foundry from anywhere

Register where this device can be reached:

    $ foundry-redirect register --external-address https://203.0.113.7:30000 --local-address http://192.168.1.20:30000

Then claim a memorable alias for it:

    $ foundry-redirect check my-table
    $ foundry-redirect customize my-table
"
)]
pub struct FoundryRedirect {
    #[command(subcommand)]
    pub command: Command,

    /// Specify foundry-redirect's log level
    #[arg(long = "log", short = 'l', global = true)]
    pub log_level: Option<Level>,

    /// Which deployment of the redirect service to talk to.
    /// Overridden by $FOUNDRY_REDIRECT_URL
    #[arg(long, global = true, value_enum, default_value_t = Environment::Production)]
    pub environment: Environment,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[arg(skip)]
    pub env_store: RedirectEnv,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Environment {
    Production,
    Test,
}

impl Environment {
    pub const fn url(&self) -> &'static str {
        match self {
            Environment::Production => redirect_client::PRODUCTION_URL,
            Environment::Test => redirect_client::TEST_URL,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Report the addresses this device can be reached at
    Register(command::Register),

    /// Fetch the addresses the redirect service has for this device
    Address(command::Address),

    /// Check whether an alias is still available
    Check(command::Check),

    /// Claim an alias for this device
    Customize(command::Customize),

    /// Print the id this device is registered under
    #[command(name = "whoami")]
    WhoAmI(command::WhoAmI),
}

impl FoundryRedirect {
    pub async fn run(&self) -> Result<RedirectOutput> {
        let client = self.get_client()?;
        match &self.command {
            Command::Register(command) => command.run(&client).await,
            Command::Address(command) => command.run(&client).await,
            Command::Check(command) => command.run(&client).await,
            Command::Customize(command) => command.run(&client).await,
            Command::WhoAmI(command) => command.run(&client),
        }
    }

    pub(crate) fn get_base_url(&self) -> Result<Url> {
        let url = self
            .env_store
            .get(RedirectEnvKey::RedirectUrl)?
            .unwrap_or_else(|| self.environment.url().to_string());
        Url::parse(&url).with_context(|| format!("'{}' is not a valid redirect service URL", url))
    }

    pub(crate) fn get_http_service(&self) -> Result<HttpService> {
        let timeout = self
            .env_store
            .get(RedirectEnvKey::RedirectTimeout)?
            .map(|secs| {
                secs.parse::<u64>().map(Duration::from_secs).with_context(|| {
                    format!(
                        "${} must be a whole number of seconds, got '{}'",
                        RedirectEnvKey::RedirectTimeout,
                        secs
                    )
                })
            })
            .transpose()?;
        let config = HttpServiceConfig::builder().and_timeout(timeout).build();
        let service = ReqwestService::builder()
            .config(config)
            .build()
            .context("could not create an HTTP client")?;
        Ok(service.into())
    }

    pub(crate) fn get_config_home(&self) -> Result<Utf8PathBuf> {
        let override_home = self
            .env_store
            .get(RedirectEnvKey::ConfigHome)?
            .map(Utf8PathBuf::from);
        Ok(beacon::home::dir(override_home)?)
    }

    pub(crate) fn get_identity_provider(&self) -> Result<Arc<dyn IdentityProvider>> {
        if let Command::Register(register) = &self.command {
            if let Some(foundry_id) = register.foundry_id() {
                return Ok(Arc::new(StaticIdentityProvider::new(foundry_id)));
            }
        }
        let provider = FileIdentityProvider::from_home(&self.get_config_home()?)?;
        tracing::debug!(path = %provider.path(), "loaded device identity");
        Ok(Arc::new(provider))
    }

    pub(crate) fn get_client(&self) -> Result<RedirectClient> {
        let client = RedirectClient::builder()
            .base_url(self.get_base_url()?)
            .http_service(self.get_http_service()?)
            .identity_provider(self.get_identity_provider()?)
            .notifier(Arc::new(TerminalNotifier) as Arc<dyn Notifier>)
            .client_version(PKG_VERSION.to_string())
            .build()?;
        Ok(client)
    }
}
