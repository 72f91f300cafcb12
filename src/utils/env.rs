use std::collections::HashMap;
use std::{env, fmt, io};

use heck::ToShoutySnakeCase;

/// RedirectEnv allows us to mock environment variables while
/// running tests. That way we can run our tests in parallel,
/// and our local development environment will not have unintended
/// side effects on our tests.
#[derive(Debug, Clone)]
pub struct RedirectEnv {
    mock_store: Option<HashMap<String, String>>,
}

impl Default for RedirectEnv {
    fn default() -> RedirectEnv {
        RedirectEnv::new()
    }
}

impl RedirectEnv {
    /// creates a new environment variable store
    pub fn new() -> RedirectEnv {
        let mock_store = if cfg!(test) {
            Some(HashMap::new())
        } else {
            None
        };

        RedirectEnv { mock_store }
    }

    /// returns the value of the environment variable if it exists
    pub fn get(&self, key: RedirectEnvKey) -> io::Result<Option<String>> {
        let key_str = key.to_string();
        tracing::trace!("Checking for ${}", &key_str);
        let result = match &self.mock_store {
            Some(mock_store) => Ok(mock_store.get(&key_str).map(|v| v.to_owned())),
            None => match env::var(&key_str) {
                Ok(data) => Ok(Some(data)),
                Err(env::VarError::NotPresent) => Ok(None),
                Err(env::VarError::NotUnicode(_)) => Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!(
                        "The value of the environment variable \"{}\" is not valid Unicode.",
                        &key_str
                    ),
                )),
            },
        }?;

        if let Some(result) = &result {
            tracing::debug!("read environment variable ${} = {}", &key_str, result);
        } else {
            tracing::trace!("could not find ${}", &key_str);
        }

        Ok(result)
    }

    /// sets an environment variable in the mock store; real environments are left alone
    pub fn insert(&mut self, key: RedirectEnvKey, value: &str) {
        match &mut self.mock_store {
            Some(mock_store) => {
                tracing::debug!("writing ${} = {}", key, value);
                mock_store.insert(key.to_string(), value.into());
            }
            None => tracing::warn!("refusing to overwrite ${} outside of tests", key),
        }
    }
}

/// RedirectEnvKey defines all of the environment variables
/// that are respected by foundry-redirect. Each environment variable is
/// prefixed with `FOUNDRY_` and the suffix is the name of the key defined
/// here, converted from CamelCase to SHOUTY_SNAKE_CASE.
/// For example, `RedirectEnvKey::ConfigHome.to_string()` becomes `FOUNDRY_CONFIG_HOME`
#[derive(Debug, Copy, Clone)]
pub enum RedirectEnvKey {
    ConfigHome,
    RedirectUrl,
    /// request timeout in whole seconds
    RedirectTimeout,
}

impl fmt::Display for RedirectEnvKey {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        let dbg = format!("{:?}", self).to_shouty_snake_case();
        fmt.write_str(&format!("FOUNDRY_{}", &dbg))
    }
}
