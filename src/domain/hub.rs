//! JupyterHub address supplied on the command line.

use std::fmt;

use url::Url;

use super::AppError;

const HUB_SCHEME: &str = "http://";

/// Network address of the JupyterHub, without a scheme (`host[:port][/path]`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HubAddress(String);

impl HubAddress {
    /// Validate an address as typed by the operator.
    pub fn parse(value: &str) -> Result<Self, AppError> {
        if value.is_empty() {
            return Err(AppError::usage("JupyterHub address must not be empty"));
        }
        if value.chars().any(char::is_whitespace) {
            return Err(AppError::usage(format!(
                "Invalid JupyterHub address '{}': must not contain whitespace",
                value
            )));
        }
        if value.contains("://") {
            return Err(AppError::usage(format!(
                "Invalid JupyterHub address '{}': give the host without a scheme, '{}' is added",
                value, HUB_SCHEME
            )));
        }

        let parsed = Url::parse(&format!("{HUB_SCHEME}{value}")).map_err(|err| {
            AppError::usage(format!("Invalid JupyterHub address '{}': {}", value, err))
        })?;
        if parsed.host_str().is_none_or(str::is_empty) {
            return Err(AppError::usage(format!(
                "Invalid JupyterHub address '{}': missing host",
                value
            )));
        }

        Ok(Self(value.to_string()))
    }

    /// Endpoint written to `hub.url`: the address with `http://` prepended verbatim.
    pub fn url(&self) -> String {
        format!("{HUB_SCHEME}{}", self.0)
    }
}

impl fmt::Display for HubAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
