//! Runtime settings
//!
//! Presets from the library configs, overridden by environment variables
//! (`.env` is loaded first):
//! - `VILLA_API_URL` - API base URL
//! - `VILLA_TIMEOUT_SECS` - request timeout in whole seconds
//! - `VILLA_DATA_DIR` - where the session file lives

use std::path::PathBuf;
use std::time::Duration;

use gateway::GatewayConfig;
use kernel::error::app_error::{AppResult, OptionExt, ResultExt};
use kernel::error::kind::ErrorKind;
use session::SessionConfig;

#[derive(Debug, Clone)]
pub struct Settings {
    pub data_dir: PathBuf,
    pub session: SessionConfig,
    pub gateway: GatewayConfig,
}

impl Settings {
    pub fn from_env(dev: bool) -> AppResult<Self> {
        Self::from_lookup(dev, |key| std::env::var(key).ok())
    }

    fn from_lookup(dev: bool, lookup: impl Fn(&str) -> Option<String>) -> AppResult<Self> {
        let (mut gateway, session) = if dev {
            (GatewayConfig::development(), SessionConfig::development())
        } else {
            (GatewayConfig::production(), SessionConfig::default())
        };

        if let Some(url) = lookup("VILLA_API_URL") {
            gateway = gateway.with_base_url(url);
        }

        if let Some(raw) = lookup("VILLA_TIMEOUT_SECS") {
            let secs: u64 = raw.trim().parse().map_app_err(
                ErrorKind::BadRequest,
                format!("VILLA_TIMEOUT_SECS must be whole seconds, got {raw:?}"),
            )?;
            gateway = gateway.with_timeout(Duration::from_secs(secs));
        }

        let data_dir = match lookup("VILLA_DATA_DIR") {
            Some(dir) => PathBuf::from(dir),
            None => dirs::data_dir()
                .map(|dir| dir.join("villa"))
                .ok_or_app_err(
                    ErrorKind::InternalServerError,
                    "No per-user data directory on this platform; set VILLA_DATA_DIR",
                )?,
        };

        Ok(Self {
            data_dir,
            session,
            gateway,
        })
    }
}
