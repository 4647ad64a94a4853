use std::{env, fmt::Display, path::PathBuf, str::FromStr};

use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid {key} value {value:?}: {reason}")]
    Invalid {
        key: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Login of the bootstrap admin account seeded on start.
    pub admin_email: String,
    pub admin_password: String,
    /// JSON file standing in for the browser's local storage.
    pub device_storage: PathBuf,
    pub channel_buffer: usize,
    pub seed_demo_data: bool,
    /// Unknown emails with a long enough password log in as non-persisted users.
    pub allow_guest_login: bool,
    /// Restore the local cart when a persisted cart mutation fails.
    pub cart_rollback: bool,
    pub min_password_len: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            admin_email: "admin@dairyfarm.com".to_string(),
            admin_password: "admin123".to_string(),
            device_storage: PathBuf::from(".dairy-store/device.json"),
            channel_buffer: 32,
            seed_demo_data: true,
            allow_guest_login: true,
            cart_rollback: false,
            min_password_len: 6,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable lookup, falling back to
    /// [`Config::default`] for anything unset.
    pub fn load_from(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            admin_email: try_load(&lookup, "STORE_ADMIN_EMAIL", defaults.admin_email)?,
            admin_password: try_load(&lookup, "STORE_ADMIN_PASSWORD", defaults.admin_password)?,
            device_storage: try_load(&lookup, "STORE_DEVICE_STORAGE", defaults.device_storage)?,
            channel_buffer: try_load(&lookup, "STORE_CHANNEL_BUFFER", defaults.channel_buffer)?,
            seed_demo_data: try_load(&lookup, "STORE_SEED_DEMO_DATA", defaults.seed_demo_data)?,
            allow_guest_login: try_load(&lookup, "STORE_ALLOW_GUEST_LOGIN", defaults.allow_guest_login)?,
            cart_rollback: try_load(&lookup, "STORE_CART_ROLLBACK", defaults.cart_rollback)?,
            min_password_len: try_load(&lookup, "STORE_MIN_PASSWORD_LEN", defaults.min_password_len)?,
        })
    }
}

fn try_load<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr + std::fmt::Debug,
    T::Err: Display,
{
    let Some(raw) = lookup(key) else {
        info!("{key} not set, using default: {default:?}");
        return Ok(default);
    };

    raw.trim().parse().map_err(|e: T::Err| {
        warn!("Invalid {key} value: {e}");
        ConfigError::Invalid {
            key: key.to_string(),
            value: raw.clone(),
            reason: e.to_string(),
        }
    })
}
