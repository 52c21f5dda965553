//! Cache configuration

use std::env;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Environment variable read by [`CacheConfig::from_env`]
pub const MAX_BYTES_ENV: &str = "BYTELRU_MAX_BYTES";

/// Settings used to build a [`Cache`](crate::Cache)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheConfig {
    /// Byte budget, `0` disables size-based eviction
    pub max_bytes: usize,
}

impl CacheConfig {
    /// Config with the given byte budget
    pub fn new(max_bytes: usize) -> Self {
        Self { max_bytes }
    }

    /// Load the budget from `BYTELRU_MAX_BYTES`.
    ///
    /// An unset or blank variable yields the default (unbounded) config.
    /// Values go through [`parse_byte_size`], so `"64MiB"` works as well as
    /// `"67108864"`.
    pub fn from_env() -> Result<Self> {
        match env::var(MAX_BYTES_ENV) {
            Ok(raw) if raw.trim().is_empty() => Ok(Self::default()),
            Ok(raw) => raw.parse(),
            Err(env::VarError::NotPresent) => Ok(Self::default()),
            Err(err) => Err(Error::Env {
                var: MAX_BYTES_ENV.to_string(),
                reason: err.to_string(),
            }),
        }
    }
}

impl FromStr for CacheConfig {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_byte_size(s).map(Self::new)
    }
}

/// Parse a human-readable byte size.
///
/// Accepts a plain integer or an integer followed by `B`, `K`/`KB`/`KiB`,
/// `M`/`MB`/`MiB` or `G`/`GB`/`GiB`. Units are case-insensitive and always
/// powers of 1024.
pub fn parse_byte_size(input: &str) -> Result<usize> {
    let trimmed = input.trim();
    let split = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    let (digits, unit) = trimmed.split_at(split);

    if digits.is_empty() {
        return Err(Error::InvalidSize(input.to_string()));
    }

    let multiplier: usize = match unit.trim().to_ascii_lowercase().as_str() {
        "" | "b" => 1,
        "k" | "kb" | "kib" => 1 << 10,
        "m" | "mb" | "mib" => 1 << 20,
        "g" | "gb" | "gib" => 1 << 30,
        _ => return Err(Error::InvalidSize(input.to_string())),
    };

    let number: usize = digits
        .parse()
        .map_err(|_| Error::SizeOverflow(input.to_string()))?;

    number
        .checked_mul(multiplier)
        .ok_or_else(|| Error::SizeOverflow(input.to_string()))
}
