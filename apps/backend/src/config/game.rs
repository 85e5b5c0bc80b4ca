//! Environment-driven configuration.
//!
//! Environment variables must be set by the runtime environment; nothing is
//! read from files.

use crate::domain::builtin_catalog::DEFAULT_FILLER_ROLE;
use crate::error::AppError;

const DEFAULT_MIN_PLAYERS: usize = 6;

/// Listen address for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3001,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let host = lookup("BACKEND_HOST").unwrap_or(defaults.host);
        let port = match lookup("BACKEND_PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| {
                AppError::config(format!("BACKEND_PORT must be a valid port number, got '{raw}'"))
            })?,
            None => defaults.port,
        };
        Ok(Self { host, port })
    }
}

/// Game-session rules the orchestration layer applies around the domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Seated players required before `start_game` succeeds.
    pub min_players: usize,
    /// Role used to pad a pool smaller than the seating.
    pub filler_role: String,
    /// Fixed shuffle seed; `None` draws fresh entropy per start.
    pub rng_seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            min_players: DEFAULT_MIN_PLAYERS,
            filler_role: DEFAULT_FILLER_ROLE.to_string(),
            rng_seed: None,
        }
    }
}

impl GameConfig {
    /// Read `MAFIA_MIN_PLAYERS`, `MAFIA_FILLER_ROLE` and `MAFIA_RNG_SEED`.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`GameConfig::from_env`] over an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup("MAFIA_MIN_PLAYERS") {
            config.min_players = raw.trim().parse::<usize>().map_err(|_| {
                AppError::config(format!(
                    "MAFIA_MIN_PLAYERS must be a non-negative integer, got '{raw}'"
                ))
            })?;
        }

        if let Some(raw) = lookup("MAFIA_FILLER_ROLE") {
            let name = raw.trim();
            if name.is_empty() {
                return Err(AppError::config("MAFIA_FILLER_ROLE must not be empty"));
            }
            config.filler_role = name.to_string();
        }

        if let Some(raw) = lookup("MAFIA_RNG_SEED") {
            let seed = raw.trim().parse::<u64>().map_err(|_| {
                AppError::config(format!("MAFIA_RNG_SEED must be an unsigned integer, got '{raw}'"))
            })?;
            config.rng_seed = Some(seed);
        }

        Ok(config)
    }

    pub fn with_min_players(mut self, min_players: usize) -> Self {
        self.min_players = min_players;
        self
    }

    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }
}
