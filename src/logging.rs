// src/logging.rs

//! Tracing setup for the `taskdag` binary.
//!
//! The effective level comes from the `--log-level` flag when given,
//! otherwise from `TASKDAG_LOG`, otherwise `info`. `TASKDAG_LOG` accepts
//! anything `tracing::Level` can parse ("error" through "trace", case
//! insensitive); unparseable values fall through to the default.

use std::str::FromStr;

use anyhow::Result;
use tracing::Level;
use tracing_subscriber::fmt;

use crate::cli::LogLevel;

/// Install the global fmt subscriber. Call once, from `main`.
pub fn init_logging(cli_level: Option<LogLevel>) -> Result<()> {
    let env_level = std::env::var("TASKDAG_LOG").ok();
    let level = resolve_level(cli_level, env_level.as_deref());

    fmt().with_max_level(level).with_target(true).init();

    Ok(())
}

/// Pick the effective level: flag beats environment beats default.
pub fn resolve_level(cli_level: Option<LogLevel>, env_level: Option<&str>) -> Level {
    if let Some(lvl) = cli_level {
        return lvl.into();
    }
    env_level
        .and_then(|s| Level::from_str(s.trim()).ok())
        .unwrap_or(Level::INFO)
}

impl From<LogLevel> for Level {
    fn from(lvl: LogLevel) -> Self {
        match lvl {
            LogLevel::Error => Level::ERROR,
            LogLevel::Warn => Level::WARN,
            LogLevel::Info => Level::INFO,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Trace => Level::TRACE,
        }
    }
}
