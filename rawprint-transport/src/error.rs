//! Transport errors
//!
//! Display strings double as the caller-visible messages, so they stay
//! short and descriptive.

use std::io;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid address format: {0}")]
    InvalidAddress(String),

    #[error("invalid port: {0}")]
    InvalidPort(u16),

    #[error("empty payload")]
    EmptyPayload,

    #[error("connection timed out")]
    ConnectTimeout,

    #[error("printer not found: {0}")]
    HostUnresolvable(String),

    #[error("connection refused")]
    ConnectionRefused,

    #[error("send failed: {0}")]
    Io(#[from] io::Error),

    #[error("not connected")]
    NotConnected,

    #[error("already connected")]
    AlreadyConnected,
}

impl Error {
    /// True for failures rejected before any socket was opened
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidAddress(_) | Self::InvalidPort(_) | Self::EmptyPayload
        )
    }
}
