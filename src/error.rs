//! Typed errors at every boundary of the bridge, mirroring the taxonomy
//! the teacher crate uses for its SPI error: one `thiserror`-derived
//! enum per boundary, never a panic on malformed input.

use thiserror::Error;

/// §7 frame-level errors. Both variants are recovered locally by the
/// scheduler: the frame is dropped, logged, and the next poll proceeds.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FrameError {
    #[error("frame has invalid length {0} (expected 20 or 203)")]
    TooShortOrWrongLength(usize),
    #[error("frame checksum mismatch: expected {expected:#04x}, got {got:#04x}")]
    BadChecksum { expected: u8, got: u8 },
}

/// §7 errors surfaced to the caller of `command()`. These never reach
/// the scheduler loop.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("no topic named {0:?}")]
    UnknownTopic(String),
    #[error("topic {0:?} has no encoder and cannot be written")]
    NotWritable(String),
    #[error("value rejected by the topic's domain")]
    OutOfDomain,
}

/// §7 scheduler-level I/O failure. Logged; the tick completes normally
/// and the next tick retries.
#[derive(Debug, Error)]
pub enum SchedulerError {
    #[error("serial I/O failure: {0}")]
    Io(#[from] std::io::Error),
}

/// §4.6/§7 configuration errors, surfaced at startup before the
/// scheduler is constructed.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("serial device path must not be empty")]
    InvalidDevice,
    #[error("failed to read or parse configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
}
