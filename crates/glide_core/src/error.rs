//! Glide error types

use thiserror::Error;

/// Errors raised while building scales, charts and motion platforms.
///
/// Every variant is a configuration mistake detected at construction time;
/// nothing in the per-frame path can fail.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GlideError {
    /// A component was configured with values it cannot work with
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl GlideError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        GlideError::InvalidConfiguration(msg.into())
    }
}

/// Result type for Glide construction
pub type Result<T> = std::result::Result<T, GlideError>;

/// Return early with [`GlideError::InvalidConfiguration`] unless `cond` holds.
#[macro_export]
macro_rules! ensure_config {
    ($cond:expr, $($arg:tt)+) => {
        if !($cond) {
            return Err($crate::GlideError::InvalidConfiguration(format!($($arg)+)));
        }
    };
}
