//! Error types for the stopwatch configuration surface.
//!
//! Only configuration loading and validation can fail. The two hook paths
//! degrade silently instead of returning errors: timing instrumentation must
//! never break the query pipeline it observes.

use config::ConfigError;

#[doc(hidden)]
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration source loading or merging failures
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Target configuration that cannot be coerced into a usable set
    #[error("Invalid target configuration: {0}")]
    InvalidConfiguration(String),
}
