//! Exit codes for the CLI

use relnotes_core::{ConfigError, RelnotesError};

/// General error
pub const ERROR: u8 = 1;

/// Configuration error
pub const CONFIG_ERROR: u8 = 2;

/// Exit code for an error returned by a command
pub fn for_error(err: &anyhow::Error) -> u8 {
    let is_config = err
        .chain()
        .any(|cause| {
            cause.downcast_ref::<ConfigError>().is_some()
                || cause
                    .downcast_ref::<RelnotesError>()
                    .is_some_and(RelnotesError::is_config)
        });

    if is_config {
        CONFIG_ERROR
    } else {
        ERROR
    }
}
