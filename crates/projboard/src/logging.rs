use tracing_subscriber::EnvFilter;

use crate::error::{BoardError, Result};

/// Install the global `tracing` subscriber, writing to stderr.
///
/// Fails if `filter` is not a valid directive or a subscriber is already set.
pub fn init(filter: &str) -> Result<()> {
    let filter = EnvFilter::try_new(filter).map_err(|e| BoardError::Logging {
        message: e.to_string(),
    })?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| BoardError::Logging {
            message: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_filter_is_rejected() {
        let err = init("projboard=notalevel").unwrap_err();
        assert!(matches!(err, BoardError::Logging { .. }));
    }
}
