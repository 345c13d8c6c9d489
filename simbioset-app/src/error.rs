//! Error types for the shell.

use crate::config::ConfigError;
use simbioset_client::ClientError;

/// Failures that abort the shell's startup or a top-level operation.
///
/// Store-level trouble (a corrupt mirror file, a failed preference write)
/// is logged and recovered where it happens and never reaches this type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Client(#[from] ClientError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_errors_convert_and_display_transparently() {
        let err = AppError::from(ConfigError::MissingConfigPath);
        assert!(matches!(err, AppError::Config(_)));
        assert_eq!(
            format!("{}", err),
            format!("{}", ConfigError::MissingConfigPath)
        );
    }

    #[test]
    fn client_errors_convert_and_display_transparently() {
        let inner = ClientError::Status {
            status: 503,
            message: "backend down".to_string(),
        };
        let err = AppError::from(inner);
        let msg = format!("{}", err);
        assert!(msg.contains("503"));
        assert!(msg.contains("backend down"));
    }
}
