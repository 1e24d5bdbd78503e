use thiserror::Error;

/// Classification of failures reported by the network or the program
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExternalErrorKind {
    /// The RPC endpoint could not be reached or the transport failed
    Connection,
    /// The transaction was rejected (program error, preflight failure,
    /// insufficient funds, signing refusal)
    Rejected,
    /// The response could not be decoded
    MalformedResponse,
}

/// A failure that happened after an instruction was handed to the network
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ExternalError {
    pub kind: ExternalErrorKind,
    pub message: String,
}

impl ExternalError {
    pub fn new(kind: ExternalErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn connection(message: impl Into<String>) -> Self {
        Self::new(ExternalErrorKind::Connection, message)
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self::new(ExternalErrorKind::Rejected, message)
    }

    pub fn malformed_response(message: impl Into<String>) -> Self {
        Self::new(ExternalErrorKind::MalformedResponse, message)
    }
}

/// Custom error types for the staking client
/// The display text of each variant is what the user sees
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StakeClientError {
    // Precondition Errors
    #[error("Please connect your wallet")]
    WalletNotConnected,

    #[error("A request is already in progress")]
    RequestInFlight,

    // Validation Errors
    #[error("Invalid token mint address")]
    InvalidMintAddress,

    #[error("Please enter a valid amount")]
    InvalidAmount,

    #[error("Invalid lockup period")]
    InvalidLockupTier(String),

    #[error("Unable to derive program address")]
    AddressDerivation,

    // External Call Errors
    #[error(transparent)]
    External(#[from] ExternalError),

    // Configuration Errors
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl StakeClientError {
    /// Get error code as u32 for logging
    pub fn error_code(&self) -> u32 {
        match self {
            // Precondition errors: 1000-1099
            StakeClientError::WalletNotConnected => 1001,
            StakeClientError::RequestInFlight => 1002,

            // Validation errors: 1100-1199
            StakeClientError::InvalidMintAddress => 1101,
            StakeClientError::InvalidAmount => 1102,
            StakeClientError::InvalidLockupTier(_) => 1103,
            StakeClientError::AddressDerivation => 1104,

            // External call errors: 1200-1299
            StakeClientError::External(err) => match err.kind {
                ExternalErrorKind::Connection => 1201,
                ExternalErrorKind::Rejected => 1202,
                ExternalErrorKind::MalformedResponse => 1203,
            },

            // Configuration errors: 1300-1399
            StakeClientError::Config(_) => 1301,
        }
    }

    /// Get human-readable error category
    pub fn category(&self) -> &'static str {
        match self.error_code() {
            1000..=1099 => "Precondition",
            1100..=1199 => "Validation",
            1200..=1299 => "External Call",
            1300..=1399 => "Configuration",
            _ => "Unknown",
        }
    }

    /// Whether the failure happened after an instruction was submitted
    pub fn issued_network_call(&self) -> bool {
        matches!(self, StakeClientError::External(_))
    }
}

pub type Result<T> = std::result::Result<T, StakeClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            StakeClientError::WalletNotConnected.to_string(),
            "Please connect your wallet"
        );
        assert_eq!(
            StakeClientError::InvalidMintAddress.to_string(),
            "Invalid token mint address"
        );
        assert_eq!(
            StakeClientError::InvalidAmount.to_string(),
            "Please enter a valid amount"
        );
    }

    #[test]
    fn test_external_error_is_verbatim() {
        let err: StakeClientError =
            ExternalError::rejected("custom program error: 0x1").into();
        assert_eq!(err.to_string(), "custom program error: 0x1");
        assert!(err.issued_network_call());
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(StakeClientError::WalletNotConnected.error_code(), 1001);
        assert_eq!(StakeClientError::InvalidAmount.error_code(), 1102);
        assert_eq!(
            StakeClientError::from(ExternalError::connection("timed out")).error_code(),
            1201
        );
        assert_eq!(
            StakeClientError::from(ExternalError::malformed_response("bad json")).error_code(),
            1203
        );
    }

    #[test]
    fn test_error_categories() {
        assert_eq!(StakeClientError::WalletNotConnected.category(), "Precondition");
        assert_eq!(StakeClientError::InvalidMintAddress.category(), "Validation");
        assert_eq!(
            StakeClientError::from(ExternalError::rejected("x")).category(),
            "External Call"
        );
        assert_eq!(
            StakeClientError::Config("missing".to_string()).category(),
            "Configuration"
        );
    }

    #[test]
    fn test_local_failures_issue_no_network_call() {
        assert!(!StakeClientError::WalletNotConnected.issued_network_call());
        assert!(!StakeClientError::InvalidMintAddress.issued_network_call());
        assert!(!StakeClientError::InvalidAmount.issued_network_call());
        assert!(!StakeClientError::RequestInFlight.issued_network_call());
    }
}
