//! Error contexts of the client SDK.

pub use common_utils::errors::CustomResult;

use crate::validation::ValidationError;

/// Misuse of a [`crate::PaymentRequest`].
#[derive(Debug, thiserror::Error)]
pub enum PaymentRequestError {
    #[error("Error validating PaymentRequest, please set a paymentProduct first")]
    PaymentProductNotSet,
}

#[derive(Debug, thiserror::Error)]
pub enum EncryptionError {
    #[error("No paymentProduct set")]
    PaymentProductNotSet,
    #[error("Payment request is invalid")]
    InvalidPaymentRequest { errors: Vec<ValidationError> },
    #[error("Public key is not available")]
    PublicKeyUnavailable,
    #[error("Public key could not be loaded")]
    InvalidPublicKey,
    #[error("Device information is not available")]
    DeviceInformationUnavailable,
    #[error("Failed to serialize the customer input")]
    PayloadSerializationFailed,
    #[error("Failed to generate a nonce")]
    NonceGenerationFailed,
    #[error("Failed to encrypt the customer input")]
    EncryptionFailed,
}

impl EncryptionError {
    /// Field errors that made the request unencryptable. Empty for every other failure.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            Self::InvalidPaymentRequest { errors } => errors,
            _ => &[],
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to parse {0} from catalog data")]
    InvalidJson(&'static str),
}

/// Failure reported by an external collaborator of the [`crate::Encryptor`].
#[derive(Debug, thiserror::Error)]
pub enum CollaboratorError {
    #[error("Public key could not be retrieved")]
    PublicKeyFetchFailed,
    #[error("Device information could not be collected")]
    DeviceInformationFailed,
}
