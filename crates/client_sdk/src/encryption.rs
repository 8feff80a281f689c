//!
//! Encryption of customer input.
//!
//! A valid [`PaymentRequest`] is turned into an [`EncryptedCustomerInput`] and sealed as a
//! compact JWE: the content key is wrapped with the merchant's RSA public key (`RSA-OAEP`) and
//! the payload encrypted with `A256CBC-HS512`.
//!

use async_trait::async_trait;
use base64::Engine;
use common_utils::{crypto, ext_traits::Encode};
use error_stack::{report, ResultExt};
use josekit::jwe;
use masking::{PeekInterface, Secret, StrongSecret};
use router_env::{instrument, logger};
use serde::{Deserialize, Serialize};
use tokio::sync::OnceCell;

use crate::{
    errors::{CollaboratorError, CustomResult, EncryptionError},
    PaymentRequest,
};

/// Content encryption of the produced token.
pub const CONTENT_ENCRYPTION: &str = "A256CBC-HS512";

const PEM_MARKER: &str = "-----BEGIN";

/// One entered value as it travels inside the encrypted payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentValue {
    pub key: String,
    pub value: Secret<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrowserData {
    pub java_script_enabled: bool,
    pub color_depth: u32,
    pub screen_height: u32,
    pub screen_width: u32,
    pub inner_height: u32,
    pub inner_width: u32,
}

/// Fingerprint of the customer's device, passed through to the payload unmodified.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceInformation {
    pub timezone_offset_utc_minutes: i32,
    pub locale: String,
    pub browser_data: BrowserData,
}

/// The payload sealed by [`Encryptor::encrypt`].
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EncryptedCustomerInput {
    pub client_session_id: String,
    pub nonce: String,
    pub payment_product_id: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_on_file_id: Option<u32>,
    pub tokenize: bool,
    pub payment_values: Vec<PaymentValue>,
    pub collected_device_information: DeviceInformation,
}

/// Public key issued for a client session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicKeyResponse {
    pub key_id: String,
    /// Base64 DER `SubjectPublicKeyInfo`. A PEM document is accepted as well.
    pub public_key: String,
}

impl PublicKeyResponse {
    fn encrypter(&self) -> CustomResult<jwe::alg::rsaes::RsaesJweEncrypter, EncryptionError> {
        if self.public_key.contains(PEM_MARKER) {
            return jwe::RSA_OAEP
                .encrypter_from_pem(&self.public_key)
                .change_context(EncryptionError::InvalidPublicKey)
                .attach_printable("Error getting JweEncrypter from PEM");
        }

        let der = base64::engine::general_purpose::STANDARD
            .decode(self.public_key.trim())
            .change_context(EncryptionError::InvalidPublicKey)
            .attach_printable("Public key is neither PEM nor base64")?;

        jwe::RSA_OAEP
            .encrypter_from_der(der)
            .change_context(EncryptionError::InvalidPublicKey)
            .attach_printable("Error getting JweEncrypter from DER")
    }
}

/// Source of the public key the payload is encrypted with.
#[async_trait]
pub trait PublicKeyProvider: Send + Sync {
    async fn public_key(&self) -> CustomResult<PublicKeyResponse, CollaboratorError>;
}

#[async_trait]
impl PublicKeyProvider for PublicKeyResponse {
    async fn public_key(&self) -> CustomResult<PublicKeyResponse, CollaboratorError> {
        Ok(self.clone())
    }
}

pub trait DeviceInformationProvider: Send + Sync {
    fn device_information(&self) -> CustomResult<DeviceInformation, CollaboratorError>;
}

impl DeviceInformationProvider for DeviceInformation {
    fn device_information(&self) -> CustomResult<DeviceInformation, CollaboratorError> {
        Ok(self.clone())
    }
}

/// Seals payment requests for one client session.
///
/// The public key is requested on the first [`Self::encrypt`] that gets past validation and is
/// reused afterwards. A failed request is not cached, so a later call asks again.
#[derive(Debug)]
pub struct Encryptor<K, D> {
    key_provider: K,
    device_provider: D,
    public_key: OnceCell<PublicKeyResponse>,
}

impl<K, D> Encryptor<K, D>
where
    K: PublicKeyProvider,
    D: DeviceInformationProvider,
{
    pub fn new(key_provider: K, device_provider: D) -> Self {
        Self {
            key_provider,
            device_provider,
            public_key: OnceCell::new(),
        }
    }

    /// Validate `request` and encrypt its unmasked values into a compact JWE.
    ///
    /// Nothing is fetched or encrypted unless the request has a payment product and no
    /// validation errors. Every call uses a fresh nonce.
    #[instrument(skip_all)]
    pub async fn encrypt(
        &self,
        request: &PaymentRequest,
    ) -> CustomResult<String, EncryptionError> {
        let payment_product = request
            .payment_product()
            .ok_or_else(|| report!(EncryptionError::PaymentProductNotSet))?;

        let errors = request
            .validate()
            .change_context(EncryptionError::PaymentProductNotSet)?;
        if !errors.is_empty() {
            return Err(report!(EncryptionError::InvalidPaymentRequest { errors }));
        }

        logger::info!(
            tag = %logger::Tag::Encryption,
            product_id = payment_product.id(),
            "encrypting payment request"
        );

        let public_key = self
            .public_key
            .get_or_try_init(|| self.key_provider.public_key())
            .await
            .change_context(EncryptionError::PublicKeyUnavailable)?;
        let encrypter = public_key.encrypter()?;

        let collected_device_information = self
            .device_provider
            .device_information()
            .change_context(EncryptionError::DeviceInformationUnavailable)?;

        let nonce =
            crypto::generate_nonce().change_context(EncryptionError::NonceGenerationFailed)?;

        let payload = EncryptedCustomerInput {
            client_session_id: request.client_session_id().to_string(),
            nonce,
            payment_product_id: payment_product.id(),
            account_on_file_id: request.account_on_file().map(|aof| aof.id()),
            tokenize: request.tokenize(),
            payment_values: request
                .unmasked_values()
                .into_iter()
                .map(|(key, value)| PaymentValue {
                    key: key.to_string(),
                    value: Secret::new(value),
                })
                .collect(),
            collected_device_information,
        };
        let payload: StrongSecret<Vec<u8>> = payload
            .encode_to_vec()
            .change_context(EncryptionError::PayloadSerializationFailed)?
            .into();

        let mut header = jwe::JweHeader::new();
        header.set_content_encryption(CONTENT_ENCRYPTION);
        header.set_key_id(&public_key.key_id);

        let token = jwe::serialize_compact(payload.peek(), &header, &encrypter)
            .change_context(EncryptionError::EncryptionFailed)
            .attach_printable("Error getting jwe string")?;

        logger::info!(
            tag = %logger::Tag::Encryption,
            product_id = payment_product.id(),
            key_id = %public_key.key_id,
            "payment request encrypted"
        );

        Ok(token)
    }
}
