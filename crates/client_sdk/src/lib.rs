#![forbid(unsafe_code)]
#![warn(missing_debug_implementations)]

//!
//! Payment field collection core: catalog descriptors, validation rules, the payment request
//! aggregate and payload encryption.
//!

#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR" ), "/", "README.md"))]

pub mod account_on_file;
pub mod catalog;
pub mod data_restrictions;
pub mod encryption;
pub mod errors;
pub mod field;
pub mod payment_request;
pub mod product;
pub mod validation;

pub use masking::{apply_mask, remove_mask, MaskedString};

pub use self::{
    account_on_file::{AccountOnFile, Attribute, AttributeStatus, LabelTemplateElement},
    data_restrictions::DataRestrictions,
    encryption::{
        BrowserData, DeviceInformation, DeviceInformationProvider, EncryptedCustomerInput,
        Encryptor, PaymentValue, PublicKeyProvider, PublicKeyResponse,
    },
    field::{DisplayHints, PaymentProductField},
    payment_request::PaymentRequest,
    product::PaymentProduct,
    validation::{RuleKind, ValidationError, ValidationRule},
};
