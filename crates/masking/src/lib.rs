#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg_hide))]
#![cfg_attr(docsrs, doc(cfg_hide(doc)))]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

//!
//! Display masking for payment input.
//!
//! Two concerns live here: the mask-template interpreter that formats and un-formats what a
//! customer types into a payment field, and wrapper types that keep raw field values out of
//! `Debug` output and logs.
//!

#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR" ), "/", "README.md"))]

pub use zeroize::{self, Zeroize as ZeroizableSecret};

mod strategy;
pub use strategy::{Strategy, WithType, WithoutType};

mod abs;
pub use abs::{ExposeInterface, ExposeOptionInterface, PeekInterface};

mod secret;
mod strong_secret;
pub use secret::Secret;
pub use strong_secret::StrongSecret;

#[cfg(feature = "serde")]
mod serde;
#[cfg(feature = "serde")]
pub use crate::serde::SerializableSecret;

pub mod template;
pub use template::{apply_mask, remove_mask, MaskTemplate, MaskedString};

/// This module should be included with asterisk.
///
/// `use masking::prelude::*;`
///
pub mod prelude {
    pub use super::{ExposeInterface, ExposeOptionInterface, PeekInterface};
}
