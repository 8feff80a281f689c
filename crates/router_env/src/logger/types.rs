//! Types.

use serde::Deserialize;
use strum::{Display, EnumString};

/// Category and tag of log event.
///
/// Don't hesitate to add your variant if it is missing here.
#[derive(Debug, Default, Deserialize, Clone, Copy, PartialEq, Eq, Display, EnumString)]
pub enum Tag {
    /// General.
    #[default]
    General,

    /// Catalog data: building products, fields and rules.
    Catalog,
    /// Field validation of a payment request.
    Validation,
    /// Encryption of a payment request.
    Encryption,
}
