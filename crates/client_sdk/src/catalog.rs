//!
//! Catalog descriptors of a payment product, as delivered by the payment server.
//!
//! Only the members this crate acts on are modelled; everything else is ignored on
//! deserialization.
//!

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentProductJson {
    pub id: u32,
    #[serde(default)]
    pub fields: Vec<PaymentProductFieldJson>,
    #[serde(default)]
    pub accounts_on_file: Vec<AccountOnFileJson>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields_warning: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentProductFieldJson {
    pub id: String,
    #[serde(rename = "type", default)]
    pub field_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_restrictions: Option<DataRestrictionsJson>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_hints: Option<DisplayHintsJson>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataRestrictionsJson {
    #[serde(default)]
    pub is_required: bool,
    /// Validator kind as declared by the catalog mapped to its attributes, in declaration
    /// order.
    #[serde(default)]
    pub validators: IndexMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayHintsJson {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mask: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wildcard_mask: Option<String>,
    #[serde(default)]
    pub obfuscate: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_order: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountOnFileJson {
    pub id: u32,
    pub payment_product_id: u32,
    #[serde(default)]
    pub attributes: Vec<AccountOnFileAttributeJson>,
    #[serde(default)]
    pub display_hints: AccountOnFileDisplayHintsJson,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountOnFileAttributeJson {
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default)]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub must_write_reason: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountOnFileDisplayHintsJson {
    #[serde(default)]
    pub label_template: Vec<LabelTemplateElementJson>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelTemplateElementJson {
    pub attribute_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mask: Option<String>,
}
