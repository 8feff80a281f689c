//!
//! Stored payment details of a returning customer.
//!
//! The values an account-on-file carries are already obfuscated by the server; they are only
//! formatted for display here, never edited.
//!

use common_utils::ext_traits::StringExt;
use error_stack::ResultExt;
use indexmap::IndexMap;
use masking::{template, MaskedString};

use crate::{
    catalog::{AccountOnFileAttributeJson, AccountOnFileJson, LabelTemplateElementJson},
    errors::{CatalogError, CustomResult},
    field::wildcard_mask_of,
};

/// Write permission of a stored attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeStatus {
    ReadOnly,
    CanWrite,
    /// Stored but must be entered again by the customer, e.g. an expired expiry date.
    MustWrite,
    Other(String),
}

impl From<&str> for AttributeStatus {
    fn from(status: &str) -> Self {
        match status {
            "READ_ONLY" => Self::ReadOnly,
            "CAN_WRITE" => Self::CanWrite,
            "MUST_WRITE" => Self::MustWrite,
            other => Self::Other(other.to_string()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Attribute {
    key: String,
    value: Option<String>,
    status: AttributeStatus,
    must_write_reason: Option<String>,
}

impl Attribute {
    pub fn new(json: &AccountOnFileAttributeJson) -> Self {
        Self {
            key: json.key.clone(),
            value: json.value.clone(),
            status: AttributeStatus::from(json.status.as_str()),
            must_write_reason: json.must_write_reason.clone(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn status(&self) -> &AttributeStatus {
        &self.status
    }

    pub fn must_write_reason(&self) -> Option<&str> {
        self.must_write_reason.as_deref()
    }

    /// Whether the stored value can stand in for a value the customer would have to enter.
    pub fn supplies_value(&self) -> bool {
        self.status != AttributeStatus::MustWrite
    }
}

#[derive(Debug, Clone)]
pub struct LabelTemplateElement {
    attribute_key: String,
    mask: Option<String>,
    wildcard_mask: Option<String>,
}

impl LabelTemplateElement {
    pub fn new(json: &LabelTemplateElementJson) -> Self {
        Self {
            attribute_key: json.attribute_key.clone(),
            mask: json.mask.clone(),
            wildcard_mask: json.mask.as_deref().map(wildcard_mask_of),
        }
    }

    pub fn attribute_key(&self) -> &str {
        &self.attribute_key
    }

    pub fn mask(&self) -> Option<&str> {
        self.mask.as_deref()
    }

    pub fn wildcard_mask(&self) -> Option<&str> {
        self.wildcard_mask.as_deref()
    }
}

#[derive(Debug, Clone)]
pub struct AccountOnFile {
    id: u32,
    payment_product_id: u32,
    attributes: IndexMap<String, Attribute>,
    label_template: IndexMap<String, LabelTemplateElement>,
    logo: Option<String>,
}

impl AccountOnFile {
    pub fn new(json: &AccountOnFileJson) -> Self {
        let attributes = json
            .attributes
            .iter()
            .map(|attribute| (attribute.key.clone(), Attribute::new(attribute)))
            .collect();
        let label_template = json
            .display_hints
            .label_template
            .iter()
            .map(|element| (element.attribute_key.clone(), LabelTemplateElement::new(element)))
            .collect();

        Self {
            id: json.id,
            payment_product_id: json.payment_product_id,
            attributes,
            label_template,
            logo: json.display_hints.logo.clone(),
        }
    }

    pub fn from_json(json: &str) -> CustomResult<Self, CatalogError> {
        let json: AccountOnFileJson = json
            .parse_struct("AccountOnFileJson")
            .change_context(CatalogError::InvalidJson("AccountOnFile"))?;
        Ok(Self::new(&json))
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn payment_product_id(&self) -> u32 {
        self.payment_product_id
    }

    pub fn attributes(&self) -> impl Iterator<Item = &Attribute> {
        self.attributes.values()
    }

    pub fn attribute(&self, key: &str) -> Option<&Attribute> {
        self.attributes.get(key)
    }

    pub fn label_template(&self) -> impl Iterator<Item = &LabelTemplateElement> {
        self.label_template.values()
    }

    pub fn label_template_element(&self, attribute_key: &str) -> Option<&LabelTemplateElement> {
        self.label_template.get(attribute_key)
    }

    pub fn logo(&self) -> Option<&str> {
        self.logo.as_deref()
    }

    /// The stored value of `attribute_key` formatted with its label template's wildcard mask.
    /// `None` if either the value or the mask is missing.
    pub fn masked_value_by_attribute_key(&self, attribute_key: &str) -> Option<MaskedString> {
        let value = self.attribute(attribute_key)?.value()?;
        let wildcard_mask = self
            .label_template_element(attribute_key)?
            .wildcard_mask()?;

        Some(template::apply_mask(Some(wildcard_mask), value, None))
    }
}
