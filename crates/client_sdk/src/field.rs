//! Payment product field descriptors.

use masking::{template, MaskedString};

use crate::{
    catalog::{DisplayHintsJson, PaymentProductFieldJson},
    data_restrictions::DataRestrictions,
    PaymentRequest,
};

/// Mask used to obfuscate stored values: the input mask with its digit placeholders shown as
/// `*`.
pub(crate) fn wildcard_mask_of(mask: &str) -> String {
    mask.replace('9', "*")
}

#[derive(Debug, Clone, Default)]
pub struct DisplayHints {
    mask: Option<String>,
    wildcard_mask: Option<String>,
    obfuscate: bool,
    display_order: Option<u32>,
    label: Option<String>,
}

impl DisplayHints {
    pub fn new(json: &DisplayHintsJson) -> Self {
        let wildcard_mask = json
            .wildcard_mask
            .clone()
            .or_else(|| json.mask.as_deref().map(wildcard_mask_of));

        Self {
            mask: json.mask.clone(),
            wildcard_mask,
            obfuscate: json.obfuscate,
            display_order: json.display_order,
            label: json.label.clone(),
        }
    }

    pub fn mask(&self) -> Option<&str> {
        self.mask.as_deref()
    }

    pub fn wildcard_mask(&self) -> Option<&str> {
        self.wildcard_mask.as_deref()
    }

    /// Whether a UI should hide the typed characters, as for a CVV.
    pub fn obfuscate(&self) -> bool {
        self.obfuscate
    }

    pub fn display_order(&self) -> Option<u32> {
        self.display_order
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

/// An input field of a payment product. Immutable once built from the catalog.
#[derive(Debug, Clone)]
pub struct PaymentProductField {
    id: String,
    field_type: String,
    data_restrictions: Option<DataRestrictions>,
    display_hints: Option<DisplayHints>,
}

impl PaymentProductField {
    pub fn new(json: &PaymentProductFieldJson) -> Self {
        Self {
            id: json.id.clone(),
            field_type: json.field_type.clone(),
            data_restrictions: json.data_restrictions.as_ref().map(DataRestrictions::new),
            display_hints: json.display_hints.as_ref().map(DisplayHints::new),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Declared type tag, e.g. `numericstring`.
    pub fn field_type(&self) -> &str {
        &self.field_type
    }

    pub fn data_restrictions(&self) -> Option<&DataRestrictions> {
        self.data_restrictions.as_ref()
    }

    pub fn display_hints(&self) -> Option<&DisplayHints> {
        self.display_hints.as_ref()
    }

    pub fn is_required(&self) -> bool {
        self.data_restrictions
            .as_ref()
            .is_some_and(DataRestrictions::is_required)
    }

    pub fn mask(&self) -> Option<&str> {
        self.display_hints.as_ref().and_then(DisplayHints::mask)
    }

    pub fn wildcard_mask(&self) -> Option<&str> {
        self.display_hints
            .as_ref()
            .and_then(DisplayHints::wildcard_mask)
    }

    /// Format a raw value for display. `previous` is the raw value before the edit.
    pub fn apply_mask(&self, value: &str, previous: Option<&str>) -> MaskedString {
        template::apply_mask(self.mask(), value, previous)
    }

    /// Obfuscate an already stored value for display.
    pub fn apply_wildcard_mask(&self, value: &str) -> MaskedString {
        template::apply_mask(self.wildcard_mask(), value, None)
    }

    pub fn remove_mask(&self, value: &str) -> String {
        template::remove_mask(self.mask(), value)
    }

    /// The canonical value of a raw input: formatted, then stripped of the mask again.
    pub fn unmask(&self, value: &str) -> String {
        self.remove_mask(&self.apply_mask(value, None).formatted_value)
    }

    /// Check a standalone value against every rule of this field. Cross-field rules see an
    /// empty dependent value; use [`Self::error_message_ids`] to validate within a request.
    pub fn is_valid(&self, value: &str) -> bool {
        let value = self.unmask(value);
        self.data_restrictions.as_ref().map_or(true, |restrictions| {
            restrictions
                .validation_rules()
                .iter()
                .all(|rule| rule.validate(&value, None))
        })
    }

    /// Error message ids of the rules this field fails in `request`, in rule order.
    pub fn error_message_ids(&self, request: &PaymentRequest) -> Vec<String> {
        self.data_restrictions
            .iter()
            .flat_map(DataRestrictions::validation_rules)
            .filter(|rule| !rule.validate_value(request, &self.id))
            .map(|rule| rule.error_message_id().to_string())
            .collect()
    }
}
