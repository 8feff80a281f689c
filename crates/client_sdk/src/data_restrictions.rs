//! Requiredness and validators of a single field.

use router_env::logger;

use crate::{
    catalog::DataRestrictionsJson,
    validation::{RuleKind, ValidationRule},
};

#[derive(Debug, Clone, Default)]
pub struct DataRestrictions {
    is_required: bool,
    validation_rules: Vec<ValidationRule>,
}

impl DataRestrictions {
    pub fn new(json: &DataRestrictionsJson) -> Self {
        Self::from_validators(
            json.is_required,
            json.validators
                .iter()
                .map(|(kind, attributes)| (kind.as_str(), attributes.clone())),
        )
    }

    /// Build from validator declarations in catalog order. Unknown kinds are skipped and only
    /// the first declaration of each kind is kept.
    pub fn from_validators<'a>(
        is_required: bool,
        validators: impl IntoIterator<Item = (&'a str, serde_json::Value)>,
    ) -> Self {
        let mut validation_rules: Vec<ValidationRule> = Vec::new();

        for (kind, attributes) in validators {
            let Some(rule) = ValidationRule::from_definition(kind, attributes) else {
                continue;
            };

            if validation_rules
                .iter()
                .any(|existing| existing.kind() == rule.kind())
            {
                logger::debug!(tag = %logger::Tag::Catalog, kind, "duplicate validator dropped");
                continue;
            }

            validation_rules.push(rule);
        }

        Self {
            is_required,
            validation_rules,
        }
    }

    pub fn is_required(&self) -> bool {
        self.is_required
    }

    /// Validators in declaration order.
    pub fn validation_rules(&self) -> &[ValidationRule] {
        &self.validation_rules
    }

    /// The validator of the given kind, spelled as the catalog would (`luhn` or `Luhn`).
    pub fn validation_rule(&self, kind: &str) -> Option<&ValidationRule> {
        let kind = RuleKind::resolve(kind)?;
        self.validation_rules
            .iter()
            .find(|rule| rule.kind() == kind)
    }
}
