//!
//! Validation rules declared by the catalog.
//!
//! A rule is resolved once from its catalog declaration and is then a pure predicate over the
//! unmasked value of a field. [`ValidationRule::validate_value`] reads its inputs out of a
//! [`PaymentRequest`], which lets cross-field rules look at sibling fields.
//!

mod rules;

use common_utils::{ext_traits::ValueExt, validation};
use router_env::logger;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

pub use self::rules::{
    BoletoBancarioRequirednessAttributes, FixedListAttributes, LengthAttributes,
    RangeAttributes, RegularExpression,
};
use crate::PaymentRequest;

/// Field whose length decides whether a Boleto Bancário field is required.
pub const FISCAL_NUMBER_FIELD_ID: &str = "fiscalNumber";

/// A failed rule on a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationError {
    pub field_id: String,
    pub error_message_id: String,
}

impl ValidationError {
    pub fn new(field_id: impl Into<String>, error_message_id: impl Into<String>) -> Self {
        Self {
            field_id: field_id.into(),
            error_message_id: error_message_id.into(),
        }
    }

    /// The error raised for a required field that has no value.
    pub fn required(field_id: impl Into<String>) -> Self {
        Self::new(field_id, "required")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
pub enum RuleKind {
    Luhn,
    Iban,
    ExpirationDate,
    Length,
    Range,
    FixedList,
    RegularExpression,
    TermsAndConditions,
    BoletoBancarioRequiredness,
    ResidentIdNumber,
    EmailAddress,
}

impl RuleKind {
    /// Resolve a kind as the catalog spells it. Only the first letter is case-insensitive:
    /// `luhn` and `Luhn` both resolve, `LUHN` does not.
    pub fn resolve(name: &str) -> Option<Self> {
        let mut chars = name.chars();
        let first = chars.next()?;
        let capitalized: String = first.to_uppercase().chain(chars).collect();
        capitalized.parse().ok()
    }
}

#[derive(Debug, Clone)]
enum Rule {
    Luhn,
    Iban,
    ExpirationDate,
    Length(LengthAttributes),
    Range(RangeAttributes),
    FixedList(FixedListAttributes),
    RegularExpression(RegularExpression),
    TermsAndConditions,
    BoletoBancarioRequiredness(BoletoBancarioRequirednessAttributes),
    ResidentIdNumber,
    EmailAddress,
}

impl Rule {
    fn kind(&self) -> RuleKind {
        match self {
            Self::Luhn => RuleKind::Luhn,
            Self::Iban => RuleKind::Iban,
            Self::ExpirationDate => RuleKind::ExpirationDate,
            Self::Length(_) => RuleKind::Length,
            Self::Range(_) => RuleKind::Range,
            Self::FixedList(_) => RuleKind::FixedList,
            Self::RegularExpression(_) => RuleKind::RegularExpression,
            Self::TermsAndConditions => RuleKind::TermsAndConditions,
            Self::BoletoBancarioRequiredness(_) => RuleKind::BoletoBancarioRequiredness,
            Self::ResidentIdNumber => RuleKind::ResidentIdNumber,
            Self::EmailAddress => RuleKind::EmailAddress,
        }
    }
}

/// One validator of a field.
#[derive(Debug, Clone)]
pub struct ValidationRule {
    error_message_id: String,
    rule: Rule,
}

impl ValidationRule {
    /// Build a rule from a catalog declaration: the validator key and its attributes.
    ///
    /// Returns `None` for kinds this client does not know, so newer catalogs keep working,
    /// and for declarations whose attributes cannot be read.
    pub fn from_definition(kind: &str, attributes: serde_json::Value) -> Option<Self> {
        let Some(rule_kind) = RuleKind::resolve(kind) else {
            logger::warn!(tag = %logger::Tag::Catalog, kind, "no validator for kind");
            return None;
        };

        let rule = match rule_kind {
            RuleKind::Luhn => Rule::Luhn,
            RuleKind::Iban => Rule::Iban,
            RuleKind::ExpirationDate => Rule::ExpirationDate,
            RuleKind::TermsAndConditions => Rule::TermsAndConditions,
            RuleKind::ResidentIdNumber => Rule::ResidentIdNumber,
            RuleKind::EmailAddress => Rule::EmailAddress,
            RuleKind::Length => Rule::Length(parse_attributes(kind, attributes)?),
            RuleKind::Range => Rule::Range(parse_attributes(kind, attributes)?),
            RuleKind::FixedList => Rule::FixedList(parse_attributes(kind, attributes)?),
            RuleKind::RegularExpression => {
                Rule::RegularExpression(parse_attributes(kind, attributes)?)
            }
            RuleKind::BoletoBancarioRequiredness => {
                Rule::BoletoBancarioRequiredness(parse_attributes(kind, attributes)?)
            }
        };

        Some(Self {
            error_message_id: kind.to_string(),
            rule,
        })
    }

    pub fn kind(&self) -> RuleKind {
        self.rule.kind()
    }

    /// Identifier reported in a [`ValidationError`]; the validator key as the catalog declared
    /// it.
    pub fn error_message_id(&self) -> &str {
        &self.error_message_id
    }

    /// Check a standalone unmasked value. `dependent_value` is the value of the field a
    /// cross-field rule depends on; rules without a dependency ignore it.
    pub fn validate(&self, value: &str, dependent_value: Option<&str>) -> bool {
        match &self.rule {
            Rule::Luhn => cards::luhn(value),
            Rule::Iban => validation::validate_iban(value).is_ok(),
            Rule::ExpirationDate => cards::validate_expiration_date(value).is_ok(),
            Rule::Length(attributes) => attributes.accepts(value),
            Rule::Range(attributes) => attributes.accepts(value),
            Rule::FixedList(attributes) => attributes.accepts(value),
            Rule::RegularExpression(expression) => expression.accepts(value),
            Rule::TermsAndConditions => rules::accepts_terms(value),
            Rule::BoletoBancarioRequiredness(attributes) => {
                attributes.accepts(value, dependent_value.unwrap_or_default())
            }
            Rule::ResidentIdNumber => validation::validate_resident_id_number(value).is_ok(),
            Rule::EmailAddress => validation::validate_email_address(value).is_ok(),
        }
    }

    /// Check the value `request` holds for `field_id`. An absent or empty value fails, except
    /// for a length rule allowing zero characters and for Boleto Bancário requiredness.
    pub fn validate_value(&self, request: &PaymentRequest, field_id: &str) -> bool {
        let value = request
            .unmasked_value(field_id)
            .filter(|value| !value.is_empty());

        match &self.rule {
            Rule::Length(attributes) => value.map_or(attributes.min_length == 0, |value| {
                attributes.accepts(&value)
            }),
            Rule::BoletoBancarioRequiredness(attributes) => {
                let fiscal_number = request
                    .unmasked_value(FISCAL_NUMBER_FIELD_ID)
                    .unwrap_or_default();
                !attributes.requires_value(&fiscal_number)
                    || request.value(field_id).is_some_and(|raw| !raw.is_empty())
            }
            _ => value.is_some_and(|value| self.validate(&value, None)),
        }
    }
}

fn parse_attributes<T>(kind: &str, attributes: serde_json::Value) -> Option<T>
where
    T: serde::de::DeserializeOwned,
{
    attributes
        .parse_value(std::any::type_name::<T>())
        .map_err(|error| {
            logger::error!(tag = %logger::Tag::Catalog, kind, ?error, "unreadable validator attributes");
        })
        .ok()
}
