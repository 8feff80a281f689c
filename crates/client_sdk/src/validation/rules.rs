//! Attributes and predicates of the individual rule kinds.

use regex::Regex;
use router_env::logger;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LengthAttributes {
    pub min_length: usize,
    pub max_length: usize,
}

impl LengthAttributes {
    pub fn accepts(&self, value: &str) -> bool {
        let length = value.chars().count();
        self.min_length <= length && length <= self.max_length
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeAttributes {
    pub min_value: f64,
    pub max_value: f64,
}

impl RangeAttributes {
    pub fn accepts(&self, value: &str) -> bool {
        value
            .trim()
            .parse::<f64>()
            .is_ok_and(|number| self.min_value <= number && number <= self.max_value)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixedListAttributes {
    pub allowed_values: Vec<String>,
}

impl FixedListAttributes {
    pub fn accepts(&self, value: &str) -> bool {
        self.allowed_values.iter().any(|allowed| allowed == value)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RegularExpressionAttributes {
    regular_expression: String,
}

/// A catalog pattern. A pattern that does not compile matches nothing.
#[derive(Debug, Clone)]
pub struct RegularExpression {
    pattern: String,
    regex: Option<Regex>,
}

impl RegularExpression {
    pub fn new(pattern: String) -> Self {
        let regex = Regex::new(&pattern)
            .map_err(|error| {
                logger::error!(tag = %logger::Tag::Catalog, ?error, "invalid regular expression in catalog");
            })
            .ok();

        Self { pattern, regex }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn accepts(&self, value: &str) -> bool {
        self.regex
            .as_ref()
            .is_some_and(|regex| regex.is_match(value))
    }
}

impl<'de> Deserialize<'de> for RegularExpression {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        RegularExpressionAttributes::deserialize(deserializer)
            .map(|attributes| Self::new(attributes.regular_expression))
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoletoBancarioRequirednessAttributes {
    pub fiscal_number_length: usize,
}

impl BoletoBancarioRequirednessAttributes {
    /// The field is only required once the fiscal number has the configured length.
    pub fn accepts(&self, value: &str, fiscal_number: &str) -> bool {
        !self.requires_value(fiscal_number) || !value.is_empty()
    }

    pub fn requires_value(&self, fiscal_number: &str) -> bool {
        fiscal_number.chars().count() == self.fiscal_number_length
    }
}

pub fn accepts_terms(value: &str) -> bool {
    value == "true"
}
