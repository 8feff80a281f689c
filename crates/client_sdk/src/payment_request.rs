//!
//! The payment request aggregate.
//!
//! Holds the raw values a customer entered for one checkout attempt, together with the payment
//! product (and optionally the account-on-file) they belong to. Masking is applied on read;
//! validation is recomputed on every call.
//!

use std::sync::Arc;

use error_stack::report;
use indexmap::IndexMap;
use masking::{PeekInterface, Secret};
use router_env::logger;

use crate::{
    account_on_file::AccountOnFile,
    errors::{CustomResult, PaymentRequestError},
    field::PaymentProductField,
    product::PaymentProduct,
    validation::ValidationError,
};

#[derive(Debug, Clone)]
pub struct PaymentRequest {
    client_session_id: String,
    field_values: IndexMap<String, Secret<String>>,
    payment_product: Option<Arc<PaymentProduct>>,
    account_on_file: Option<Arc<AccountOnFile>>,
    tokenize: bool,
}

impl PaymentRequest {
    pub fn new(client_session_id: impl Into<String>) -> Self {
        Self {
            client_session_id: client_session_id.into(),
            field_values: IndexMap::new(),
            payment_product: None,
            account_on_file: None,
            tokenize: false,
        }
    }

    pub fn client_session_id(&self) -> &str {
        &self.client_session_id
    }

    /// Store the raw value of a field. A field keeps the position at which it was first set.
    pub fn set_value(&mut self, field_id: impl Into<String>, value: impl Into<String>) {
        self.field_values
            .insert(field_id.into(), Secret::new(value.into()));
    }

    pub fn remove_value(&mut self, field_id: &str) -> bool {
        self.field_values.shift_remove(field_id).is_some()
    }

    pub fn value(&self, field_id: &str) -> Option<&str> {
        self.field_values
            .get(field_id)
            .map(|value| value.peek().as_str())
    }

    /// Raw values in the order they were first set.
    pub fn values(&self) -> impl Iterator<Item = (&str, &str)> {
        self.field_values
            .iter()
            .map(|(field_id, value)| (field_id.as_str(), value.peek().as_str()))
    }

    /// The value formatted with its field's mask. `None` if the field is unknown to the product
    /// or has no value.
    pub fn masked_value(&self, field_id: &str) -> Option<String> {
        let field = self.field(field_id)?;
        let value = self.value(field_id)?;
        Some(field.apply_mask(value, None).formatted_value)
    }

    pub fn masked_values(&self) -> IndexMap<&str, Option<String>> {
        self.field_values
            .keys()
            .map(|field_id| (field_id.as_str(), self.masked_value(field_id)))
            .collect()
    }

    /// The canonical value of a field: its raw value masked and unmasked again. `None` if the
    /// field is unknown to the product or has no value.
    pub fn unmasked_value(&self, field_id: &str) -> Option<String> {
        let field = self.field(field_id)?;
        let value = self.value(field_id)?;
        Some(field.unmask(value))
    }

    /// Canonical values of every set field known to the product, in the order they were set.
    pub fn unmasked_values(&self) -> IndexMap<&str, String> {
        self.field_values
            .keys()
            .filter_map(|field_id| {
                self.unmasked_value(field_id)
                    .map(|value| (field_id.as_str(), value))
            })
            .collect()
    }

    pub fn set_payment_product(&mut self, payment_product: impl Into<Arc<PaymentProduct>>) {
        self.payment_product = Some(payment_product.into());
    }

    pub fn payment_product(&self) -> Option<&PaymentProduct> {
        self.payment_product.as_deref()
    }

    /// Attach stored payment details. Values entered for attributes the account-on-file supplies
    /// are discarded, except for attributes the customer must enter again.
    pub fn set_account_on_file(&mut self, account_on_file: impl Into<Arc<AccountOnFile>>) {
        let account_on_file = account_on_file.into();
        for attribute in account_on_file
            .attributes()
            .filter(|attribute| attribute.supplies_value())
        {
            self.field_values.shift_remove(attribute.key());
        }
        self.account_on_file = Some(account_on_file);
    }

    pub fn account_on_file(&self) -> Option<&AccountOnFile> {
        self.account_on_file.as_deref()
    }

    pub fn tokenize(&self) -> bool {
        self.tokenize
    }

    pub fn set_tokenize(&mut self, tokenize: bool) {
        self.tokenize = tokenize;
    }

    /// Validate the request against its payment product.
    ///
    /// Errors come in two passes: first one error per failing rule of every set value (in the
    /// order values were set, rules in declaration order), then one `required` error per
    /// required field that has neither a non-empty value nor a usable account-on-file attribute
    /// (in catalog order). Values for fields the product does not know are ignored.
    pub fn validate(&self) -> CustomResult<Vec<ValidationError>, PaymentRequestError> {
        let payment_product = self
            .payment_product
            .as_deref()
            .ok_or_else(|| report!(PaymentRequestError::PaymentProductNotSet))?;

        let mut errors: Vec<ValidationError> = self
            .field_values
            .keys()
            .filter_map(|field_id| payment_product.field(field_id))
            .flat_map(|field| {
                field
                    .error_message_ids(self)
                    .into_iter()
                    .map(|error_message_id| ValidationError::new(field.id(), error_message_id))
            })
            .collect();
        let rule_failures = errors.len();

        errors.extend(
            payment_product
                .fields()
                .filter(|field| field.is_required())
                .filter(|field| self.value(field.id()).map_or(true, str::is_empty))
                .filter(|field| !self.is_supplied_by_account_on_file(payment_product, field))
                .map(|field| ValidationError::required(field.id())),
        );

        logger::debug!(
            tag = %logger::Tag::Validation,
            product_id = payment_product.id(),
            values = self.field_values.len(),
            rule_failures,
            missing_required = errors.len().saturating_sub(rule_failures),
            "payment request validated"
        );

        Ok(errors)
    }

    /// `true` iff a payment product is set and validation yields no errors.
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok_and(|errors| errors.is_empty())
    }

    /// Error message ids of [`Self::validate`], without their field ids.
    pub fn error_message_ids(&self) -> CustomResult<Vec<String>, PaymentRequestError> {
        Ok(self
            .validate()?
            .into_iter()
            .map(|error| error.error_message_id)
            .collect())
    }

    fn field(&self, field_id: &str) -> Option<&PaymentProductField> {
        self.payment_product.as_deref()?.field(field_id)
    }

    fn is_supplied_by_account_on_file(
        &self,
        payment_product: &PaymentProduct,
        field: &PaymentProductField,
    ) -> bool {
        self.account_on_file.as_deref().is_some_and(|account_on_file| {
            account_on_file.payment_product_id() == payment_product.id()
                && account_on_file
                    .attribute(field.id())
                    .is_some_and(|attribute| attribute.supplies_value())
        })
    }
}
