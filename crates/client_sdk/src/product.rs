//! Payment products.

use common_utils::ext_traits::StringExt;
use error_stack::ResultExt;
use indexmap::IndexMap;

use crate::{
    account_on_file::AccountOnFile,
    catalog::PaymentProductJson,
    errors::{CatalogError, CustomResult},
    field::PaymentProductField,
};

/// A payment product with its input fields, built once from catalog data.
#[derive(Debug, Clone)]
pub struct PaymentProduct {
    id: u32,
    fields: IndexMap<String, PaymentProductField>,
    accounts_on_file: Vec<AccountOnFile>,
    fields_warning: Option<String>,
}

impl PaymentProduct {
    pub fn new(json: &PaymentProductJson) -> Self {
        let mut fields = IndexMap::with_capacity(json.fields.len());
        for field in &json.fields {
            fields
                .entry(field.id.clone())
                .or_insert_with(|| PaymentProductField::new(field));
        }

        Self {
            id: json.id,
            fields,
            accounts_on_file: json.accounts_on_file.iter().map(AccountOnFile::new).collect(),
            fields_warning: json.fields_warning.clone(),
        }
    }

    pub fn from_json(json: &str) -> CustomResult<Self, CatalogError> {
        let json: PaymentProductJson = json
            .parse_struct("PaymentProductJson")
            .change_context(CatalogError::InvalidJson("PaymentProduct"))?;
        Ok(Self::new(&json))
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn field(&self, id: &str) -> Option<&PaymentProductField> {
        self.fields.get(id)
    }

    /// Fields in catalog order.
    pub fn fields(&self) -> impl Iterator<Item = &PaymentProductField> {
        self.fields.values()
    }

    pub fn accounts_on_file(&self) -> &[AccountOnFile] {
        &self.accounts_on_file
    }

    pub fn account_on_file(&self, id: u32) -> Option<&AccountOnFile> {
        self.accounts_on_file
            .iter()
            .find(|account_on_file| account_on_file.id() == id)
    }

    pub fn fields_warning(&self) -> Option<&str> {
        self.fields_warning.as_deref()
    }
}

impl From<PaymentProductJson> for PaymentProduct {
    fn from(json: PaymentProductJson) -> Self {
        Self::new(&json)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn parses_product_and_ignores_unknown_members() {
        let product = PaymentProduct::from_json(
            r#"{
                "id": 809,
                "paymentMethod": "redirect",
                "allowsRecurring": false,
                "fields": [
                    { "id": "issuerId", "type": "string", "displayHints": { "obfuscate": false, "displayOrder": 1 } },
                    { "id": "fiscalNumber", "type": "numericstring" }
                ],
                "accountsOnFile": [
                    { "id": 7, "paymentProductId": 809, "attributes": [], "displayHints": { "labelTemplate": [] } }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(product.id(), 809);
        let ids: Vec<&str> = product.fields().map(PaymentProductField::id).collect();
        assert_eq!(ids, vec!["issuerId", "fiscalNumber"]);
        assert!(product.field("fiscalNumber").is_some());
        assert!(product.field("cardNumber").is_none());
        assert_eq!(product.accounts_on_file().len(), 1);
        assert!(product.account_on_file(7).is_some());
        assert!(product.account_on_file(8).is_none());
        assert!(product.fields_warning().is_none());
    }

    #[test]
    fn missing_id_is_a_catalog_error() {
        let error = PaymentProduct::from_json(r#"{ "fields": [] }"#).unwrap_err();
        assert!(matches!(
            error.current_context(),
            CatalogError::InvalidJson("PaymentProduct")
        ));
    }
}
