#![allow(clippy::unwrap_used)]

use client_sdk::{
    errors::PaymentRequestError, AccountOnFile, PaymentProduct, PaymentRequest, ValidationError,
};
use serde_json::json;

const CARD_NUMBER: &str = "cardNumber";

fn product(fields: serde_json::Value) -> PaymentProduct {
    serde_json::from_value::<client_sdk::catalog::PaymentProductJson>(json!({
        "id": 1,
        "fields": fields,
    }))
    .unwrap()
    .into()
}

fn required_luhn_card_field() -> serde_json::Value {
    json!({
        "id": CARD_NUMBER,
        "type": "numericstring",
        "dataRestrictions": { "isRequired": true, "validators": { "luhn": {} } },
        "displayHints": { "mask": "{{9999}} {{9999}} {{9999}} {{9999}} {{999}}" }
    })
}

fn account_on_file(payment_product_id: u32, status: &str) -> AccountOnFile {
    AccountOnFile::from_json(
        &json!({
            "id": 1234,
            "paymentProductId": payment_product_id,
            "attributes": [
                { "key": CARD_NUMBER, "value": "************7977", "status": status }
            ],
            "displayHints": { "labelTemplate": [] }
        })
        .to_string(),
    )
    .unwrap()
}

fn request_with(fields: serde_json::Value) -> PaymentRequest {
    let mut request = PaymentRequest::new("sessionId");
    request.set_payment_product(product(fields));
    request
}

#[test]
fn validate_without_product_is_a_contract_violation() {
    let request = PaymentRequest::new("sessionId");
    let error = request.validate().unwrap_err();
    assert!(matches!(
        error.current_context(),
        PaymentRequestError::PaymentProductNotSet
    ));
    assert!(request.error_message_ids().is_err());
}

#[test]
fn product_without_fields_has_no_errors() {
    let request = request_with(json!([]));
    assert_eq!(request.validate().unwrap(), vec![]);
    assert!(request.is_valid());
}

#[test]
fn missing_required_value() {
    let request = request_with(json!([required_luhn_card_field()]));
    assert_eq!(
        request.validate().unwrap(),
        vec![ValidationError::required(CARD_NUMBER)]
    );
}

#[test]
fn valid_required_value() {
    let mut request = request_with(json!([required_luhn_card_field()]));
    request.set_value(CARD_NUMBER, "4567350000427977");
    assert_eq!(request.validate().unwrap(), vec![]);
    assert!(request.is_valid());
}

#[test]
fn empty_required_value_fails_rule_and_requiredness() {
    let mut request = request_with(json!([required_luhn_card_field()]));
    request.set_value(CARD_NUMBER, "");
    assert_eq!(
        request.validate().unwrap(),
        vec![
            ValidationError::new(CARD_NUMBER, "luhn"),
            ValidationError::required(CARD_NUMBER),
        ]
    );
}

#[test]
fn rule_failures_come_before_requiredness_sweep() {
    let mut request = request_with(json!([
        {
            "id": "expiryDate",
            "type": "expirydate",
            "dataRestrictions": { "isRequired": true, "validators": { "expirationDate": {} } }
        },
        required_luhn_card_field(),
        {
            "id": "cvv",
            "type": "numericstring",
            "dataRestrictions": {
                "isRequired": true,
                "validators": { "length": { "minLength": 3, "maxLength": 4 } }
            }
        }
    ]));
    request.set_value("cvv", "12");
    request.set_value(CARD_NUMBER, "4567350000427978");

    assert_eq!(
        request.validate().unwrap(),
        vec![
            ValidationError::new("cvv", "length"),
            ValidationError::new(CARD_NUMBER, "luhn"),
            ValidationError::required("expiryDate"),
        ]
    );
}

#[test]
fn read_only_account_on_file_supplies_required_field() {
    let mut request = request_with(json!([required_luhn_card_field()]));
    request.set_account_on_file(account_on_file(1, "READ_ONLY"));
    assert_eq!(request.validate().unwrap(), vec![]);
}

#[test]
fn must_write_account_on_file_needs_a_value() {
    let mut request = request_with(json!([required_luhn_card_field()]));
    request.set_account_on_file(account_on_file(1, "MUST_WRITE"));
    assert_eq!(
        request.validate().unwrap(),
        vec![ValidationError::required(CARD_NUMBER)]
    );

    request.set_value(CARD_NUMBER, "4567350000427977");
    assert_eq!(request.validate().unwrap(), vec![]);
}

#[test]
fn account_on_file_of_another_product_is_ignored() {
    let mut request = request_with(json!([required_luhn_card_field()]));
    request.set_account_on_file(account_on_file(2, "READ_ONLY"));
    assert_eq!(
        request.validate().unwrap(),
        vec![ValidationError::required(CARD_NUMBER)]
    );
}

#[test]
fn account_on_file_clears_supplied_values_only() {
    let mut request = request_with(json!([required_luhn_card_field()]));
    request.set_value(CARD_NUMBER, "4567350000427977");
    request.set_account_on_file(account_on_file(1, "MUST_WRITE"));
    assert_eq!(request.value(CARD_NUMBER), Some("4567350000427977"));

    request.set_account_on_file(account_on_file(1, "CAN_WRITE"));
    assert_eq!(request.value(CARD_NUMBER), None);
    assert_eq!(request.account_on_file().unwrap().id(), 1234);
}

#[test]
fn length_rule_within_request() {
    let mut request = request_with(json!([
        {
            "id": "reference",
            "type": "string",
            "dataRestrictions": {
                "isRequired": false,
                "validators": { "length": { "minLength": 2, "maxLength": 5 } }
            }
        }
    ]));

    for (value, valid) in [("", false), ("1", false), ("12", true), ("12345", true), ("123456", false)] {
        request.set_value("reference", value);
        assert_eq!(request.is_valid(), valid, "value {value:?}");
    }
}

#[test]
fn boleto_bancario_requiredness_follows_fiscal_number() {
    let mut request = request_with(json!([
        {
            "id": "fiscalNumber",
            "type": "numericstring",
            "dataRestrictions": {
                "isRequired": true,
                "validators": { "length": { "minLength": 11, "maxLength": 14 } }
            }
        },
        {
            "id": "companyName",
            "type": "string",
            "dataRestrictions": {
                "isRequired": false,
                "validators": { "boletoBancarioRequiredness": { "fiscalNumberLength": 14 } }
            }
        }
    ]));

    request.set_value("fiscalNumber", "12345678901");
    request.set_value("companyName", "");
    assert_eq!(request.validate().unwrap(), vec![]);

    request.set_value("fiscalNumber", "12345678901234");
    assert_eq!(
        request.validate().unwrap(),
        vec![ValidationError::new("companyName", "boletoBancarioRequiredness")]
    );

    request.set_value("companyName", "ACME Ltda");
    assert_eq!(request.validate().unwrap(), vec![]);
}

#[test]
fn masked_views_use_field_masks() {
    let mut request = request_with(json!([required_luhn_card_field()]));
    request.set_value(CARD_NUMBER, "4567350000427977");

    assert_eq!(
        request.masked_value(CARD_NUMBER).as_deref(),
        Some("4567 3500 0042 7977")
    );
    assert_eq!(
        request.unmasked_values().get(CARD_NUMBER).map(String::as_str),
        Some("4567350000427977")
    );
    assert!(request.is_valid());
}

fn optional_field(id: &str, validators: serde_json::Value) -> serde_json::Value {
    json!({
        "id": id,
        "type": "string",
        "dataRestrictions": { "isRequired": false, "validators": validators }
    })
}

#[test]
fn rules_check_request_values() {
    let cases = [
        (json!({ "iban": {} }), "DE89370400440532013000", "DE89370400440532013001"),
        (json!({ "range": { "minValue": 1, "maxValue": 50 } }), "50", "51"),
        (json!({ "fixedList": { "allowedValues": ["visa", "mastercard"] } }), "visa", "amex"),
        (json!({ "regularExpression": { "regularExpression": "^[A-Z]{3}$" } }), "EUR", "eur"),
        (json!({ "termsAndConditions": {} }), "true", "false"),
        (json!({ "residentIdNumber": {} }), "110101202002042275", "110101202002042274"),
        (json!({ "emailAddress": {} }), "aa@bb.com", "aa2bb.com"),
    ];

    for (validators, valid, invalid) in cases {
        let kind = validators
            .as_object()
            .and_then(|validators| validators.keys().next().cloned())
            .unwrap();
        let mut request = request_with(json!([optional_field("value", validators)]));

        request.set_value("value", valid);
        assert_eq!(request.validate().unwrap(), vec![], "{kind} accepts {valid:?}");

        for rejected in [invalid, ""] {
            request.set_value("value", rejected);
            assert_eq!(
                request.validate().unwrap(),
                vec![ValidationError::new("value", kind.as_str())],
                "{kind} rejects {rejected:?}"
            );
        }
    }
}

#[test]
fn absent_value_fails_every_rule_but_an_empty_length() {
    let request = request_with(json!([
        optional_field("email", json!({ "emailAddress": {} })),
        optional_field("note", json!({ "length": { "minLength": 0, "maxLength": 10 } })),
        optional_field("code", json!({ "length": { "minLength": 1, "maxLength": 10 } })),
    ]));
    let product = request.payment_product().unwrap();

    let rule_holds = |field_id: &str| {
        product
            .field(field_id)
            .unwrap()
            .data_restrictions()
            .unwrap()
            .validation_rules()
            .iter()
            .all(|rule| rule.validate_value(&request, field_id))
    };

    assert!(!rule_holds("email"));
    assert!(rule_holds("note"));
    assert!(!rule_holds("code"));
    // fields without a value are not checked by the rule pass
    assert_eq!(request.validate().unwrap(), vec![]);
}

#[test]
fn masked_values_are_unmasked_before_rules_run() {
    let mut request = request_with(json!([
        {
            "id": "reference",
            "type": "string",
            "dataRestrictions": {
                "isRequired": true,
                "validators": {
                    "regularExpression": { "regularExpression": "^[0-9]{4}$" },
                    "length": { "minLength": 4, "maxLength": 4 }
                }
            },
            "displayHints": { "mask": "{{99}}-{{99}}" }
        },
        {
            "id": "amount",
            "type": "numericstring",
            "dataRestrictions": {
                "isRequired": false,
                "validators": { "range": { "minValue": 1000, "maxValue": 9999 } }
            },
            "displayHints": { "mask": "{{9}}.{{999}}" }
        }
    ]));

    request.set_value("reference", "12-34");
    request.set_value("amount", "1.500");
    assert_eq!(request.validate().unwrap(), vec![]);
    assert_eq!(request.unmasked_value("reference").as_deref(), Some("1234"));
    assert_eq!(request.unmasked_value("amount").as_deref(), Some("1500"));

    request.set_value("reference", "1234");
    assert_eq!(request.masked_value("reference").as_deref(), Some("12-34"));
    assert!(request.is_valid());
}

#[test]
fn formatted_and_raw_card_numbers_validate_alike() {
    let mut formatted = request_with(json!([required_luhn_card_field()]));
    formatted.set_value(CARD_NUMBER, "4567 3500 0042 7977");
    let mut raw = request_with(json!([required_luhn_card_field()]));
    raw.set_value(CARD_NUMBER, "4567350000427977");

    assert_eq!(formatted.validate().unwrap(), vec![]);
    assert_eq!(formatted.unmasked_values(), raw.unmasked_values());
    assert_eq!(
        formatted.masked_value(CARD_NUMBER),
        raw.masked_value(CARD_NUMBER)
    );
}

#[test]
fn formatted_expiry_date_unmasks_to_digits() {
    let mut request = request_with(json!([
        {
            "id": "expiryDate",
            "type": "expirydate",
            "dataRestrictions": { "isRequired": true, "validators": { "expirationDate": {} } },
            "displayHints": { "mask": "{{99}}/{{99}}" }
        }
    ]));

    let next_year = (common_utils::date_time::now().year() + 1) % 100;
    let formatted = format!("12/{next_year:02}");
    request.set_value("expiryDate", formatted.as_str());

    assert_eq!(request.masked_value("expiryDate"), Some(formatted));
    assert_eq!(
        request.unmasked_value("expiryDate"),
        Some(format!("12{next_year:02}"))
    );
    assert!(request.is_valid());
}
