//! Format and checksum validations for payment field values.

#![deny(clippy::invalid_regex)]

use std::sync::LazyLock;

use error_stack::report;
use regex::Regex;
#[cfg(feature = "logs")]
use router_env::logger;

use crate::{
    consts,
    errors::{CustomResult, ValidationError},
};

fn compiled(pattern: &str) -> Option<Regex> {
    Regex::new(pattern)
        .map_err(|_error| {
            #[cfg(feature = "logs")]
            logger::error!(?_error);
        })
        .ok()
}

fn invalid(message: &str) -> error_stack::Report<ValidationError> {
    report!(ValidationError::InvalidValue {
        message: message.into()
    })
}

/// Validates an IBAN: country code, check digits and BBAN shape, then the ISO 7064 mod-97
/// checksum. Whitespace and punctuation are ignored and letters may be lower case.
pub fn validate_iban(iban: &str) -> CustomResult<(), ValidationError> {
    static IBAN_REGEX: LazyLock<Option<Regex>> =
        LazyLock::new(|| compiled(r"^[A-Z]{2}[0-9]{2}[A-Z0-9]{4}[0-9]{7}[A-Z0-9]{0,16}$"));

    let sanitized: String = iban
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_')
        .flat_map(char::to_uppercase)
        .collect();

    let iban_regex = IBAN_REGEX
        .as_ref()
        .ok_or_else(|| invalid("Invalid regex expression"))?;
    if !iban_regex.is_match(&sanitized) {
        return Err(invalid("Invalid IBAN format"));
    }

    let (head, tail) = sanitized
        .get(..4)
        .zip(sanitized.get(4..))
        .ok_or_else(|| invalid("Invalid IBAN format"))?;

    // letters count as two digits (A = 10 .. Z = 35); the remainder is carried per digit group
    let remainder = tail
        .chars()
        .chain(head.chars())
        .filter_map(|c| c.to_digit(36))
        .fold(0_u32, |remainder, value| {
            let shift = if value < 10 { 10 } else { 100 };
            (remainder * shift + value) % 97
        });

    if remainder == 1 {
        Ok(())
    } else {
        Err(invalid("IBAN checksum mismatch"))
    }
}

/// Weight of the digit at `position` in an 18 character resident ID: `2^(17 - position) mod 11`.
fn resident_id_weight(position: usize) -> u32 {
    let exponent = consts::RESIDENT_ID_LENGTH - 1 - position;
    (0..exponent).fold(1, |weight, _| weight * 2 % 11)
}

/// Validates a resident identity number.
///
/// Legacy IDs are 15 digits without a checksum. Current IDs are 17 digits followed by a
/// check character, which is `X` (either case) when the checksum is 10.
pub fn validate_resident_id_number(id: &str) -> CustomResult<(), ValidationError> {
    let chars: Vec<char> = id.chars().collect();

    match chars.len() {
        consts::RESIDENT_ID_LEGACY_LENGTH => {
            if chars.iter().all(char::is_ascii_digit) {
                Ok(())
            } else {
                Err(invalid("Legacy resident ID must be all digits"))
            }
        }
        consts::RESIDENT_ID_LENGTH => {
            let (check_char, digits) = chars
                .split_last()
                .ok_or_else(|| invalid("Invalid resident ID length"))?;

            let sum = digits
                .iter()
                .enumerate()
                .try_fold(0_u32, |sum, (position, c)| {
                    c.to_digit(10)
                        .map(|digit| sum + digit * resident_id_weight(position))
                })
                .ok_or_else(|| invalid("Resident ID must start with 17 digits"))?;

            let checksum = (12 - sum % 11) % 11;
            let matches = if checksum < 10 {
                check_char.to_digit(10) == Some(checksum)
            } else {
                check_char.eq_ignore_ascii_case(&'X')
            };

            if matches {
                Ok(())
            } else {
                Err(invalid("Resident ID checksum mismatch"))
            }
        }
        _ => Err(invalid("Invalid resident ID length")),
    }
}

/// Performs a simple validation against a provided email address.
pub fn validate_email_address(email: &str) -> CustomResult<(), ValidationError> {
    static EMAIL_REGEX: LazyLock<Option<Regex>> = LazyLock::new(|| {
        compiled(r"(?i)^[^@.]+(\.[^@.]+)*@([^@.]+\.)*[^@.]+\.[^@.][^@.]+$")
    });

    let email_regex = EMAIL_REGEX
        .as_ref()
        .ok_or_else(|| invalid("Invalid regex expression"))?;

    if email.is_empty() {
        return Err(invalid("Email address is empty"));
    }

    if !email_regex.is_match(email) {
        return Err(invalid("Invalid email address format"));
    }

    Ok(())
}
