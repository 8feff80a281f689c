mod validate;

use common_utils::{consts, date_time, errors};
use error_stack::report;
use masking::{PeekInterface, StrongSecret};
use time::PrimitiveDateTime;

pub use crate::validate::luhn;

fn invalid(message: &str) -> error_stack::Report<errors::ValidationError> {
    report!(errors::ValidationError::InvalidValue {
        message: message.to_string()
    })
}

pub struct CardExpirationMonth(StrongSecret<u8>);

impl CardExpirationMonth {
    pub fn new(secret: StrongSecret<u8>) -> errors::CustomResult<Self, errors::ValidationError> {
        let month = secret.peek();

        if (1..=12).contains(month) {
            Ok(Self(secret))
        } else {
            Err(invalid("invalid card expiration month"))
        }
    }
}

pub struct CardExpirationYear(StrongSecret<u16>);

impl CardExpirationYear {
    pub fn new(secret: StrongSecret<u16>) -> errors::CustomResult<Self, errors::ValidationError> {
        let year = secret.peek();

        if *year >= 1997 {
            Ok(Self(secret))
        } else {
            Err(invalid("invalid card expiration year"))
        }
    }
}

pub struct CardExpiration {
    pub month: CardExpirationMonth,
    pub year: CardExpirationYear,
}

impl CardExpiration {
    pub fn new(
        secret_month: StrongSecret<u8>,
        secret_year: StrongSecret<u16>,
    ) -> errors::CustomResult<Self, errors::ValidationError> {
        Ok(Self {
            month: CardExpirationMonth::new(secret_month)?,
            year: CardExpirationYear::new(secret_year)?,
        })
    }

    /// Parse `MMYY` or `MMYYYY`. Non-digit characters are stripped first, so `12/25` and
    /// `12-2025` are accepted too. Two digit years are read as `20YY`.
    pub fn from_digits(value: &str) -> errors::CustomResult<Self, errors::ValidationError> {
        let digits: String = value.chars().filter(char::is_ascii_digit).collect();
        if digits.len() != 4 && digits.len() != 6 {
            return Err(invalid("expiration date must be MMYY or MMYYYY"));
        }

        let (month, year) = digits
            .get(..2)
            .zip(digits.get(2..))
            .ok_or_else(|| invalid("expiration date must be MMYY or MMYYYY"))?;

        let month: u8 = month
            .parse()
            .map_err(|_| invalid("invalid card expiration month"))?;
        let year: u16 = match year.len() {
            2 => format!("20{year}").parse(),
            _ => year.parse(),
        }
        .map_err(|_| invalid("invalid card expiration year"))?;

        Self::new(StrongSecret::new(month), StrongSecret::new(year))
    }

    /// The card can be used from `reference`'s month until the end of the expiration month,
    /// and the expiration lies no further ahead than December of `reference`'s year plus
    /// [`consts::MAX_EXPIRATION_YEARS_AHEAD`].
    pub fn is_within_window(&self, reference: PrimitiveDateTime) -> bool {
        let expiration = (i32::from(*self.year.0.peek()), *self.month.0.peek());
        let current = (reference.year(), u8::from(reference.month()));
        let latest = (reference.year() + consts::MAX_EXPIRATION_YEARS_AHEAD, 12);

        current <= expiration && expiration <= latest
    }
}

/// Validate an expiration date string against the window around `reference`.
pub fn validate_expiration_date_at(
    value: &str,
    reference: PrimitiveDateTime,
) -> errors::CustomResult<(), errors::ValidationError> {
    let expiration = CardExpiration::from_digits(value)?;
    if expiration.is_within_window(reference) {
        Ok(())
    } else {
        Err(invalid("card expiration date is out of range"))
    }
}

/// Validate an expiration date string against the current UTC date.
pub fn validate_expiration_date(value: &str) -> errors::CustomResult<(), errors::ValidationError> {
    validate_expiration_date_at(value, date_time::now())
}
