//! Commonly used constants

/// Number of random bytes in a payload nonce
pub const NONCE_LENGTH: usize = 16;

/// Number of years ahead of the current year an expiration date may lie
pub const MAX_EXPIRATION_YEARS_AHEAD: i32 = 25;

/// Legacy resident ID length, digits only
pub const RESIDENT_ID_LEGACY_LENGTH: usize = 15;

/// Resident ID length including the check character
pub const RESIDENT_ID_LENGTH: usize = 18;
