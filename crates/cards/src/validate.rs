/// Mod-10 checksum over a string of digits. Empty input or any non-digit fails.
pub fn luhn(number: &str) -> bool {
    !number.is_empty() && number.chars().all(|c| c.is_ascii_digit()) && ::luhn::valid(number)
}
