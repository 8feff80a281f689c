//!
//! Mask templates.
//!
//! A template mixes literal characters with `{{…}}` groups. Every character inside a group is
//! one slot that takes a single character of the customer's input, so `{{99}}/{{99}}` formats
//! `1225` as `12/25`. The characters used inside a group are not interpreted; catalogs use `9`
//! by convention.
//!

/// Result of formatting a raw value with a mask template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskedString {
    /// Display string with the template's literals applied.
    pub formatted_value: String,
    /// Character offset in `formatted_value` where a text field should place its caret.
    pub cursor_index: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    Slot,
    Literal(char),
}

/// A parsed mask template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskTemplate {
    source: String,
    tokens: Vec<Token>,
}

impl MaskTemplate {
    /// Parse a template. Unbalanced braces are read as literals.
    pub fn parse(template: &str) -> Self {
        let mut tokens = Vec::with_capacity(template.len());
        let mut in_group = false;
        let mut chars = template.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '{' if !in_group && chars.peek() == Some(&'{') => {
                    chars.next();
                    in_group = true;
                }
                '}' if in_group && chars.peek() == Some(&'}') => {
                    chars.next();
                    in_group = false;
                }
                _ if in_group => tokens.push(Token::Slot),
                _ => tokens.push(Token::Literal(c)),
            }
        }

        Self {
            source: template.to_owned(),
            tokens,
        }
    }

    /// The template as it was declared in the catalog.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Number of input characters the template can hold.
    pub fn capacity(&self) -> usize {
        self.tokens
            .iter()
            .filter(|token| matches!(token, Token::Slot))
            .count()
    }

    /// A template without slots cannot hold input and formats nothing; it behaves as if no
    /// template had been configured.
    fn is_passthrough(&self) -> bool {
        self.capacity() == 0
    }

    /// Format `raw` for display.
    ///
    /// Input beyond [`Self::capacity`] is dropped. Where `raw` already carries a template literal
    /// at the literal's position, that character is taken as the literal, so formatting an
    /// already formatted value returns it unchanged. A literal is only written while more input
    /// follows it, so a partially typed value never ends in a separator.
    ///
    /// `previous` is the raw value before the current keystroke; it only affects
    /// [`MaskedString::cursor_index`], which lands right after the edited segment instead of at
    /// the end of the value.
    pub fn apply(&self, raw: &str, previous: Option<&str>) -> MaskedString {
        let edit_end = edit_end(raw, previous);

        if self.is_passthrough() {
            return MaskedString {
                formatted_value: raw.to_owned(),
                cursor_index: edit_end,
            };
        }

        let mut formatted = String::with_capacity(self.source.len());
        let mut formatted_len: usize = 0;
        // formatted offset right after each consumed input character
        let mut consumed_ends: Vec<usize> = Vec::with_capacity(raw.len());
        let mut input = raw.chars().peekable();

        for token in &self.tokens {
            match token {
                Token::Literal(literal) => {
                    let typed = input.next_if_eq(literal).is_some();
                    if input.peek().is_none() {
                        break;
                    }
                    formatted.push(*literal);
                    formatted_len += 1;
                    if typed {
                        consumed_ends.push(formatted_len);
                    }
                }
                Token::Slot => {
                    let Some(c) = input.next() else {
                        break;
                    };
                    formatted.push(c);
                    formatted_len += 1;
                    consumed_ends.push(formatted_len);
                }
            }
        }

        let cursor_index = match edit_end.min(consumed_ends.len()) {
            0 => consumed_ends
                .first()
                .map_or(0, |first_end| first_end.saturating_sub(1)),
            placed => consumed_ends
                .get(placed - 1)
                .copied()
                .unwrap_or(formatted_len),
        };

        MaskedString {
            formatted_value: formatted,
            cursor_index,
        }
    }

    /// Strip the template's literals from `masked`, returning what the customer typed.
    ///
    /// A literal is only dropped when the value actually contains it at that position, so input
    /// typed without separators passes through unchanged.
    pub fn remove(&self, masked: &str) -> String {
        if self.is_passthrough() {
            return masked.to_owned();
        }

        let mut raw = String::with_capacity(masked.len());
        let mut input = masked.chars().peekable();

        for token in &self.tokens {
            let Some(next) = input.peek().copied() else {
                break;
            };
            match token {
                Token::Slot => {
                    raw.push(next);
                    input.next();
                }
                Token::Literal(literal) if next == *literal => {
                    input.next();
                }
                Token::Literal(_) => {}
            }
        }

        raw
    }
}

/// Number of characters of `current` up to and including the segment changed since
/// `previous`.
fn edit_end(current: &str, previous: Option<&str>) -> usize {
    let current: Vec<char> = current.chars().collect();
    let Some(previous) = previous else {
        return current.len();
    };
    let previous: Vec<char> = previous.chars().collect();

    let prefix = current
        .iter()
        .zip(&previous)
        .take_while(|(a, b)| a == b)
        .count();
    let suffix = current
        .iter()
        .rev()
        .zip(previous.iter().rev())
        .take(current.len().min(previous.len()) - prefix)
        .take_while(|(a, b)| a == b)
        .count();

    current.len() - suffix
}

/// Format `value` with an optional template. Without a template the value is returned as is.
pub fn apply_mask(template: Option<&str>, value: &str, previous: Option<&str>) -> MaskedString {
    match template.filter(|template| !template.is_empty()) {
        Some(template) => MaskTemplate::parse(template).apply(value, previous),
        None => MaskedString {
            formatted_value: value.to_owned(),
            cursor_index: edit_end(value, previous),
        },
    }
}

/// Inverse of [`apply_mask`]. Without a template the value is returned as is.
pub fn remove_mask(template: Option<&str>, value: &str) -> String {
    match template.filter(|template| !template.is_empty()) {
        Some(template) => MaskTemplate::parse(template).remove(value),
        None => value.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    const CARD_NUMBER: &str = "{{9999}} {{9999}} {{9999}} {{9999}}";
    const EXPIRY_DATE: &str = "{{99}}/{{99}}";

    #[test]
    fn formats_card_number() {
        let masked = apply_mask(Some(CARD_NUMBER), "4567350000427977", None);
        assert_eq!(masked.formatted_value, "4567 3500 0042 7977");
        assert_eq!(masked.cursor_index, 19);
    }

    #[test]
    fn stops_before_trailing_literal() {
        assert_eq!(apply_mask(Some(EXPIRY_DATE), "12", None).formatted_value, "12");
        assert_eq!(apply_mask(Some(EXPIRY_DATE), "122", None).formatted_value, "12/2");
        assert_eq!(apply_mask(Some(EXPIRY_DATE), "", None).formatted_value, "");
    }

    #[test]
    fn leading_literal_is_written_with_first_character() {
        let template = Some("+{{99}} ({{999}})");
        assert_eq!(apply_mask(template, "3", None).formatted_value, "+3");
        assert_eq!(apply_mask(template, "31020", None).formatted_value, "+31 (020");
    }

    #[test]
    fn truncates_beyond_capacity() {
        let masked = apply_mask(Some(EXPIRY_DATE), "122599", None);
        assert_eq!(masked.formatted_value, "12/25");
        assert_eq!(remove_mask(Some(EXPIRY_DATE), &masked.formatted_value), "1225");
    }

    #[test]
    fn missing_template_is_identity() {
        assert_eq!(apply_mask(None, "12 34", None).formatted_value, "12 34");
        assert_eq!(apply_mask(Some(""), "12 34", None).formatted_value, "12 34");
        assert_eq!(remove_mask(None, "12 34"), "12 34");
        assert_eq!(remove_mask(Some(""), "12 34"), "12 34");
    }

    #[test]
    fn template_without_slots_is_identity() {
        let template = MaskTemplate::parse("--");
        assert_eq!(template.capacity(), 0);
        assert_eq!(template.apply("abc", None).formatted_value, "abc");
        assert_eq!(template.remove("abc"), "abc");
    }

    #[test]
    fn remove_accepts_input_without_literals() {
        assert_eq!(remove_mask(Some(EXPIRY_DATE), "1225"), "1225");
        assert_eq!(remove_mask(Some(CARD_NUMBER), "4567 3500 0042"), "456735000042");
    }

    #[test]
    fn formatted_input_is_kept_as_is() {
        let template = Some("{{99}}/{{99}}");
        let masked = apply_mask(template, "12/40", None);
        assert_eq!(masked.formatted_value, "12/40");
        assert_eq!(masked.cursor_index, 5);
        assert_eq!(remove_mask(template, &masked.formatted_value), "1240");

        let masked = apply_mask(Some(CARD_NUMBER), "4567 3500 0042 7977", None);
        assert_eq!(masked.formatted_value, "4567 3500 0042 7977");
        assert_eq!(
            remove_mask(Some(CARD_NUMBER), &masked.formatted_value),
            "4567350000427977"
        );
    }

    #[test]
    fn trailing_typed_separator_is_dropped() {
        let masked = apply_mask(Some(CARD_NUMBER), "4567 ", None);
        assert_eq!(masked.formatted_value, "4567");
        assert_eq!(remove_mask(Some(CARD_NUMBER), "4567 "), "4567");
    }

    #[test]
    fn slot_may_hold_a_literal_character() {
        let template = Some("{{99}}/{{99}}");
        let masked = apply_mask(template, "1/24", None);
        assert_eq!(masked.formatted_value, "1//24");
        assert_eq!(remove_mask(template, &masked.formatted_value), "1/24");
    }

    #[test]
    fn cursor_follows_inserted_character() {
        // "4567" -> "45167": inserted at raw index 2
        let masked = apply_mask(Some(CARD_NUMBER), "45167", Some("4567"));
        assert_eq!(masked.formatted_value, "4516 7");
        assert_eq!(masked.cursor_index, 3);
    }

    #[test]
    fn cursor_skips_separator_after_insert() {
        let masked = apply_mask(Some(CARD_NUMBER), "12345", Some("1234"));
        assert_eq!(masked.formatted_value, "1234 5");
        assert_eq!(masked.cursor_index, 6);
    }

    #[test]
    fn cursor_stays_at_deletion_point() {
        // "123456" -> "12456": deleted raw index 2
        let masked = apply_mask(Some(CARD_NUMBER), "12456", Some("123456"));
        assert_eq!(masked.formatted_value, "1245 6");
        assert_eq!(masked.cursor_index, 2);
    }

    #[test]
    fn cursor_at_start_after_deleting_first_character() {
        let masked = apply_mask(Some("+{{99}}"), "2", Some("12"));
        assert_eq!(masked.formatted_value, "+2");
        assert_eq!(masked.cursor_index, 1);
    }

    #[test]
    fn cursor_without_template_tracks_raw_offset() {
        let masked = apply_mask(None, "abxc", Some("abc"));
        assert_eq!(masked.cursor_index, 3);
    }

    #[test]
    fn unbalanced_braces_are_literals() {
        let template = MaskTemplate::parse("{9{{99}}");
        assert_eq!(template.capacity(), 2);
        assert_eq!(template.apply("12", None).formatted_value, "{912");
    }
}
