#![allow(clippy::unwrap_used)]

use masking::template::{apply_mask, remove_mask, MaskTemplate};
use proptest::prelude::*;

const TEMPLATES: &[&str] = &[
    "{{9999}} {{9999}} {{9999}} {{9999}}",
    "{{9999}} {{999999}} {{99999}}",
    "{{99}}/{{99}}",
    "+{{99}} ({{999}}) {{9999}}-{{99}}",
    "{{aaaa}}-{{****}}",
];

proptest! {
    /// Unmasking a formatted value gives back exactly what was typed.
    #[test]
    fn remove_mask_inverts_apply_mask(
        template in prop::sample::select(TEMPLATES),
        raw in "[0-9A-Za-z]{0,24}",
    ) {
        let capacity = MaskTemplate::parse(template).capacity();
        let raw: String = raw.chars().take(capacity).collect();

        let masked = apply_mask(Some(template), &raw, None);
        prop_assert_eq!(remove_mask(Some(template), &masked.formatted_value), raw);
    }

    /// Formatting an already formatted value changes nothing.
    #[test]
    fn apply_mask_is_idempotent(
        template in prop::sample::select(TEMPLATES),
        raw in "\\PC{0,24}",
    ) {
        let once = apply_mask(Some(template), &raw, None).formatted_value;
        let twice = apply_mask(Some(template), &once, None).formatted_value;
        prop_assert_eq!(twice, once);
    }

    /// Typing past the template's capacity is not reflected in the field.
    #[test]
    fn overflow_is_truncated(
        template in prop::sample::select(TEMPLATES),
        raw in "[0-9]{0,40}",
    ) {
        let capacity = MaskTemplate::parse(template).capacity();
        let expected: String = raw.chars().take(capacity).collect();

        let masked = apply_mask(Some(template), &raw, None);
        prop_assert_eq!(remove_mask(Some(template), &masked.formatted_value), expected);
    }

    /// Without a template, masking is the identity.
    #[test]
    fn no_template_is_identity(raw in "\\PC{0,24}") {
        let masked = apply_mask(None, &raw, None);
        prop_assert_eq!(&masked.formatted_value, &raw);
        prop_assert_eq!(remove_mask(None, &masked.formatted_value), raw);
    }

    /// A single inserted digit leaves the caret right behind it.
    #[test]
    fn caret_follows_single_insert(
        raw in "[0-9]{0,15}",
        digit in "[0-9]",
        at in 0usize..16,
    ) {
        let template = TEMPLATES[0];
        let at = at.min(raw.len());
        let mut edited = raw.clone();
        edited.insert_str(at, &digit);

        let masked = apply_mask(Some(template), &edited, Some(&raw));
        let typed_before_caret: String = masked.formatted_value.chars().take(masked.cursor_index).collect();
        let raw_before_caret = remove_mask(Some(template), &typed_before_caret);

        // the caret sits after the inserted digit, or after an identical run it joined
        prop_assert!(raw_before_caret.len() > at);
        prop_assert!(edited.starts_with(&raw_before_caret));
    }
}
