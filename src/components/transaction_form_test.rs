use super::*;

#[test]
fn valid_fields_produce_entry_input() {
    let input = validate_entry("  Rent  ", "1250.00", "c1", "2026-03-01", "").unwrap();
    assert_eq!(
        input,
        EntryInput {
            title: "Rent".to_owned(),
            amount: 125_000,
            category_id: "c1".to_owned(),
            date: "2026-03-01".to_owned(),
            note: None,
        }
    );
}

#[test]
fn note_is_trimmed_and_optional() {
    let input = validate_entry("Rent", "10", "c1", "2026-03-01", "  march  ").unwrap();
    assert_eq!(input.note.as_deref(), Some("march"));
}

#[test]
fn empty_title_is_rejected() {
    assert_eq!(
        validate_entry("   ", "10", "c1", "2026-03-01", ""),
        Err("Enter a title.")
    );
}

#[test]
fn unparseable_amount_is_rejected() {
    assert_eq!(
        validate_entry("Rent", "ten", "c1", "2026-03-01", ""),
        Err("Enter a valid amount, e.g. 42.50.")
    );
}

#[test]
fn zero_amount_is_rejected() {
    assert_eq!(
        validate_entry("Rent", "0", "c1", "2026-03-01", ""),
        Err("Amount must be more than zero.")
    );
}

#[test]
fn missing_category_is_rejected() {
    assert_eq!(
        validate_entry("Rent", "10", "", "2026-03-01", ""),
        Err("Pick a category.")
    );
}

#[test]
fn malformed_date_is_rejected() {
    assert_eq!(
        validate_entry("Rent", "10", "c1", "03/01/2026", ""),
        Err("Pick a date.")
    );
    assert_eq!(validate_entry("Rent", "10", "c1", "", ""), Err("Pick a date."));
}

#[test]
fn date_shape_check_accepts_iso_dates() {
    assert!(is_valid_date("2026-12-31"));
    assert!(!is_valid_date("2026-1-31"));
    assert!(!is_valid_date("2026-12-3a"));
}
