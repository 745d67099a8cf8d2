use chrono::NaiveDate;
use progress_core::{display_date, parse_date_input, DateKey, DayCursor};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn date_key_feeds_display_with_correct_weekday() {
    let key = DateKey::from_date(date(2025, 7, 29));
    assert_eq!(key.to_string(), "2025-07-29");

    let shown = display_date(&key.to_string());
    assert!(shown.starts_with("Tue"), "{shown}");
    assert_eq!(shown, "Tue, Jul 29, 2025");
}

#[test]
fn all_input_formats_resolve_to_same_day() {
    let expected = Some(date(2025, 7, 29));
    for input in ["20250729", "2025-07-29", "202507-29", "2025-0729"] {
        assert_eq!(parse_date_input(input), expected, "input: {input}");
    }
}

#[test]
fn invalid_input_leaves_cursor_unchanged() {
    let mut cursor = DayCursor::at(date(2025, 7, 29));

    assert!(!cursor.go_to("not-a-date"));
    assert!(!cursor.go_to(""));
    assert!(!cursor.go_to("2025-02-30"));
    assert_eq!(cursor.current(), date(2025, 7, 29));
}

#[test]
fn signed_or_short_fields_leave_cursor_unchanged() {
    let mut cursor = DayCursor::at(date(2025, 7, 29));

    for input in ["-5-01-01", "+2025-07-29", "2025-7-29", "2025- 07-29"] {
        assert!(!cursor.go_to(input), "input: {input}");
    }
    assert_eq!(cursor.date_key().to_string(), "2025-07-29");
}

#[test]
fn valid_input_moves_cursor() {
    let mut cursor = DayCursor::at(date(2025, 7, 29));

    assert!(cursor.go_to(" 2024-0229 "));
    assert_eq!(cursor.date_key().to_string(), "2024-02-29");
    cursor.next_day();
    assert_eq!(cursor.date_key().to_string(), "2024-03-01");
}

#[test]
fn reset_to_today_matches_today_key() {
    let mut cursor = DayCursor::at(date(2000, 1, 1));
    cursor.reset_to_today();
    // Guard against running exactly across local midnight.
    let today = DateKey::today();
    assert!(cursor.date_key() == today || cursor.date_key() < today);
}
