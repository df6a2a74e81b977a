use super::*;

fn date(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .unwrap()
        .with_timezone(&Utc)
}

#[test]
fn long_date_spells_out_the_month() {
    assert_eq!(
        format_long_date(date("2026-08-22T10:00:00Z")),
        "August 22, 2026"
    );
}

#[test]
fn short_date_abbreviates_the_month() {
    assert_eq!(
        format_short_date(date("2026-03-05T10:00:00Z")),
        "Mar 5, 2026"
    );
}

#[test]
fn single_digit_days_are_not_zero_padded() {
    assert_eq!(
        format_long_date(date("2026-01-03T00:00:00Z")),
        "January 3, 2026"
    );
}
