use super::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    date(y, m, d).and_hms_opt(h, min, 0).unwrap()
}

// =============================================================
// Parsing
// =============================================================

#[test]
fn parse_timestamp_without_offset_is_taken_as_local() {
    assert_eq!(parse_timestamp_local("2024-03-05T10:15:00"), Some(at(2024, 3, 5, 10, 15)));
    assert_eq!(parse_timestamp_local("2024-03-05 10:15:00.250").map(|t| t.date()), Some(date(2024, 3, 5)));
}

#[test]
fn parse_timestamp_bare_date_is_utc_midnight() {
    let expected = Utc
        .from_utc_datetime(&at(2024, 3, 5, 0, 0))
        .with_timezone(&Local)
        .naive_local();
    assert_eq!(parse_timestamp_local("2024-03-05"), Some(expected));
    assert_eq!(
        parse_timestamp_local("2024-03-05"),
        parse_timestamp_local("2024-03-05T00:00:00Z")
    );
}

#[test]
fn parse_timestamp_with_offset_matches_local_conversion() {
    let raw = "2024-03-05T10:15:00.000Z";
    let expected = DateTime::parse_from_rfc3339(raw)
        .unwrap()
        .with_timezone(&Local)
        .naive_local();
    assert_eq!(parse_timestamp_local(raw), Some(expected));
}

#[test]
fn parse_timestamp_rejects_garbage() {
    assert_eq!(parse_timestamp_local("ayer"), None);
    assert_eq!(parse_timestamp_local(""), None);
}

// =============================================================
// Day boundaries
// =============================================================

#[test]
fn day_bounds_cover_the_whole_day() {
    let day = date(2024, 3, 5);
    assert_eq!(start_of_day(day), at(2024, 3, 5, 0, 0));
    assert_eq!(
        end_of_day(day),
        day.and_hms_milli_opt(23, 59, 59, 999).unwrap()
    );
}

#[test]
fn midday_keeps_the_day_and_drops_the_time() {
    assert_eq!(midday(at(2024, 3, 5, 23, 59)), at(2024, 3, 5, 12, 0));
    assert_eq!(midday(at(2024, 3, 5, 0, 1)), at(2024, 3, 5, 12, 0));
}

// =============================================================
// Formatting
// =============================================================

#[test]
fn format_long_es_uses_spanish_month_names() {
    assert_eq!(format_long_es(at(2024, 3, 5, 10, 0)), "5 marzo 2024");
    assert_eq!(format_long_es(at(2023, 12, 31, 10, 0)), "31 diciembre 2023");
}

#[test]
fn format_short_pads_day_and_month() {
    assert_eq!(format_short(date(2024, 3, 5)), "05/03/2024");
}

#[test]
fn input_date_round_trips_and_empty_is_none() {
    assert_eq!(parse_input_date("2024-03-05"), Some(date(2024, 3, 5)));
    assert_eq!(parse_input_date(""), None);
    assert_eq!(format_input_date(Some(date(2024, 3, 5))), "2024-03-05");
    assert_eq!(format_input_date(None), "");
}
