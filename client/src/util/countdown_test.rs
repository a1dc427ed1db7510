use super::*;

const NOW: i64 = 1_760_000_000_000;

// =============================================================
// Remaining
// =============================================================

#[test]
fn remaining_rejects_negative_distance() {
    assert_eq!(Remaining::from_distance(-1), None);
}

#[test]
fn remaining_zero_distance_is_all_zero() {
    assert_eq!(Remaining::from_distance(0), Some(Remaining::default()));
}

#[test]
fn remaining_floors_each_unit() {
    let distance = 2 * MS_PER_DAY + 5 * MS_PER_HOUR + 7 * MS_PER_MINUTE + 9 * MS_PER_SECOND + 999;
    let remaining = Remaining::from_distance(distance).unwrap();
    assert_eq!(remaining, Remaining { days: 2, hours: 5, minutes: 7, seconds: 9 });
}

// =============================================================
// Compact
// =============================================================

#[test]
fn compact_ninety_seconds_shows_one_minute() {
    assert_eq!(format_remaining(NOW + 90_000, NOW, CountdownStyle::Compact), "1m");
}

#[test]
fn compact_ninety_seconds_after_half_a_minute_elapsed() {
    assert_eq!(format_remaining(NOW + 90_000, NOW + 31_000, CountdownStyle::Compact), "0m");
}

#[test]
fn compact_shows_hours_and_minutes_below_a_day() {
    let end = NOW + 5 * MS_PER_HOUR + 12 * MS_PER_MINUTE;
    assert_eq!(format_remaining(end, NOW, CountdownStyle::Compact), "5h 12m");
}

#[test]
fn compact_shows_days_and_hours() {
    let end = NOW + 2 * MS_PER_DAY + 3 * MS_PER_HOUR + 59 * MS_PER_MINUTE;
    assert_eq!(format_remaining(end, NOW, CountdownStyle::Compact), "2d 3h");
}

#[test]
fn past_end_time_is_ended() {
    assert_eq!(format_remaining(NOW - 1, NOW, CountdownStyle::Compact), ENDED);
    assert_eq!(format_remaining(NOW - MS_PER_DAY, NOW, CountdownStyle::Detailed), ENDED);
}

#[test]
fn ticker_stops_exactly_when_label_turns_ended() {
    let end = NOW + 2 * MS_PER_SECOND;
    for now in [NOW, NOW + MS_PER_SECOND, end] {
        assert!(!has_ended(end, now));
        assert_ne!(format_remaining(end, now, CountdownStyle::Detailed), ENDED);
    }
    for now in [end + 1, end + MS_PER_SECOND, end + MS_PER_DAY] {
        assert!(has_ended(end, now));
        assert_eq!(format_remaining(end, now, CountdownStyle::Compact), ENDED);
        assert_eq!(format_remaining(end, now, CountdownStyle::Detailed), ENDED);
    }
}

#[test]
fn exactly_at_end_time_is_zero_not_ended() {
    assert_eq!(format_remaining(NOW, NOW, CountdownStyle::Compact), "0m");
}

// =============================================================
// Detailed
// =============================================================

#[test]
fn detailed_below_an_hour_includes_seconds() {
    assert_eq!(format_remaining(NOW + 90_000, NOW, CountdownStyle::Detailed), "1m 30s");
}

#[test]
fn detailed_below_a_day_includes_seconds() {
    let end = NOW + 5 * MS_PER_HOUR + 4 * MS_PER_MINUTE + 3 * MS_PER_SECOND;
    assert_eq!(format_remaining(end, NOW, CountdownStyle::Detailed), "5h 4m 3s");
}

#[test]
fn detailed_with_days_drops_seconds() {
    let end = NOW + MS_PER_DAY + 2 * MS_PER_HOUR + 3 * MS_PER_MINUTE + 4 * MS_PER_SECOND;
    assert_eq!(format_remaining(end, NOW, CountdownStyle::Detailed), "1d 2h 3m");
}

#[test]
fn now_ms_is_after_2020() {
    assert!(now_ms() > 1_577_836_800_000);
}

// =============================================================
// Age
// =============================================================

#[test]
fn age_picks_largest_whole_unit() {
    assert_eq!(Age::since(NOW - 30 * MS_PER_MINUTE, NOW), Age::Minutes(30));
    assert_eq!(Age::since(NOW - 2 * MS_PER_HOUR - 59 * MS_PER_MINUTE, NOW), Age::Hours(2));
    assert_eq!(Age::since(NOW - 5 * MS_PER_DAY, NOW), Age::Days(5));
}

#[test]
fn age_boundaries_roll_over_to_next_unit() {
    assert_eq!(Age::since(NOW - MS_PER_HOUR + 1, NOW), Age::Minutes(59));
    assert_eq!(Age::since(NOW - MS_PER_HOUR, NOW), Age::Hours(1));
    assert_eq!(Age::since(NOW - MS_PER_DAY, NOW), Age::Days(1));
}

#[test]
fn age_of_future_timestamp_is_zero_minutes() {
    let age = Age::since(NOW + MS_PER_DAY, NOW);
    assert_eq!(age, Age::Minutes(0));
    assert_eq!(age.count(), 0);
    assert_eq!(age.label_key(), "time.minutesAgo");
}
