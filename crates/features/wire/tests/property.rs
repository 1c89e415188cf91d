use chrono::{Datelike, Duration, NaiveDate, Timelike};
use proptest::prelude::*;
use rorg_wire::{WireError, format_timestamp, parse_timestamp};

/// A valid wire timestamp together with the fields it was built from.
#[derive(Debug, Clone)]
struct Sample {
    text: String,
    date: NaiveDate,
    hour: u32,
    minute: u32,
    second: u32,
    fraction: String,
    offset_minutes: i64,
}

fn sample() -> impl Strategy<Value = Sample> {
    (
        1..=9998_i32,
        1..=12_u32,
        1..=28_u32,
        0..24_u32,
        0..60_u32,
        0..60_u32,
        proptest::string::string_regex("[0-9]{1,6}").unwrap(),
        any::<bool>(),
        0..24_u32,
        0..60_u32,
    )
        .prop_map(|(year, month, day, hour, minute, second, fraction, negative, oh, om)| {
            let sign = if negative { '-' } else { '+' };
            let text = format!(
                "{year:04}-{month:02}-{day:02} {hour:02}:{minute:02}:{second:02}.{fraction}{sign}{oh:02}:{om:02}"
            );
            let magnitude = i64::from(oh * 60 + om);
            Sample {
                text,
                date: NaiveDate::from_ymd_opt(year, month, day).unwrap(),
                hour,
                minute,
                second,
                fraction,
                offset_minutes: if negative { -magnitude } else { magnitude },
            }
        })
}

fn expected_nanos(fraction: &str) -> u32 {
    format!("{fraction:0<9}").parse().unwrap()
}

proptest! {
    #[test]
    fn valid_timestamps_normalise_to_utc(s in sample()) {
        let ts = parse_timestamp(&s.text).unwrap();

        let local = s.date.and_hms_opt(s.hour, s.minute, s.second).unwrap();
        let utc = local - Duration::minutes(s.offset_minutes);

        prop_assert_eq!(ts.naive_utc().with_nanosecond(0).unwrap(), utc);
        prop_assert_eq!(ts.nanosecond(), expected_nanos(&s.fraction));
    }

    #[test]
    fn formatting_round_trips(s in sample()) {
        let ts = parse_timestamp(&s.text).unwrap();
        let text = format_timestamp(&ts);
        prop_assume!((1..=9999).contains(&ts.year()));

        prop_assert!(text.ends_with("+00:00"));
        prop_assert_eq!(parse_timestamp(&text).unwrap(), ts);
    }

    #[test]
    fn parsing_is_idempotent(s in sample()) {
        prop_assert_eq!(parse_timestamp(&s.text).unwrap(), parse_timestamp(&s.text).unwrap());
    }

    #[test]
    fn replacing_any_separator_fails(s in sample(), replacement in "[A-Za-z/_,;]") {
        for index in [4_usize, 7, 10, 13, 16, 19] {
            let mut broken = s.text.clone();
            broken.replace_range(index..=index, &replacement);
            let result = parse_timestamp(&broken);
            prop_assert!(matches!(result, Err(WireError::Format { .. })), "{}", broken);
        }
    }

    #[test]
    fn dropping_the_offset_fails(s in sample()) {
        let cut = s.text.len() - 6;
        let result = parse_timestamp(&s.text[..cut]);
        prop_assert!(matches!(result, Err(WireError::Format { .. })), "{}", &s.text[..cut]);
    }

    #[test]
    fn arbitrary_text_never_panics(text in "\\PC{0,40}") {
        let _ = parse_timestamp(&text);
    }
}
