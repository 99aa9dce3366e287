use chrono::Weekday;
use datetime_helpers::{DateError, DayOfWeek};

#[test]
fn test_index_mapping() {
    for (index, day) in DayOfWeek::ALL.into_iter().enumerate() {
        assert_eq!(day.index() as usize, index);
        assert_eq!(DayOfWeek::from_index(index as u8), Some(day));
    }
    assert_eq!(DayOfWeek::Monday.index(), 0);
    assert_eq!(DayOfWeek::Sunday.index(), 6);
    assert_eq!(DayOfWeek::from_index(7), None);
}

#[test]
fn test_only_saturday_and_sunday_are_weekend() {
    let weekend: Vec<DayOfWeek> = DayOfWeek::ALL.into_iter().filter(|d| d.is_weekend()).collect();
    assert_eq!(weekend, vec![DayOfWeek::Saturday, DayOfWeek::Sunday]);
    assert!(DayOfWeek::Friday.is_weekday());
}

#[test]
fn test_chrono_weekday_conversion() {
    assert_eq!(DayOfWeek::from(Weekday::Mon), DayOfWeek::Monday);
    assert_eq!(DayOfWeek::from(Weekday::Sun), DayOfWeek::Sunday);
    for day in DayOfWeek::ALL {
        let weekday = Weekday::from(day);
        assert_eq!(weekday.num_days_from_monday() as u8, day.index());
        assert_eq!(DayOfWeek::from(weekday), day);
    }
}

#[test]
fn test_display_and_parse() {
    assert_eq!(DayOfWeek::Wednesday.to_string(), "Wednesday");
    assert_eq!("thursday".parse::<DayOfWeek>().unwrap(), DayOfWeek::Thursday);
    assert_eq!(" Sunday ".parse::<DayOfWeek>().unwrap(), DayOfWeek::Sunday);
    assert!(matches!("Sun".parse::<DayOfWeek>(), Err(DateError::Format { .. })));
}

#[test]
fn test_serializes_as_name() {
    assert_eq!(serde_json::to_string(&DayOfWeek::Friday).unwrap(), "\"Friday\"");
    let day: DayOfWeek = serde_json::from_str("\"Tuesday\"").unwrap();
    assert_eq!(day, DayOfWeek::Tuesday);
}
