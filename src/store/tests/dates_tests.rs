//! Tests for date parsing, rendering, and calendar arithmetic

use super::{create_temp_csv, ts};
use crate::store::dates::{
    day_of_week, format_timestamp, sentinel, DateFormatList, BUILTIN_FORMATS,
};
use crate::store::TimeSeriesStore;

#[test]
fn builtin_formats_cover_the_three_shapes() {
    let formats = DateFormatList::new();

    assert_eq!(formats.try_parse("2020-03-14"), Some(ts(2020, 3, 14, 0, 0, 0)));
    assert_eq!(
        formats.try_parse("2020-03-14 08:30"),
        Some(ts(2020, 3, 14, 8, 30, 0))
    );
    assert_eq!(
        formats.try_parse("2020-03-14 08:30:59"),
        Some(ts(2020, 3, 14, 8, 30, 59))
    );
}

#[test]
fn unmatched_strings_parse_to_the_sentinel() {
    let formats = DateFormatList::new();

    assert_eq!(formats.try_parse("14/03/2020"), None);
    assert_eq!(formats.try_parse(""), None);
    assert_eq!(formats.parse("garbage"), sentinel());
}

#[test]
fn registered_patterns_extend_the_priority_list() {
    let mut formats = DateFormatList::new();
    assert_eq!(formats.patterns().len(), BUILTIN_FORMATS.len());

    formats.push("%d/%m/%Y");
    assert_eq!(formats.try_parse("14/03/2020"), Some(ts(2020, 3, 14, 0, 0, 0)));

    formats.extend(["%Y%m%d", "%H:%M on %d.%m.%Y"]);
    assert_eq!(formats.try_parse("20200314"), Some(ts(2020, 3, 14, 0, 0, 0)));
    assert_eq!(
        formats.try_parse("08:30 on 14.03.2020"),
        Some(ts(2020, 3, 14, 8, 30, 0))
    );
}

#[test]
fn formats_added_to_a_store_affect_later_ingestion() {
    let file = create_temp_csv("Date,Open\n14/03/2020,5\n");
    let mut store: TimeSeriesStore<f64> = TimeSeriesStore::new();
    store.add_date_format("%d/%m/%Y");

    let stats = store.ingest("X", file.path()).unwrap();

    assert_eq!(stats.sentinel_rows, 0);
    assert_eq!(store.get(ts(2020, 3, 14, 0, 0, 0), "X", "Open"), 5.0);
}

#[test]
fn format_timestamp_is_iso_8601_extended() {
    assert_eq!(format_timestamp(ts(2020, 3, 14, 8, 30, 0)), "2020-03-14T08:30:00");
    assert_eq!(format_timestamp(ts(1999, 12, 31, 23, 59, 59)), "1999-12-31T23:59:59");
    assert_eq!(format_timestamp(sentinel()), "1970-01-01T00:00:00");
}

#[test]
fn rendered_timestamps_reparse_to_equal_values() {
    let mut formats = DateFormatList::new();
    formats.push("%Y-%m-%dT%H:%M:%S");

    for timestamp in [
        ts(2020, 3, 14, 8, 30, 0),
        ts(2024, 2, 29, 0, 0, 0),
        ts(1987, 7, 1, 12, 0, 1),
    ] {
        let rendered = format_timestamp(timestamp);
        assert_eq!(formats.try_parse(&rendered), Some(timestamp));
    }
}

#[test]
fn day_of_week_matches_reference_dates() {
    // 0 = Sunday .. 6 = Saturday
    assert_eq!(day_of_week(ts(2000, 1, 1, 0, 0, 0)), 6); // Saturday
    assert_eq!(day_of_week(ts(2024, 2, 29, 12, 0, 0)), 4); // Thursday
    assert_eq!(day_of_week(ts(1970, 1, 1, 0, 0, 0)), 4); // Thursday
    assert_eq!(day_of_week(ts(2020, 3, 15, 8, 30, 0)), 0); // Sunday
    assert_eq!(day_of_week(ts(1900, 1, 1, 0, 0, 0)), 1); // Monday, non-leap century
}

#[test]
fn day_of_week_ignores_the_time_of_day() {
    assert_eq!(
        day_of_week(ts(2024, 2, 29, 0, 0, 0)),
        day_of_week(ts(2024, 2, 29, 23, 59, 59))
    );
}
