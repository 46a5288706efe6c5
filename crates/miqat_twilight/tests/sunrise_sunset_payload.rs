//! Decoding of sunrise-sunset.org payloads into local boundaries.

use chrono::{FixedOffset, Timelike};
use miqat_twilight::{TwilightError, parse_response};

/// Mecca, 2024-03-20, as returned with `formatted=0`.
const MECCA_EQUINOX: &str = r#"{
  "results": {
    "sunrise": "2024-03-20T03:25:54+00:00",
    "sunset": "2024-03-20T15:32:36+00:00",
    "solar_noon": "2024-03-20T09:29:15+00:00",
    "day_length": 43602,
    "civil_twilight_begin": "2024-03-20T03:04:15+00:00",
    "civil_twilight_end": "2024-03-20T15:54:15+00:00",
    "nautical_twilight_begin": "2024-03-20T02:39:12+00:00",
    "nautical_twilight_end": "2024-03-20T16:19:18+00:00",
    "astronomical_twilight_begin": "2024-03-20T02:14:06+00:00",
    "astronomical_twilight_end": "2024-03-20T16:44:24+00:00"
  },
  "status": "OK",
  "tzid": "UTC"
}"#;

fn ast() -> FixedOffset {
    FixedOffset::east_opt(3 * 3600).unwrap()
}

#[test]
fn converts_to_local_offset() {
    let b = parse_response(MECCA_EQUINOX, ast()).unwrap();
    assert_eq!(b.sunrise.offset(), &ast());
    assert_eq!((b.sunrise.hour(), b.sunrise.minute()), (6, 25));
    assert_eq!((b.solar_noon.hour(), b.solar_noon.minute()), (12, 29));
    assert_eq!((b.sunset.hour(), b.sunset.minute()), (18, 32));
    assert_eq!(
        (b.astronomical_dawn.hour(), b.astronomical_dawn.minute()),
        (5, 14)
    );
    assert_eq!(
        (b.astronomical_dusk.hour(), b.astronomical_dusk.minute()),
        (19, 44)
    );
}

#[test]
fn parsed_boundaries_are_monotonic() {
    let b = parse_response(MECCA_EQUINOX, ast()).unwrap();
    assert!(b.is_monotonic());
}

#[test]
fn missing_solar_noon_uses_midpoint() {
    let body = MECCA_EQUINOX.replace(
        "\"solar_noon\": \"2024-03-20T09:29:15+00:00\",",
        "",
    );
    let b = parse_response(&body, ast()).unwrap();
    let expected = b.sunrise + (b.sunset - b.sunrise) / 2;
    assert_eq!(b.solar_noon, expected);
    assert_eq!(b.solar_noon.hour(), 12);
}

#[test]
fn non_ok_status_is_unavailable() {
    let body = r#"{"results": "", "status": "INVALID_REQUEST"}"#;
    let err = parse_response(body, ast()).unwrap_err();
    assert_eq!(err, TwilightError::Status("INVALID_REQUEST".to_owned()));
}

#[test]
fn epoch_sentinel_means_no_event() {
    let body = MECCA_EQUINOX.replace(
        "\"astronomical_twilight_begin\": \"2024-03-20T02:14:06+00:00\"",
        "\"astronomical_twilight_begin\": \"1970-01-01T00:00:01+00:00\"",
    );
    let err = parse_response(&body, ast()).unwrap_err();
    assert_eq!(err, TwilightError::NoEvent("astronomical_twilight_begin"));
}

#[test]
fn missing_field_is_parse_error() {
    let body = MECCA_EQUINOX.replace("\"sunset\"", "\"sun_set\"");
    let err = parse_response(&body, ast()).unwrap_err();
    assert!(matches!(err, TwilightError::Parse(_)));
}
