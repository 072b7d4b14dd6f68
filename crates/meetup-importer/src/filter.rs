//! Start-time normalization and the include/exclude rule for fetched events.

use crate::error::{ImportError, ImportResult};
use crate::meetup_client::RawEvent;
use chrono::{DateTime, Utc};

/// Parse the start of an event from its `time` field.
pub fn event_start_time(event: &RawEvent) -> ImportResult<DateTime<Utc>> {
    normalize_event_time(&event.time.to_text())
}

/// Turn a raw `time` value into a UTC instant.
///
/// Upstream data quirk: the value carries 3 extra trailing characters. They
/// are cut off and the remainder is read as epoch seconds. Unconfirmed
/// against live API data, keep as is.
pub fn normalize_event_time(raw: &str) -> ImportResult<DateTime<Utc>> {
    let text = raw.trim();
    let seconds = text
        .get(..text.len().saturating_sub(3))
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ImportError::InvalidTimestamp(raw.to_string()))?
        .parse::<i64>()
        .map_err(|_| ImportError::InvalidTimestamp(raw.to_string()))?;

    DateTime::from_timestamp(seconds, 0).ok_or_else(|| ImportError::InvalidTimestamp(raw.to_string()))
}

/// Decide whether an event becomes a meetup.
///
/// Past events (including one starting exactly at `now`) and events without
/// a venue are dropped.
pub fn should_include(event: &RawEvent, start_time: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    if start_time <= now {
        tracing::debug!(
            "Skipping past event {:?} ({})",
            event.name.as_deref().unwrap_or_default(),
            start_time
        );
        return false;
    }

    // draft event, not ready yet
    if event.venue.is_none() {
        tracing::debug!(
            "Skipping event {:?} without venue",
            event.name.as_deref().unwrap_or_default()
        );
        return false;
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meetup_client::{EventTime, RawVenue};
    use chrono::{Duration, TimeZone};

    fn event(time: EventTime, with_venue: bool) -> RawEvent {
        RawEvent {
            name: Some("Test Event".to_string()),
            time,
            group: None,
            venue: with_venue.then(|| RawVenue {
                city: Some("Brno".to_string()),
                localized_country_name: Some("Czech Republic".to_string()),
                lon: Some(16.6),
                lat: Some(49.2),
            }),
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_normalize_drops_last_three_characters() {
        let parsed = normalize_event_time("1735732800000").unwrap();
        assert_eq!(parsed, now());

        // non-digit suffix is cut before parsing
        let parsed = normalize_event_time("1735732800abc").unwrap();
        assert_eq!(parsed, now());
    }

    #[test]
    fn test_normalize_rejects_short_or_garbage_values() {
        for raw in ["", "123", "abc000", "12x45000"] {
            assert!(
                matches!(normalize_event_time(raw), Err(ImportError::InvalidTimestamp(_))),
                "expected {:?} to be rejected",
                raw
            );
        }
    }

    #[test]
    fn test_event_start_time_from_number_and_text() {
        let from_number = event_start_time(&event(EventTime::Number(1735732800000), true)).unwrap();
        let from_text =
            event_start_time(&event(EventTime::Text("1735732800000".to_string()), true)).unwrap();
        assert_eq!(from_number, now());
        assert_eq!(from_text, now());
    }

    #[test]
    fn test_future_event_with_venue_included() {
        let e = event(EventTime::Number(0), true);
        assert!(should_include(&e, now() + Duration::hours(1), now()));
    }

    #[test]
    fn test_event_starting_now_excluded() {
        let e = event(EventTime::Number(0), true);
        assert!(!should_include(&e, now(), now()));
    }

    #[test]
    fn test_past_event_excluded() {
        let e = event(EventTime::Number(0), true);
        assert!(!should_include(&e, now() - Duration::days(3), now()));
    }

    #[test]
    fn test_event_without_venue_excluded() {
        let e = event(EventTime::Number(0), false);
        assert!(!should_include(&e, now() + Duration::days(30), now()));
        assert!(!should_include(&e, now() - Duration::days(30), now()));
    }
}
