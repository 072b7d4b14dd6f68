use crate::error::{ImportError, ImportResult};
use crate::meetup_client::RawEvent;
use chrono::{DateTime, Utc};
use shared_types::{Location, Meetup};

/// Build a meetup from an event that already passed the filter.
pub fn build_meetup(event: &RawEvent, start_time: DateTime<Utc>) -> ImportResult<Meetup> {
    let venue = event
        .venue
        .as_ref()
        .ok_or_else(|| ImportError::missing_field("venue"))?;

    let location = Location::new(
        required(venue.city.clone(), "venue.city")?,
        required(venue.localized_country_name.clone(), "venue.localized_country_name")?,
        required(venue.lon, "venue.lon")?,
        required(venue.lat, "venue.lat")?,
    );

    let group_name = event
        .group
        .as_ref()
        .and_then(|group| group.name.clone());

    Ok(Meetup::new(
        required(event.name.clone(), "name")?,
        required(group_name, "group.name")?,
        start_time,
        location,
    ))
}

fn required<T>(value: Option<T>, field: &str) -> ImportResult<T> {
    value.ok_or_else(|| ImportError::missing_field(field))
}
