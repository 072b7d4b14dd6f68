//! Domain types shared by the meetup importer.
//!
//! `UserGroup` is the read-only input of an import run, `Meetup` (with its
//! `Location`) is the value produced for every upcoming event that survives
//! filtering.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A meetup.com community, as listed in the user group registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserGroup {
    pub name: String,
    pub meetup_com_url: String,
    #[serde(default)]
    pub country: Option<String>,
    pub continent: String,
}

impl UserGroup {
    /// True if the group is tagged with `continent` (case-insensitive).
    pub fn is_on_continent(&self, continent: &str) -> bool {
        self.continent.eq_ignore_ascii_case(continent.trim())
    }
}

/// Where a meetup takes place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    city: String,
    country: String,
    longitude: f64,
    latitude: f64,
}

impl Location {
    pub fn new(
        city: impl Into<String>,
        country: impl Into<String>,
        longitude: f64,
        latitude: f64,
    ) -> Self {
        Self {
            city: city.into(),
            country: country.into(),
            longitude,
            latitude,
        }
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }
}

/// An upcoming, published event of a user group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meetup {
    name: String,
    user_group_name: String,
    start_date_time: DateTime<Utc>,
    location: Location,
}

impl Meetup {
    pub fn new(
        name: impl Into<String>,
        user_group_name: impl Into<String>,
        start_date_time: DateTime<Utc>,
        location: Location,
    ) -> Self {
        Self {
            name: name.into(),
            user_group_name: user_group_name.into(),
            start_date_time,
            location,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn user_group_name(&self) -> &str {
        &self.user_group_name
    }

    pub fn start_date_time(&self) -> DateTime<Utc> {
        self.start_date_time
    }

    pub fn location(&self) -> &Location {
        &self.location
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_meetup() -> Meetup {
        Meetup::new(
            "Rust Night",
            "Rust Prague",
            Utc.with_ymd_and_hms(2030, 5, 1, 18, 30, 0).unwrap(),
            Location::new("Prague", "Czech Republic", 14.42, 50.08),
        )
    }

    #[test]
    fn test_continent_match_ignores_case() {
        let group = UserGroup {
            name: "PHP Berlin".to_string(),
            meetup_com_url: "https://www.meetup.com/phpugb/".to_string(),
            country: Some("Germany".to_string()),
            continent: "Europe".to_string(),
        };

        assert!(group.is_on_continent("europe"));
        assert!(group.is_on_continent(" Europe "));
        assert!(!group.is_on_continent("America"));
    }

    #[test]
    fn test_meetup_accessors() {
        let meetup = sample_meetup();
        assert_eq!(meetup.name(), "Rust Night");
        assert_eq!(meetup.user_group_name(), "Rust Prague");
        assert_eq!(meetup.location().city(), "Prague");
        assert_eq!(meetup.location().country(), "Czech Republic");
        assert_eq!(meetup.location().longitude(), 14.42);
        assert_eq!(meetup.location().latitude(), 50.08);
    }

    #[test]
    fn test_meetup_serde() {
        let meetup = sample_meetup();

        let json = serde_json::to_value(&meetup).unwrap();
        assert_eq!(json["name"], "Rust Night");
        assert_eq!(json["start_date_time"], "2030-05-01T18:30:00Z");
        assert_eq!(json["location"]["city"], "Prague");

        let parsed: Meetup = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, meetup);
    }
}
