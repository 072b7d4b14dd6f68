//! The import run: groups → events → meetups → file.
//!
//! Groups are processed one after another. The first error aborts the run
//! before anything is handed to the meetup repository.

use crate::error::ImportResult;
use crate::factory::build_meetup;
use crate::filter::{event_start_time, should_include};
use crate::group_url::resolve_group_url_name;
use crate::meetup_client::EventSource;
use crate::repository::{MeetupRepository, UserGroupRepository};
use chrono::{DateTime, Utc};
use shared_types::Meetup;

/// Counters reported after a successful run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub groups_processed: usize,
    pub events_fetched: usize,
    pub meetups_saved: usize,
}

pub struct ImportPipeline<G, E, M> {
    user_groups: G,
    events: E,
    meetups: M,
    continent: String,
}

impl<G, E, M> ImportPipeline<G, E, M>
where
    G: UserGroupRepository,
    E: EventSource,
    M: MeetupRepository,
{
    pub fn new(user_groups: G, events: E, meetups: M, continent: impl Into<String>) -> Self {
        Self {
            user_groups,
            events,
            meetups,
            continent: continent.into(),
        }
    }

    /// Import upcoming meetups of every group on the configured continent.
    ///
    /// `now` is the cutoff for the whole run; events starting at or before it
    /// are dropped.
    pub async fn run(&self, now: DateTime<Utc>) -> ImportResult<ImportSummary> {
        let groups = self.user_groups.fetch_by_continent(&self.continent).await?;
        tracing::info!("Importing meetups for {} groups on {}", groups.len(), self.continent);

        let mut summary = ImportSummary::default();
        let mut meetups: Vec<Meetup> = Vec::new();

        for group in &groups {
            let group_url_name = resolve_group_url_name(&group.meetup_com_url)?;
            let events = self.events.fetch_events(&group_url_name).await?;
            summary.events_fetched += events.len();

            let before = meetups.len();
            for event in &events {
                let start_time = event_start_time(event)?;
                if !should_include(event, start_time, now) {
                    continue;
                }
                meetups.push(build_meetup(event, start_time)?);
            }

            tracing::info!(
                "Group {}: {} events, {} upcoming",
                group.name,
                events.len(),
                meetups.len() - before
            );
            summary.groups_processed += 1;
        }

        self.meetups.save_to_file(&meetups).await?;
        summary.meetups_saved = meetups.len();

        Ok(summary)
    }
}
