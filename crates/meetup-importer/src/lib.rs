//! Imports upcoming meetups of user groups from the meetup.com events API.
//!
//! A run loads the groups of one continent, fetches the first page of events
//! of every group, keeps upcoming events that have a venue and writes the
//! resulting meetups to a file in a single call.

pub mod config;
pub mod error;
pub mod factory;
pub mod filter;
pub mod group_url;
pub mod meetup_client;
pub mod pipeline;
pub mod repository;

pub use config::ImporterConfig;
pub use error::{ImportError, ImportResult};
pub use meetup_client::{EventSource, MeetupApiClient, RawEvent};
pub use pipeline::{ImportPipeline, ImportSummary};
pub use repository::{
    JsonMeetupRepository, MeetupRepository, TomlUserGroupRepository, UserGroupRepository,
};
