//! Repository traits at both ends of an import run.
//!
//! The group registry is read from a TOML file and the imported meetups are
//! written as a JSON document. Tests plug in their own implementations.

use crate::error::ImportResult;
use serde::{Deserialize, Serialize};
use shared_types::{Meetup, UserGroup};
use std::path::{Path, PathBuf};

/// Source of known user groups.
#[allow(async_fn_in_trait)]
pub trait UserGroupRepository {
    /// List the groups tagged with `continent`, in registry order.
    async fn fetch_by_continent(&self, continent: &str) -> ImportResult<Vec<UserGroup>>;
}

/// Sink for the result of an import run.
#[allow(async_fn_in_trait)]
pub trait MeetupRepository {
    /// Persist the complete list of meetups, replacing any previous run.
    async fn save_to_file(&self, meetups: &[Meetup]) -> ImportResult<()>;
}

#[derive(Debug, Deserialize)]
struct UserGroupFile {
    #[serde(default)]
    groups: Vec<UserGroup>,
}

/// Group registry stored as `[[groups]]` tables in a TOML file
pub struct TomlUserGroupRepository {
    path: PathBuf,
}

impl TomlUserGroupRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl UserGroupRepository for TomlUserGroupRepository {
    async fn fetch_by_continent(&self, continent: &str) -> ImportResult<Vec<UserGroup>> {
        let content = tokio::fs::read_to_string(&self.path).await?;
        let file: UserGroupFile = toml::from_str(&content)?;

        let groups: Vec<UserGroup> = file
            .groups
            .into_iter()
            .filter(|group| group.is_on_continent(continent))
            .collect();

        tracing::debug!(
            "Loaded {} groups on {} from {}",
            groups.len(),
            continent,
            self.path.display()
        );
        Ok(groups)
    }
}

#[derive(Debug, Serialize)]
struct MeetupFile<'a> {
    meetups: &'a [Meetup],
}

/// Writes meetups as pretty-printed JSON
pub struct JsonMeetupRepository {
    path: PathBuf,
}

impl JsonMeetupRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl MeetupRepository for JsonMeetupRepository {
    async fn save_to_file(&self, meetups: &[Meetup]) -> ImportResult<()> {
        let json = serde_json::to_string_pretty(&MeetupFile { meetups })?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&self.path, json).await?;

        tracing::info!("Saved {} meetups to {}", meetups.len(), self.path.display());
        Ok(())
    }
}
