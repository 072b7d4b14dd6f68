use anyhow::{Context, Result};
use clap::Parser;
use meetup_importer::{
    ImportPipeline, ImporterConfig, JsonMeetupRepository, MeetupApiClient,
    TomlUserGroupRepository,
};
use reqwest::Client;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "import-meetups")]
#[command(about = "Import upcoming meetups of user groups from meetup.com")]
#[command(
    long_about = "Fetches the events of every user group on a continent from the meetup.com API,\n\
    keeps upcoming events that have a venue and writes them to a JSON file.\n\n\
    Settings not given on the command line are read from the environment (and a .env file)."
)]
struct Cli {
    /// meetup.com API key, sent as the `key` query parameter.
    #[arg(long, env = "MEETUP_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// TOML file listing the known user groups.
    #[arg(short, long, value_name = "FILE", env = "USER_GROUPS_PATH")]
    groups: Option<PathBuf>,

    /// JSON file the imported meetups are written to.
    #[arg(short, long, value_name = "FILE", env = "MEETUPS_OUTPUT_PATH")]
    output: Option<PathBuf>,

    /// Only import groups tagged with this continent.
    #[arg(short, long, env = "IMPORT_CONTINENT")]
    continent: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "meetup_importer=info,import_meetups=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let config = match load_config(cli) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid configuration: {:#}", e);
            return Err(e);
        }
    };

    let user_groups = TomlUserGroupRepository::new(&config.user_groups_path);
    let meetups = JsonMeetupRepository::new(&config.meetups_output_path);
    tracing::info!(
        "Starting meetup import (groups: {}, output: {})",
        user_groups.path().display(),
        meetups.path().display()
    );

    let pipeline = ImportPipeline::new(
        user_groups,
        MeetupApiClient::with_client(
            Client::new(),
            &config.meetup_api_base_url,
            &config.meetup_api_key,
        ),
        meetups,
        &config.continent,
    );

    let now = chrono::Utc::now();
    let summary = match pipeline.run(now).await {
        Ok(summary) => summary,
        Err(e) => {
            tracing::error!("Meetup import failed, nothing was saved: {}", e);
            return Err(e).context("Meetup import failed");
        }
    };

    tracing::info!(
        "Imported {} meetups from {} groups ({} events fetched)",
        summary.meetups_saved,
        summary.groups_processed,
        summary.events_fetched
    );
    Ok(())
}

fn load_config(cli: Cli) -> Result<ImporterConfig> {
    let mut config = ImporterConfig::from_env_with_api_key(cli.api_key.clone())
        .context("Failed to load configuration")?;
    apply_overrides(&mut config, cli);
    Ok(config)
}

fn apply_overrides(config: &mut ImporterConfig, cli: Cli) {
    if let Some(api_key) = cli.api_key {
        config.meetup_api_key = api_key;
    }
    if let Some(groups) = cli.groups {
        config.user_groups_path = groups;
    }
    if let Some(output) = cli.output {
        config.meetups_output_path = output;
    }
    if let Some(continent) = cli.continent {
        config.continent = continent;
    }
}
