mod cli;
mod config;

use std::time::Duration;

use clap::Parser;
use musicbrainz::{MusicBrainzClient, Paging};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        // hardcode musicbrainz=debug,mbq=debug
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or("musicbrainz=debug,mbq=debug".into()),
        )
        .init();

    let args = cli::Cli::parse();
    let config = config::load()?;

    let mut builder =
        MusicBrainzClient::builder().timeout(Duration::from_secs(config.api.timeout_secs));
    if let Some(base_url) = config.api.base_url {
        tracing::debug!("using base url {base_url}");
        builder = builder.base_url(base_url);
    }
    if let Some(user_agent) = config.api.user_agent {
        builder = builder.user_agent(user_agent);
    }
    let client = builder.build()?;
    let artists = client.artists();

    match args.command {
        cli::Command::Lookup { id, includes } => {
            let includes: Vec<&str> = includes.iter().map(String::as_str).collect();
            let artist = artists.lookup(&id, &includes).await?;
            println!("{}", serde_json::to_string_pretty(&artist)?);
        }
        cli::Command::Search {
            query,
            limit,
            offset,
        } => {
            let list = artists.search(&query, Paging { limit, offset }).await?;
            println!("{}", serde_json::to_string_pretty(&list)?);
        }
        cli::Command::Browse {
            related,
            id,
            limit,
            offset,
            includes,
        } => {
            let includes: Vec<&str> = includes.iter().map(String::as_str).collect();
            let list = artists
                .browse(&related, &id, Paging { limit, offset }, &includes)
                .await?;
            println!("{}", serde_json::to_string_pretty(&list)?);
        }
    }

    Ok(())
}
