use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "mbq", about = "Query the MusicBrainz artist database", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Look up a single artist by its MBID.
    Lookup {
        id: String,

        /// Related sub-entities to embed in the response, e.g. "aliases".
        #[arg(long = "inc", value_name = "ENTITY")]
        includes: Vec<String>,
    },

    /// Search artists matching a free-text query.
    Search {
        query: String,

        #[arg(long, default_value_t = 25)]
        limit: u32,

        #[arg(long, default_value_t = 0)]
        offset: u32,
    },

    /// List artists directly linked to another entity.
    Browse {
        /// Name of the related entity, e.g. "label" or "release".
        related: String,

        /// Id of the related entity.
        id: String,

        #[arg(long, default_value_t = 25)]
        limit: u32,

        #[arg(long, default_value_t = 0)]
        offset: u32,

        #[arg(long = "inc", value_name = "ENTITY")]
        includes: Vec<String>,
    },
}
