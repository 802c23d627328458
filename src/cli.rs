use cinescroll_common::{GenreId, MovieId, SortKey};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cinescroll")]
#[command(author, version, about = "Browse a remote movie catalog from the terminal")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List movies, loading pages the way infinite scroll would
    List {
        /// Sort order: popularity, rating, release-date, title
        #[arg(short, long)]
        sort: Option<SortKey>,

        /// Only show movies in this genre (see `genres`)
        #[arg(short, long)]
        genre: Option<GenreId>,

        /// Number of pages to load
        #[arg(short, long)]
        pages: Option<u32>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the genre taxonomy
    Genres {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show details and the trailer link for a movie
    Show {
        /// Movie id
        #[arg(required = true)]
        id: MovieId,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate configuration file
    Validate {
        /// Config file to validate (uses default if not specified)
        config: Option<PathBuf>,
    },

    /// Display version information
    Version,
}
