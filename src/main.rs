mod cli;

use cinescroll::{
    catalog::{
        providers::TmdbCatalog, CatalogApi, CatalogController, CatalogQuery, DetailViewer,
        MovieSummary,
    },
    config::{self, Config},
};
use cinescroll_common::{GenreId, MovieId, SortKey};

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use serde::Serialize;
use std::sync::Arc;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "cinescroll=debug,cinescroll_common=debug,reqwest=debug".to_string()
        } else {
            "cinescroll=warn".to_string()
        }
    });

    // Logs go to stderr so --json output stays parseable
    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::List {
            sort,
            genre,
            pages,
            json,
        } => {
            let config = config::load_config_or_default(cli.config.as_deref())?;
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(list_movies(&config, sort, genre, pages, json))
        }
        Commands::Genres { json } => {
            let config = config::load_config_or_default(cli.config.as_deref())?;
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(list_genres(&config, json))
        }
        Commands::Show { id, json } => {
            let config = config::load_config_or_default(cli.config.as_deref())?;
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(show_movie(&config, &id, json))
        }
        Commands::Validate {
            config: config_path,
        } => {
            let path = config_path.or(cli.config);
            validate_config(path.as_deref())
        }
        Commands::Version => {
            println!("cinescroll {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn build_catalog(config: &Config) -> Result<Arc<dyn CatalogApi>> {
    if !config.api.has_api_key() {
        anyhow::bail!(
            "No API key configured; set api.api_key or {}",
            config::API_KEY_ENV
        );
    }
    let catalog = TmdbCatalog::new(&config.api)?;
    Ok(Arc::new(catalog))
}

#[derive(Serialize)]
struct ListedMovie<'a> {
    #[serde(flatten)]
    movie: &'a MovieSummary,
    image_url: Option<String>,
}

#[derive(Serialize)]
struct ListOutput<'a> {
    query: &'a CatalogQuery,
    page: u32,
    total_pages: Option<u32>,
    exhausted: bool,
    results: Vec<ListedMovie<'a>>,
}

async fn list_movies(
    config: &Config,
    sort: Option<SortKey>,
    genre: Option<GenreId>,
    pages: Option<u32>,
    json: bool,
) -> Result<()> {
    let api = build_catalog(config)?;
    let query = CatalogQuery::new(sort.unwrap_or(config.browse.sort))
        .with_genre(genre.or_else(|| config.browse.genre.clone()));
    let pages = pages.unwrap_or(config.browse.pages).max(1);

    let mut controller = CatalogController::new(api);
    controller.set_query(query).await;
    if let Some(err) = controller.error() {
        anyhow::bail!("{err}");
    }

    for _ in 1..pages {
        if controller.load_more().await.is_none() {
            break;
        }
        if let Some(err) = controller.error() {
            anyhow::bail!("{err}");
        }
    }

    tracing::debug!(?controller, "listing complete");

    if json {
        let output = ListOutput {
            query: controller.query(),
            page: controller.page(),
            total_pages: controller.total_pages(),
            exhausted: controller.is_exhausted(),
            results: controller
                .results()
                .iter()
                .map(|movie| ListedMovie {
                    movie,
                    image_url: movie.image_url(&config.api.image_base_url),
                })
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    for movie in controller.results() {
        let date = movie
            .date
            .map(|d| d.to_string())
            .unwrap_or_else(|| "----------".to_string());
        let title = if movie.title.is_empty() {
            "(untitled)"
        } else {
            movie.title.as_str()
        };
        println!("{:>8}  {:>4.1}  {}  {}", movie.id, movie.rating, date, title);
    }
    println!(
        "\n{} movies, {} page(s) loaded{}",
        controller.results().len(),
        controller.page(),
        if controller.is_exhausted() {
            ", end of catalog"
        } else {
            ""
        }
    );

    Ok(())
}

async fn list_genres(config: &Config, json: bool) -> Result<()> {
    let api = build_catalog(config)?;
    let mut controller = CatalogController::new(api);
    let genres = controller.load_genres().await?;

    if json {
        println!("{}", serde_json::to_string_pretty(genres)?);
    } else {
        for genre in genres {
            println!("{:>6}  {}", genre.id, genre.name);
        }
    }
    Ok(())
}

async fn show_movie(config: &Config, id: &MovieId, json: bool) -> Result<()> {
    let api = build_catalog(config)?;
    let view = DetailViewer::new(api)
        .show(id)
        .await
        .with_context(|| format!("Failed to load movie {id}"))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    let detail = &view.detail;
    println!("{}", detail.title.as_deref().unwrap_or("(untitled)"));
    if let Some(ref poster) = detail.poster_path {
        println!(
            "Poster: {}{}",
            config.api.image_base_url.trim_end_matches('/'),
            poster
        );
    }
    if let Some(ref overview) = detail.overview {
        println!("\n{}\n", overview);
    }
    if let Some(date) = detail.release_date {
        println!("Released: {}", date);
    }
    if let Some(runtime) = detail.runtime_minutes {
        println!("Runtime: {} min", runtime);
    }
    if !detail.countries.is_empty() {
        println!("Countries: {}", detail.countries.join(", "));
    }
    if let Some(budget) = detail.budget {
        println!("Budget: ${}", group_thousands(budget));
    }
    if !detail.genres.is_empty() {
        println!("Genres: {}", detail.genres.join(", "));
    }
    match view.trailer {
        Some(ref trailer) => println!("Trailer: {}", trailer.url),
        None => println!("Trailer: none"),
    }

    Ok(())
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

fn validate_config(path: Option<&std::path::Path>) -> Result<()> {
    match path {
        Some(p) => {
            println!("Validating config: {:?}", p);
            let config = config::load_config(p)?;
            println!("✓ Configuration is valid");
            println!("  API: {}", config.api.base_url);
            println!("  Language: {}", config.api.language);
            println!("  API key set: {}", config.api.has_api_key());
            println!("  Default sort: {}", config.browse.sort);
            println!("  Default pages: {}", config.browse.pages);
        }
        None => {
            println!("No config file specified, using defaults");
            let config = Config::default();
            println!("Default config:");
            println!("  API: {}", config.api.base_url);
        }
    }

    Ok(())
}
