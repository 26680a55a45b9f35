use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;

use ax_core::{ArticleStore, Session, Stats, StatsScope};
use ax_data::{export, load_or_sample, SampleGenerator};
use ax_web::{create_app, AppState};

const DEFAULT_SAMPLE_COUNT: usize = 500;

#[derive(Parser, Debug)]
#[command(author, version, about = "arXiv collection browser", long_about = None)]
struct Cli {
    /// Dataset file to load; sample data is generated if it cannot be read.
    #[arg(long, default_value = "articles.json")]
    data: PathBuf,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the HTTP API server
    Serve {
        #[arg(long, default_value = "127.0.0.1:3000")]
        addr: String,
    },
    /// Print collection statistics
    Stats,
    /// Export the (optionally filtered) collection to a dated JSON file
    Export {
        /// Free-text search over titles and abstracts
        #[arg(long)]
        search: Option<String>,
        /// Category code, e.g. math.DG
        #[arg(long)]
        category: Option<String>,
        /// Four-digit publication year
        #[arg(long)]
        year: Option<String>,
        /// Directory the export file is written to
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },
    /// Write a generated sample dataset
    Sample {
        #[arg(long, default_value_t = DEFAULT_SAMPLE_COUNT)]
        count: usize,
        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, default_value = "articles.json")]
        out: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { addr } => {
            let articles = load_or_sample(&cli.data, DEFAULT_SAMPLE_COUNT).await;
            let session = Session::new(ArticleStore::new(articles));
            let state = AppState::new(session);

            let listener = tokio::net::TcpListener::bind(&addr)
                .await
                .with_context(|| format!("failed to bind {}", addr))?;
            info!("📚 Serving collection on http://{}", addr);
            axum::serve(listener, create_app(state)).await?;
        }
        Commands::Stats => {
            let articles = load_or_sample(&cli.data, DEFAULT_SAMPLE_COUNT).await;
            let session = Session::new(ArticleStore::new(articles));
            print_stats(&session.stats(StatsScope::All));
        }
        Commands::Export {
            search,
            category,
            year,
            out_dir,
        } => {
            let articles = load_or_sample(&cli.data, DEFAULT_SAMPLE_COUNT).await;
            let mut session = Session::new(ArticleStore::new(articles));
            if let Some(term) = search {
                session.set_search(&term);
            }
            if let Some(category) = category {
                session.set_category(&category);
            }
            if let Some(year) = year {
                session.set_year(&year);
            }

            let filtered = session.filtered();
            let path = export::write_export(&filtered, &out_dir).await?;
            println!("Exported {} articles to {}", filtered.len(), path.display());
            print_stats(&session.stats(StatsScope::Filtered));
        }
        Commands::Sample { count, seed, out } => {
            let mut generator = match seed {
                Some(seed) => SampleGenerator::with_seed(seed),
                None => SampleGenerator::new(),
            };
            let articles = generator.generate(count);
            tokio::fs::write(&out, export::to_json(&articles)?)
                .await
                .with_context(|| format!("failed to write {}", out.display()))?;
            println!("Wrote {} sample articles to {}", articles.len(), out.display());
        }
    }

    Ok(())
}

fn print_stats(stats: &Stats) {
    println!("📊 {}", stats.summary_line());

    println!("\n📂 By category:");
    for (category, count) in &stats.by_category {
        println!("   {}: {}", category, count);
    }

    println!("\n📅 By year (top 10):");
    for (year, count) in stats.by_year.iter().take(10) {
        println!("   {}: {}", year, count);
    }
}
