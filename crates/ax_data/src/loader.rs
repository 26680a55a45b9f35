use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::{info, warn};

use ax_core::{Article, Result};

use crate::sample::SampleGenerator;

/// Somewhere a collection can be loaded from.
#[async_trait]
pub trait ArticleSource: Send + Sync {
    async fn load(&self) -> Result<Vec<Article>>;
}

/// A JSON dataset file in the collection export shape.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ArticleSource for FileSource {
    async fn load(&self) -> Result<Vec<Article>> {
        load_articles(&self.path).await
    }
}

/// A synthesized collection, used when no real dataset is available.
pub struct GeneratedSource {
    seed: Option<u64>,
    count: usize,
}

impl GeneratedSource {
    pub fn new(count: usize) -> Self {
        Self { seed: None, count }
    }

    pub fn with_seed(seed: u64, count: usize) -> Self {
        Self {
            seed: Some(seed),
            count,
        }
    }
}

#[async_trait]
impl ArticleSource for GeneratedSource {
    async fn load(&self) -> Result<Vec<Article>> {
        let mut generator = match self.seed {
            Some(seed) => SampleGenerator::with_seed(seed),
            None => SampleGenerator::new(),
        };
        Ok(generator.generate(self.count))
    }
}

/// Parses a JSON dataset matching the collection export shape.
pub async fn load_articles(path: &Path) -> Result<Vec<Article>> {
    let raw = tokio::fs::read_to_string(path).await?;
    let articles: Vec<Article> = serde_json::from_str(&raw)?;
    info!("📚 Loaded {} articles from {}", articles.len(), path.display());
    Ok(articles)
}

/// Loads the dataset at `path`, substituting a generated collection when the
/// file is missing or malformed. Ingestion failure is logged, never surfaced.
pub async fn load_or_sample(path: &Path, sample_count: usize) -> Vec<Article> {
    match FileSource::new(path).load().await {
        Ok(articles) => articles,
        Err(e) => {
            warn!(
                "Failed to load dataset {}: {}. Falling back to sample data.",
                path.display(),
                e
            );
            // The generated source is infallible.
            GeneratedSource::new(sample_count)
                .load()
                .await
                .unwrap_or_default()
        }
    }
}
