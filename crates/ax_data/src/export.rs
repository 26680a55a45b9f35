use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::info;

use ax_core::{Article, Result};

/// Serializes an article set to pretty-printed JSON with the dataset's
/// field names, so an export can be re-ingested as-is.
pub fn to_json(articles: &[Article]) -> Result<String> {
    Ok(serde_json::to_string_pretty(articles)?)
}

/// Export filename for the given date, e.g. `arxiv_export_2026-08-04.json`.
pub fn export_filename(date: NaiveDate) -> String {
    format!("arxiv_export_{}.json", date.format("%Y-%m-%d"))
}

/// Writes `articles` (normally the current filtered set) into `dir` under a
/// date-stamped filename and returns the path written.
pub async fn write_export(articles: &[Article], dir: &Path) -> Result<PathBuf> {
    let path = dir.join(export_filename(chrono::Utc::now().date_naive()));
    tokio::fs::write(&path, to_json(articles)?).await?;
    info!("📤 Exported {} articles to {}", articles.len(), path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::load_articles;
    use crate::sample::SampleGenerator;

    #[test]
    fn export_round_trips() {
        let articles = SampleGenerator::with_seed(21).generate(30);
        let json = to_json(&articles).unwrap();
        let restored: Vec<Article> = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, articles);
    }

    #[test]
    fn filename_encodes_the_date() {
        let date = NaiveDate::from_ymd_opt(2025, 8, 4).unwrap();
        assert_eq!(export_filename(date), "arxiv_export_2025-08-04.json");
    }

    #[tokio::test]
    async fn written_export_can_be_reloaded() {
        let articles = SampleGenerator::with_seed(4).generate(10);
        let dir = tempfile::tempdir().unwrap();

        let path = write_export(&articles, dir.path()).await.unwrap();
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("arxiv_export_"));
        assert!(name.ends_with(".json"));

        let restored = load_articles(&path).await.unwrap();
        assert_eq!(restored, articles);
    }
}
