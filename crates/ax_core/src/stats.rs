use std::collections::HashMap;

use serde::Serialize;

use crate::Article;

/// Aggregated counts over an article set.
///
/// Computed over the full collection for the stats view, or over the
/// filtered subset at export time; nothing here depends on session state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stats {
    pub total: usize,
    /// Category counts, most frequent first. Equal counts keep the order in
    /// which the categories were first encountered.
    pub by_category: Vec<(String, usize)>,
    /// Min and max parseable publication year, when any year parsed at all.
    pub year_range: Option<(i32, i32)>,
    /// Per-year counts, most recent year first.
    pub by_year: Vec<(i32, usize)>,
}

impl Stats {
    /// Single-line summary for header-style rendering.
    pub fn summary_line(&self) -> String {
        match self.year_range {
            Some((min, max)) => format!(
                "Total: {} articles | {} categories | {}-{}",
                self.total,
                self.by_category.len(),
                min,
                max
            ),
            None => format!(
                "Total: {} articles | {} categories",
                self.total,
                self.by_category.len()
            ),
        }
    }
}

/// Computes frequency distributions and summary figures over `articles`.
///
/// Records whose `published` prefix does not parse as a year still count
/// toward `total` but are left out of `year_range` and `by_year`.
pub fn aggregate(articles: &[Article]) -> Stats {
    let total = articles.len();

    // Track first-seen position alongside the count so equal counts sort
    // deterministically.
    let mut categories: HashMap<&str, (usize, usize)> = HashMap::new();
    for (position, article) in articles.iter().enumerate() {
        categories
            .entry(article.category.as_str())
            .and_modify(|(_, count)| *count += 1)
            .or_insert((position, 1));
    }
    let mut ranked: Vec<(&str, usize, usize)> = categories
        .into_iter()
        .map(|(category, (position, count))| (category, position, count))
        .collect();
    ranked.sort_by(|a, b| b.2.cmp(&a.2).then(a.1.cmp(&b.1)));
    let by_category = ranked
        .into_iter()
        .map(|(category, _, count)| (category.to_string(), count))
        .collect();

    let mut years: HashMap<i32, usize> = HashMap::new();
    for article in articles {
        if let Some(year) = article.year() {
            *years.entry(year).or_insert(0) += 1;
        }
    }
    let year_range = years
        .keys()
        .copied()
        .min()
        .zip(years.keys().copied().max());
    let mut by_year: Vec<(i32, usize)> = years.into_iter().collect();
    by_year.sort_by(|a, b| b.0.cmp(&a.0));

    Stats {
        total,
        by_category,
        year_range,
        by_year,
    }
}
