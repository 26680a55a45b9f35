use serde::{Deserialize, Serialize};

use crate::Article;

/// The active search/category/year filter combination.
///
/// `None` for category or year means no restriction; the UI sends the
/// literal string `"all"` for that state, mapped by the setters. A criteria
/// value fully determines the filtered set as a pure function of the
/// collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub search: String,
    pub category: Option<String>,
    pub year: Option<String>,
}

impl FilterCriteria {
    pub fn set_search(&mut self, term: &str) {
        self.search = term.trim().to_lowercase();
    }

    pub fn set_category(&mut self, category: &str) {
        self.category = match category {
            "all" => None,
            other => Some(other.to_string()),
        };
    }

    pub fn set_year(&mut self, year: &str) {
        self.year = match year {
            "all" => None,
            other => Some(other.to_string()),
        };
    }

    /// True when the article satisfies every active predicate.
    pub fn matches(&self, article: &Article) -> bool {
        let term = self.search.to_lowercase();
        if !term.is_empty() {
            let found = article.title.to_lowercase().contains(&term)
                || article.abstract_text.to_lowercase().contains(&term);
            if !found {
                return false;
            }
        }

        if let Some(category) = &self.category {
            if article.category != *category {
                return false;
            }
        }

        if let Some(year) = &self.year {
            // A malformed `published` simply fails the prefix test.
            if !article.published.starts_with(year.as_str()) {
                return false;
            }
        }

        true
    }
}

/// Computes the subset of `articles` matching `criteria`.
///
/// Order-preserving and side-effect free; the input collection is never
/// mutated.
pub fn filter(articles: &[Article], criteria: &FilterCriteria) -> Vec<Article> {
    articles
        .iter()
        .filter(|article| criteria.matches(article))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(id: &str, title: &str, abstract_text: &str, category: &str, published: &str) -> Article {
        Article {
            id: id.to_string(),
            title: title.to_string(),
            authors: vec!["Test Author".to_string()],
            abstract_text: abstract_text.to_string(),
            category: category.to_string(),
            published: published.to_string(),
            link: format!("https://arxiv.org/abs/{}", id),
            pdf: format!("https://arxiv.org/pdf/{}.pdf", id),
        }
    }

    fn sample_collection() -> Vec<Article> {
        vec![
            article(
                "2001.00001",
                "Moment maps on symplectic manifolds",
                "We study moment maps and their images.",
                "math.DG",
                "2020-01-01",
            ),
            article(
                "2005.00002",
                "Curvature flows",
                "Ricci flow on compact manifolds.",
                "math.DG",
                "2020-05-05",
            ),
            article(
                "2103.00003",
                "Sheaves on toric varieties",
                "Derived categories of coherent sheaves.",
                "math.AG",
                "2021-03-01",
            ),
        ]
    }

    #[test]
    fn match_all_criteria_is_identity() {
        let collection = sample_collection();
        let filtered = filter(&collection, &FilterCriteria::default());
        assert_eq!(filtered, collection);
    }

    #[test]
    fn category_filter_preserves_order() {
        let collection = sample_collection();
        let mut criteria = FilterCriteria::default();
        criteria.set_category("math.DG");
        let filtered = filter(&collection, &criteria);
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].id, "2001.00001");
        assert_eq!(filtered[1].id, "2005.00002");
    }

    #[test]
    fn all_sentinel_clears_restrictions() {
        let collection = sample_collection();
        let mut criteria = FilterCriteria::default();
        criteria.set_category("math.DG");
        criteria.set_year("2020");
        criteria.set_category("all");
        criteria.set_year("all");
        assert_eq!(filter(&collection, &criteria), collection);
    }

    #[test]
    fn search_is_case_insensitive_over_title_and_abstract() {
        let collection = sample_collection();
        let mut criteria = FilterCriteria::default();

        criteria.set_search("MOMENT");
        let filtered = filter(&collection, &criteria);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "2001.00001");

        criteria.set_search("ricci");
        let filtered = filter(&collection, &criteria);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "2005.00002");
    }

    #[test]
    fn predicates_are_conjunctive() {
        let collection = sample_collection();
        let mut criteria = FilterCriteria::default();
        criteria.set_search("manifolds");
        criteria.set_category("math.DG");
        criteria.set_year("2020");
        assert_eq!(filter(&collection, &criteria).len(), 2);

        criteria.set_year("2021");
        assert!(filter(&collection, &criteria).is_empty());
    }

    #[test]
    fn year_filter_matches_published_prefix() {
        let collection = sample_collection();
        let mut criteria = FilterCriteria::default();
        criteria.set_year("2021");
        let filtered = filter(&collection, &criteria);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "2103.00003");
    }

    #[test]
    fn malformed_published_fails_year_predicate() {
        let mut collection = sample_collection();
        collection.push(article("bad.00004", "Undated notes", "No date.", "math.DG", "n.d."));

        let mut criteria = FilterCriteria::default();
        criteria.set_year("2020");
        let filtered = filter(&collection, &criteria);
        assert!(filtered.iter().all(|a| a.id != "bad.00004"));

        // Without a year restriction the record is still visible.
        assert_eq!(filter(&collection, &FilterCriteria::default()).len(), 4);
    }

    #[test]
    fn empty_result_is_allowed() {
        let collection = sample_collection();
        let mut criteria = FilterCriteria::default();
        criteria.set_search("quantum gravity");
        assert!(filter(&collection, &criteria).is_empty());
    }
}
