use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use ax_core::Article;

/// Categories used for generated records, matching the collection's most
/// common primary categories.
pub const SAMPLE_CATEGORIES: [&str; 6] = [
    "math.DG", "math.SG", "math-ph", "math.AG", "math.QA", "math.RT",
];

/// Fallback dataset generator.
///
/// Ids, links and PDF urls are derived from the synthesized date and index,
/// so detail lookups and exports stay consistent within a session. Seed it
/// for fully deterministic output.
pub struct SampleGenerator {
    rng: StdRng,
}

impl SampleGenerator {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// The same seed always yields the same dataset.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generates `count` plausible article records, sorted by publication
    /// date, most recent first.
    pub fn generate(&mut self, count: usize) -> Vec<Article> {
        let mut articles: Vec<Article> = (0..count).map(|i| self.generate_one(i)).collect();
        articles.sort_by(|a, b| b.published.cmp(&a.published));
        articles
    }

    fn generate_one(&mut self, index: usize) -> Article {
        let year = 2000 + self.rng.gen_range(0..25);
        let month = self.rng.gen_range(1..=12);
        let day = self.rng.gen_range(1..=28);
        let category = SAMPLE_CATEGORIES[self.rng.gen_range(0..SAMPLE_CATEGORIES.len())];

        let id = format!("{}{:02}{:02}.{:05}", year, month, day, index);
        Article {
            id: id.clone(),
            title: format!(
                "Research Article {}: Advanced Studies in {}",
                index + 1,
                category
            ),
            authors: vec![
                format!("Author {}", index % 10 + 1),
                format!("Collaborator {}", index % 5 + 1),
                format!("Researcher {}", index % 3 + 1),
            ],
            abstract_text: format!(
                "This paper explores fundamental aspects of {} with applications to modern \
                 mathematical physics. We present novel approaches and theoretical frameworks.",
                category
            ),
            category: category.to_string(),
            published: format!("{}-{:02}-{:02}", year, month, day),
            link: format!("https://arxiv.org/abs/{}", id),
            pdf: format!("https://arxiv.org/pdf/{}.pdf", id),
        }
    }
}

impl Default for SampleGenerator {
    fn default() -> Self {
        Self::new()
    }
}
