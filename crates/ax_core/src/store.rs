use crate::Article;

/// The full article collection, immutable after load.
///
/// Insertion order is load order; nothing here assumes the collection is
/// sorted.
#[derive(Debug, Default)]
pub struct ArticleStore {
    articles: Vec<Article>,
}

impl ArticleStore {
    pub fn new(articles: Vec<Article>) -> Self {
        Self { articles }
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    /// First record carrying the given id, if any. Ids are externally
    /// assigned and duplicates are tolerated; the first match wins.
    pub fn find_by_id(&self, id: &str) -> Option<&Article> {
        self.articles.iter().find(|article| article.id == id)
    }
}
