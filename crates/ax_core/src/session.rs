use serde::Deserialize;
use tracing::debug;

use crate::filter::{filter, FilterCriteria};
use crate::page::{paginate, total_pages, Page, PageState};
use crate::stats::{aggregate, Stats};
use crate::{Article, ArticleStore};

/// Which article set a stats snapshot covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatsScope {
    All,
    Filtered,
}

/// Current filter criteria and page cursor.
///
/// Mutated only through [`Session`], which enforces the coupling rule:
/// criteria changes reset the page cursor, page navigation never touches
/// the criteria.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub criteria: FilterCriteria,
    pub page: PageState,
}

/// Owns the collection and the session state, and exposes the query
/// interface the web and CLI layers consume.
pub struct Session {
    store: ArticleStore,
    state: SessionState,
}

impl Session {
    pub fn new(store: ArticleStore) -> Self {
        Self {
            store,
            state: SessionState::default(),
        }
    }

    pub fn with_page_size(store: ArticleStore, page_size: usize) -> Self {
        Self {
            store,
            state: SessionState {
                criteria: FilterCriteria::default(),
                page: PageState::with_page_size(page_size),
            },
        }
    }

    pub fn store(&self) -> &ArticleStore {
        &self.store
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.state.criteria
    }

    /// The subset matching the current criteria, in collection order.
    pub fn filtered(&self) -> Vec<Article> {
        filter(self.store.articles(), &self.state.criteria)
    }

    /// The currently visible page of the filtered set.
    pub fn current_page(&self) -> Page {
        paginate(&self.filtered(), &self.state.page)
    }

    pub fn set_search(&mut self, term: &str) -> Page {
        self.state.criteria.set_search(term);
        self.refresh()
    }

    pub fn set_category(&mut self, category: &str) -> Page {
        self.state.criteria.set_category(category);
        self.refresh()
    }

    pub fn set_year(&mut self, year: &str) -> Page {
        self.state.criteria.set_year(year);
        self.refresh()
    }

    // Criteria changed: the old page position is meaningless now.
    fn refresh(&mut self) -> Page {
        self.state.page.reset();
        debug!(criteria = ?self.state.criteria, "filter criteria updated");
        self.current_page()
    }

    pub fn go_to_page(&mut self, page: usize) -> Page {
        self.navigate(|state, total| state.go_to(page, total))
    }

    pub fn first_page(&mut self) -> Page {
        self.navigate(|state, _| state.first())
    }

    pub fn prev_page(&mut self) -> Page {
        self.navigate(|state, total| state.prev(total))
    }

    pub fn next_page(&mut self) -> Page {
        self.navigate(|state, total| state.next(total))
    }

    pub fn last_page(&mut self) -> Page {
        self.navigate(|state, total| state.last(total))
    }

    fn navigate(&mut self, step: impl FnOnce(&mut PageState, usize)) -> Page {
        let filtered = self.filtered();
        let total = total_pages(filtered.len(), self.state.page.page_size());
        step(&mut self.state.page, total);
        paginate(&filtered, &self.state.page)
    }

    /// Stats over the full collection or the current filtered subset.
    pub fn stats(&self, scope: StatsScope) -> Stats {
        match scope {
            StatsScope::All => aggregate(self.store.articles()),
            StatsScope::Filtered => aggregate(&self.filtered()),
        }
    }

    /// Detail lookup by id; first match wins, a miss is `None`.
    pub fn article(&self, id: &str) -> Option<&Article> {
        self.store.find_by_id(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(id: &str, category: &str, published: &str) -> Article {
        Article {
            id: id.to_string(),
            title: format!("Article {}", id),
            authors: vec!["Test Author".to_string()],
            abstract_text: "A test abstract.".to_string(),
            category: category.to_string(),
            published: published.to_string(),
            link: format!("https://arxiv.org/abs/{}", id),
            pdf: format!("https://arxiv.org/pdf/{}.pdf", id),
        }
    }

    fn session() -> Session {
        let store = ArticleStore::new(vec![
            article("2001.00001", "math.DG", "2020-01-01"),
            article("2005.00002", "math.DG", "2020-05-05"),
            article("2103.00003", "math.AG", "2021-03-01"),
        ]);
        Session::with_page_size(store, 2)
    }

    #[test]
    fn criteria_change_resets_page() {
        let mut session = session();
        let page = session.next_page();
        assert_eq!(page.current_page, 2);

        let page = session.set_category("math.DG");
        assert_eq!(page.current_page, 1);
        assert_eq!(page.total_items, 2);

        session.last_page();
        let page = session.set_search("article");
        assert_eq!(page.current_page, 1);
    }

    #[test]
    fn navigation_leaves_criteria_untouched() {
        let mut session = session();
        session.set_category("math.DG");
        let before = session.criteria().clone();

        session.next_page();
        session.go_to_page(1);
        session.last_page();

        assert_eq!(session.criteria(), &before);
    }

    #[test]
    fn go_to_page_clamps_past_the_end() {
        let mut session = session();
        let page = session.go_to_page(3);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.current_page, 2);
        assert_eq!(page.items.len(), 1);
    }

    #[test]
    fn stats_scope_selects_the_article_set() {
        let mut session = session();
        session.set_category("math.DG");

        let all = session.stats(StatsScope::All);
        assert_eq!(all.total, 3);

        let filtered = session.stats(StatsScope::Filtered);
        assert_eq!(filtered.total, 2);
        assert_eq!(filtered.by_category, vec![("math.DG".to_string(), 2)]);
    }

    #[test]
    fn detail_lookup_reports_misses() {
        let session = session();
        assert!(session.article("2001.00001").is_some());
        assert!(session.article("9999.99999").is_none());
    }

    #[test]
    fn filtered_set_survives_export_sized_reads() {
        let mut session = session();
        session.set_year("2020");
        let filtered = session.filtered();
        assert_eq!(filtered.len(), 2);
        // Reading the filtered set does not disturb the page cursor.
        assert_eq!(session.current_page().current_page, 1);
    }
}
