use super::enrich::{category_for, provider_for, Category};
use super::{App, InputMode};
use crate::api::Article;

/// Multi-select category filter. An empty selection is the "All News"
/// sentinel.
#[derive(Debug, Clone, Default)]
pub struct CategoryFilter {
    selected: Vec<Category>,
}

impl CategoryFilter {
    pub fn is_all(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn is_active(&self, category: Category) -> bool {
        self.selected.contains(&category)
    }

    /// Collapse back to "All News", dropping every specific selection.
    pub fn select_all(&mut self) {
        self.selected.clear();
    }

    /// Add or remove one category. Toggling the only active category lands
    /// back on "All News"; toggling while "All News" is active selects just
    /// that category.
    pub fn toggle(&mut self, category: Category) {
        if let Some(pos) = self.selected.iter().position(|&c| c == category) {
            self.selected.remove(pos);
        } else {
            self.selected.push(category);
        }
    }

    pub fn matches(&self, category: Category) -> bool {
        self.is_all() || self.selected.contains(&category)
    }
}

impl App {
    pub fn start_search(&mut self) {
        self.input_mode = InputMode::Search;
        self.input_buffer.clear();
    }

    pub fn confirm_search(&mut self) {
        if !self.input_buffer.trim().is_empty() {
            self.search_query = self.input_buffer.trim().to_lowercase();
            self.search_active = true;
            self.selected_index = 0;
        } else {
            self.clear_search();
        }
        self.input_mode = InputMode::Normal;
        self.input_buffer.clear();
    }

    pub fn cancel_search(&mut self) {
        self.clear_search();
        self.input_mode = InputMode::Normal;
        self.input_buffer.clear();
    }

    pub fn clear_search(&mut self) {
        self.search_query.clear();
        self.search_active = false;
        self.selected_index = 0;
    }

    pub fn toggle_category(&mut self, category: Category) {
        self.category_filter.toggle(category);
        self.selected_index = 0;
    }

    pub fn select_all_categories(&mut self) {
        self.category_filter.select_all();
        self.selected_index = 0;
    }

    /// The visible subset: search AND category AND provider must all hold.
    /// Response order is preserved.
    pub fn get_filtered_articles(&self) -> Vec<&Article> {
        self.articles
            .iter()
            .filter(|a| self.article_visible(a))
            .collect()
    }

    fn article_visible(&self, article: &Article) -> bool {
        self.matches_search(article)
            && self.category_filter.matches(category_for(&article.title))
            && self
                .provider_filter
                .is_none_or(|p| p == provider_for(&article.title))
    }

    fn matches_search(&self, article: &Article) -> bool {
        if !self.search_active || self.search_query.is_empty() {
            return true;
        }
        article.title.to_lowercase().contains(&self.search_query)
            || article
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(&self.search_query))
    }

    pub fn selected_article(&self) -> Option<&Article> {
        self.get_filtered_articles()
            .get(self.selected_index)
            .copied()
    }
}
