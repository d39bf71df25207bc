mod enrich;
mod filter;
mod refresh;

pub use enrich::{category_for, provider_for, Category, Provider};
pub use filter::CategoryFilter;
pub use refresh::fallback_articles;

use crate::api::{Article, NewsClient};
use crate::config::Config;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Search,
    ArticleDetail,
    Help,
}

pub struct App {
    pub config: Config,
    pub articles: Vec<Article>,
    pub selected_index: usize,
    pub input_mode: InputMode,
    pub input_buffer: String,
    pub status_message: Option<String>,
    pub loading: bool,
    pub last_updated: Option<String>,
    pub search_query: String,
    pub search_active: bool,
    pub category_filter: CategoryFilter,
    /// `None` is the "All Providers" sentinel.
    pub provider_filter: Option<Provider>,
    client: NewsClient,
}

impl App {
    pub fn new(config: Config, client: NewsClient) -> Self {
        Self {
            config,
            articles: Vec::new(),
            selected_index: 0,
            input_mode: InputMode::Normal,
            input_buffer: String::new(),
            status_message: None,
            loading: false,
            last_updated: None,
            search_query: String::new(),
            search_active: false,
            category_filter: CategoryFilter::default(),
            provider_filter: None,
            client,
        }
    }

    pub fn move_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn move_down(&mut self) {
        let len = self.get_filtered_articles().len();
        if len > 0 && self.selected_index < len - 1 {
            self.selected_index += 1;
        }
    }

    /// Single-select provider filter, cycled in dropdown order:
    /// All Providers, AWS, Google Cloud, Azure. `Other` is not offered.
    pub fn cycle_provider(&mut self) {
        self.provider_filter = match self.provider_filter {
            None => Some(Provider::Aws),
            Some(Provider::Aws) => Some(Provider::GoogleCloud),
            Some(Provider::GoogleCloud) => Some(Provider::Azure),
            Some(Provider::Azure) | Some(Provider::Other) => None,
        };
        self.selected_index = 0;
    }

    pub fn provider_filter_label(&self) -> &'static str {
        match self.provider_filter {
            Some(provider) => provider.label(),
            None => "All Providers",
        }
    }

    pub fn open_detail(&mut self) {
        if self.selected_article().is_some() {
            self.input_mode = InputMode::ArticleDetail;
        }
    }

    pub fn close_detail(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    /// Launch the selected article's canonical URL in the system browser.
    pub fn open_selected_article(&mut self) {
        let Some(url) = self.selected_article().map(|a| a.url.clone()) else {
            return;
        };
        if let Err(e) = open::that(&url) {
            self.status_message = Some(format!("Could not open browser: {}", e));
        }
    }

    pub fn show_help(&mut self) {
        self.input_mode = InputMode::Help;
    }

    pub fn close_help(&mut self) {
        self.input_mode = InputMode::Normal;
    }
}
