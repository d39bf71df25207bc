#![allow(dead_code)]

use cloud_radar::api::{Article, NewsClient};
use cloud_radar::app::App;
use cloud_radar::config::Config;

pub fn make_article(title: &str, description: &str, source: &str, ts: i64) -> Article {
    Article {
        title: title.to_string(),
        description: if description.is_empty() {
            None
        } else {
            Some(description.to_string())
        },
        source: source.to_string(),
        published_at: ts,
        url: format!(
            "https://example.com/{}",
            title.to_lowercase().replace(' ', "-")
        ),
    }
}

// Creates a default App instance for testing (no file or network I/O).
pub fn test_app() -> App {
    App::new(Config::test_config(), NewsClient::new("test-key".to_string()))
}

pub fn app_with_articles(articles: Vec<Article>) -> App {
    let mut app = test_app();
    app.articles = articles;
    app
}
