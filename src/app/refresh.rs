use super::App;
use crate::api::Article;
use anyhow::Result;
use chrono::Local;

/// Canned articles shown when the very first fetch fails, so the dashboard
/// is never blank.
pub fn fallback_articles() -> Vec<Article> {
    vec![
        Article {
            title: "Google Cloud Enhances Security Features".to_string(),
            description: Some(
                "New security features launched for Google Cloud Platform users...".to_string(),
            ),
            source: "Google Cloud Blog".to_string(),
            published_at: 1736467200, // 2025-01-10
            url: "https://cloudblog.withgoogle.com/".to_string(),
        },
        Article {
            title: "AWS Launches New Serverless Computing Service".to_string(),
            description: Some(
                "Amazon Web Services introduces a revolutionary serverless computing platform..."
                    .to_string(),
            ),
            source: "AWS News".to_string(),
            published_at: 1736380800, // 2025-01-09
            url: "https://aws.amazon.com/blogs/aws/".to_string(),
        },
        Article {
            title: "Azure DevOps Introduces New Pipeline Features".to_string(),
            description: Some(
                "Microsoft Azure DevOps releases new pipeline capabilities...".to_string(),
            ),
            source: "Azure Updates".to_string(),
            published_at: 1736294400, // 2025-01-08
            url: "https://azure.microsoft.com/blog/".to_string(),
        },
    ]
}

impl App {
    /// Execute the network fetch and fold the outcome into the app state.
    /// `loading` holds for the duration and blocks re-entry.
    pub async fn refresh_articles(&mut self) {
        if self.loading {
            return;
        }
        self.loading = true;
        let result = self.client.fetch_articles().await;
        self.apply_fetch_result(result);
        self.loading = false;
    }

    /// Replace the article list wholesale on success. On failure the status
    /// line carries the error message; stale articles stay on screen, and
    /// the fallback list fills in when there is nothing to show yet.
    pub fn apply_fetch_result(&mut self, result: Result<Vec<Article>>) {
        match result {
            Ok(articles) => {
                self.articles = articles;
                self.last_updated = Some(Local::now().format("%H:%M:%S").to_string());
                self.status_message = None;
                self.selected_index = 0;
            }
            Err(_) => {
                self.status_message =
                    Some("Failed to fetch news. Please try again later.".to_string());
                if self.articles.is_empty() {
                    self.articles = fallback_articles();
                }
            }
        }
        if self.selected_index >= self.get_filtered_articles().len() {
            self.selected_index = 0;
        }
    }
}
