use anyhow::{anyhow, Result};
use chrono::{DateTime, NaiveDate};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

const NEWS_API_URL: &str = "https://newsapi.org/v2/everything";

/// Boolean keyword expression sent as the `q` parameter.
const QUERY: &str = "(devops OR \"cloud computing\" OR kubernetes OR \"cloud native\" OR \
                     microservices OR containerization OR \"continuous integration\" OR \
                     \"continuous deployment\" OR \"infrastructure as code\")";

/// Source domains the search is restricted to.
const SOURCE_DOMAINS: &[&str] = &[
    "techcrunch.com",
    "thenewstack.io",
    "devops.com",
    "infoq.com",
    "containerjournal.com",
    "devclass.com",
    "cloudblog.withgoogle.com",
    "aws.amazon.com/blogs",
    "azure.microsoft.com/blog",
];

const PAGE_SIZE: u32 = 30;

/// A news article as returned by NewsAPI, kept in response order
/// (most-recent-first).
#[derive(Debug, Clone)]
pub struct Article {
    pub title: String,
    pub description: Option<String>,
    pub source: String,
    pub published_at: i64, // Unix timestamp
    pub url: String,
}

// NewsAPI response structures
#[derive(Debug, Deserialize)]
struct NewsResponse {
    #[serde(default)]
    articles: Vec<RawArticle>,
}

#[derive(Debug, Deserialize)]
struct RawArticle {
    title: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    source: Option<RawSource>,
    #[serde(rename = "publishedAt", default)]
    published_at: Option<String>,
    url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawSource {
    name: Option<String>,
}

/// NewsAPI sends RFC 3339 timestamps; a bare date shows up in some
/// fixtures and is accepted as midnight UTC. Anything else maps to 0.
fn parse_timestamp(raw: &str) -> i64 {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.timestamp();
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc().timestamp())
        .unwrap_or(0)
}

fn parse_articles(data: NewsResponse) -> Vec<Article> {
    data.articles
        .into_iter()
        .filter_map(|a| {
            Some(Article {
                title: a.title?,
                description: a.description,
                source: a
                    .source
                    .and_then(|s| s.name)
                    .unwrap_or_else(|| "Unknown".to_string()),
                published_at: a.published_at.as_deref().map(parse_timestamp).unwrap_or(0),
                url: a.url?,
            })
        })
        .collect()
}

pub struct NewsClient {
    client: Client,
    api_key: String,
}

impl NewsClient {
    pub fn new(api_key: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(15))
            .build()
            .expect("Failed to build HTTP client");
        Self { client, api_key }
    }

    /// One GET against the search endpoint; no retries, no caching.
    pub async fn fetch_articles(&self) -> Result<Vec<Article>> {
        let domains = SOURCE_DOMAINS.join(",");
        let page_size = PAGE_SIZE.to_string();

        let response = self
            .client
            .get(NEWS_API_URL)
            .query(&[
                ("q", QUERY),
                ("domains", domains.as_str()),
                ("apiKey", self.api_key.as_str()),
                ("pageSize", page_size.as_str()),
                ("language", "en"),
                ("sortBy", "publishedAt"),
            ])
            .header("Accept", "application/json")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(anyhow!("News API error: {}", response.status()));
        }

        let data: NewsResponse = response.json().await?;
        Ok(parse_articles(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_response_in_order() {
        let json = r#"{
            "status": "ok",
            "totalResults": 2,
            "articles": [
                {
                    "source": {"id": null, "name": "The New Stack"},
                    "author": "A. Writer",
                    "title": "Kubernetes 1.33 Released",
                    "description": "What is new in the release.",
                    "url": "https://thenewstack.io/k8s-133",
                    "publishedAt": "2025-01-10T08:30:00Z"
                },
                {
                    "source": {"id": null, "name": "DevClass"},
                    "title": "CI pipelines get faster",
                    "description": null,
                    "url": "https://devclass.com/ci",
                    "publishedAt": "2025-01-09T12:00:00Z"
                }
            ]
        }"#;
        let data: NewsResponse = serde_json::from_str(json).unwrap();
        let articles = parse_articles(data);
        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0].title, "Kubernetes 1.33 Released");
        assert_eq!(articles[0].source, "The New Stack");
        assert_eq!(
            articles[0].description.as_deref(),
            Some("What is new in the release.")
        );
        assert_eq!(articles[1].description, None);
        assert!(articles[0].published_at > articles[1].published_at);
    }

    #[test]
    fn drops_entries_without_title_or_url() {
        let json = r#"{
            "articles": [
                {"title": null, "url": "https://example.com/a", "publishedAt": "2025-01-10T00:00:00Z"},
                {"title": "No link", "url": null},
                {"title": "Kept", "url": "https://example.com/b"}
            ]
        }"#;
        let data: NewsResponse = serde_json::from_str(json).unwrap();
        let articles = parse_articles(data);
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].title, "Kept");
    }

    #[test]
    fn missing_source_name_becomes_unknown() {
        let json = r#"{
            "articles": [
                {"title": "T", "url": "https://example.com", "source": {"name": null}}
            ]
        }"#;
        let data: NewsResponse = serde_json::from_str(json).unwrap();
        let articles = parse_articles(data);
        assert_eq!(articles[0].source, "Unknown");
        assert_eq!(articles[0].published_at, 0);
    }

    #[test]
    fn timestamp_accepts_rfc3339_and_bare_dates() {
        assert_eq!(parse_timestamp("2025-01-09T00:00:00Z"), 1736380800);
        assert_eq!(parse_timestamp("2025-01-09"), 1736380800);
        assert_eq!(parse_timestamp("not a date"), 0);
    }
}
