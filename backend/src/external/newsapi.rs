use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{error, info, warn};

use crate::external::news_provider::{NewsProvider, NewsProviderError};
use crate::models::NewsArticle;

const NEWSAPI_EVERYTHING_URL: &str = "https://newsapi.org/v2/everything";

/// NewsAPI.org provider (https://newsapi.org/docs/endpoints/everything).
pub struct NewsApiProvider {
    client: Client,
    api_key: String,
}

impl NewsApiProvider {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
        }
    }

    pub fn from_env() -> Result<Self, NewsProviderError> {
        let api_key = std::env::var("NEWS_API_KEY")
            .map_err(|_| NewsProviderError::BadResponse("NEWS_API_KEY not set".into()))?;

        Ok(Self::new(api_key))
    }
}

#[derive(Debug, Deserialize)]
struct NewsApiResponse {
    status: String,

    #[serde(default)]
    articles: Vec<NewsApiArticle>,

    // Error bodies look like:
    // { "status": "error", "code": "apiKeyInvalid", "message": "..." }
    code: Option<String>,
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct NewsApiArticle {
    title: Option<String>,
    url: Option<String>,
    source: NewsApiSource,
    #[serde(rename = "publishedAt")]
    published_at: Option<DateTime<Utc>>,
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct NewsApiSource {
    name: Option<String>,
}

/// Map raw NewsAPI records to articles, preserving response order.
///
/// Records without a usable title are skipped rather than failing the whole
/// query: delisted articles come back with a "[Removed]" placeholder.
fn map_articles(items: Vec<NewsApiArticle>) -> Vec<NewsArticle> {
    items
        .into_iter()
        .filter_map(|item| {
            let title = match item.title {
                Some(t) if !t.trim().is_empty() && t != "[Removed]" => t,
                _ => {
                    warn!("Skipping article record without a usable title");
                    return None;
                }
            };

            Some(NewsArticle {
                title,
                url: item.url.unwrap_or_default(),
                source: item.source.name.unwrap_or_default(),
                published_at: item.published_at,
                description: item.description,
            })
        })
        .collect()
}

#[async_trait]
impl NewsProvider for NewsApiProvider {
    async fn fetch_headlines(
        &self,
        ticker: &str,
        max_results: u32,
    ) -> Result<Vec<NewsArticle>, NewsProviderError> {
        info!("Fetching headlines from NewsAPI for {}", ticker);

        let page_size = max_results.min(100).to_string(); // NewsAPI max is 100

        let response = self
            .client
            .get(NEWSAPI_EVERYTHING_URL)
            .query(&[
                ("q", ticker),
                ("pageSize", page_size.as_str()),
                ("sortBy", "publishedAt"),
                ("apiKey", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| {
                error!("NewsAPI request failed: {}", e);
                NewsProviderError::Network(e.to_string())
            })?;

        match response.status() {
            StatusCode::UNAUTHORIZED => return Err(NewsProviderError::Unauthorized),
            StatusCode::TOO_MANY_REQUESTS => return Err(NewsProviderError::RateLimited),
            _ => {}
        }

        let body = response
            .json::<NewsApiResponse>()
            .await
            .map_err(|e| NewsProviderError::Parse(e.to_string()))?;

        if body.status != "ok" {
            let code = body.code.unwrap_or_else(|| "unknown".to_string());
            let message = body.message.unwrap_or_default();
            error!("NewsAPI error {}: {}", code, message);
            return Err(NewsProviderError::BadResponse(format!("{}: {}", code, message)));
        }

        let articles = map_articles(body.articles);
        info!("Fetched {} headlines for {}", articles.len(), ticker);
        Ok(articles)
    }
}
