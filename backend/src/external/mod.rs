pub mod news_provider;
pub mod newsapi;
