pub mod polarity_service;
pub mod sentiment_service;
