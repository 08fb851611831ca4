use std::sync::Arc;

use crate::external::news_provider::NewsProvider;
use crate::services::polarity_service::PolarityModel;

#[derive(Clone)]
pub struct AppState {
    pub news_provider: Arc<dyn NewsProvider>,
    pub polarity_model: Arc<dyn PolarityModel>,
}
