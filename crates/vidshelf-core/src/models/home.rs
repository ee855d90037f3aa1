use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HomeResponse {
    /// Catalogue title, e.g. "NFL Football Videos"
    pub app_name: String,
}
