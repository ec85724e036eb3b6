use super::client::ApiClient;
use super::error::ApiResult;
use crate::models::counter::Counter;

impl ApiClient {
    /// `GET /counters`
    pub async fn list_counters(&self) -> ApiResult<Vec<Counter>> {
        self.get("/counters").await
    }
}
