use super::client::ApiClient;
use super::error::ApiResult;
use crate::models::user::Role;

impl ApiClient {
    /// `GET /roles`
    pub async fn list_roles(&self) -> ApiResult<Vec<Role>> {
        self.get("/roles").await
    }
}
