use reqwest::Method;

use super::client::ApiClient;
use super::error::ApiResult;
use crate::models::user::{CounterAssignment, NewUser, RoleChange, User, UserUpdate};

impl ApiClient {
    /// `GET /users`: active users.
    pub async fn list_users(&self) -> ApiResult<Vec<User>> {
        self.get("/users").await
    }

    /// `GET /users/trashed`: soft-deleted users.
    pub async fn list_trashed_users(&self) -> ApiResult<Vec<User>> {
        self.get("/users/trashed").await
    }

    pub async fn get_user(&self, id: i64) -> ApiResult<User> {
        self.get(&format!("/users/{id}")).await
    }

    pub async fn create_user(&self, user: &NewUser) -> ApiResult<User> {
        self.send_json(Method::POST, "/users", user).await
    }

    pub async fn update_user(&self, id: i64, update: &UserUpdate) -> ApiResult<User> {
        self.send_json(Method::PUT, &format!("/users/{id}"), update).await
    }

    pub async fn change_role(&self, id: i64, role_id: i64) -> ApiResult<()> {
        self.execute(Method::PUT, &format!("/users/{id}/role"), Some(&RoleChange { role_id }))
            .await
    }

    pub async fn assign_counter(&self, id: i64, counter_id: i64) -> ApiResult<()> {
        let body = CounterAssignment { counter_id };
        self.execute(Method::POST, &format!("/users/{id}/assign-counter"), Some(&body))
            .await
    }

    /// Soft delete; reversible with [`ApiClient::restore_user`].
    pub async fn delete_user(&self, id: i64) -> ApiResult<()> {
        self.execute_empty(Method::DELETE, &format!("/users/{id}")).await
    }

    pub async fn restore_user(&self, id: i64) -> ApiResult<()> {
        self.execute_empty(Method::POST, &format!("/users/restore/{id}")).await
    }

    /// Permanent delete of a trashed user.
    pub async fn force_delete_user(&self, id: i64) -> ApiResult<()> {
        self.execute_empty(Method::DELETE, &format!("/users/force/{id}")).await
    }
}
