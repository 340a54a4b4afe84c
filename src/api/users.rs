use std::sync::Arc;

use tracing::info;

use crate::api::dtos::requests::{CreateUserRequest, UpdateUserRequest, UserFilter};
use crate::api::dtos::responses::Page;
use crate::api::simulate_latency;
use crate::domain::models::user::{NewUserParams, User, USER_ROLES, USER_STATUSES};
use crate::error::AppError;
use crate::state::AppState;

pub struct UsersApi {
    state: Arc<AppState>,
}

impl UsersApi {
    pub fn new(state: Arc<AppState>) -> Self {
        Self { state }
    }

    pub async fn get_all(&self, filter: &UserFilter) -> Result<Page<User>, AppError> {
        simulate_latency(&self.state.config, 600).await;

        let mut users = self.state.user_repo.list().await?;

        if let Some(search) = filter.search.as_deref().filter(|s| !s.is_empty()) {
            let needle = search.to_lowercase();
            users.retain(|u| {
                u.first_name.to_lowercase().contains(&needle)
                    || u.last_name.to_lowercase().contains(&needle)
                    || u.email.to_lowercase().contains(&needle)
            });
        }
        if let Some(role) = filter.role.as_deref().filter(|s| !s.is_empty()) {
            users.retain(|u| u.role == role);
        }
        if let Some(status) = filter.status.as_deref().filter(|s| !s.is_empty()) {
            users.retain(|u| u.status == status);
        }

        let total = users.len();
        Ok(Page { items: users, total })
    }

    pub async fn get_by_id(&self, id: &str) -> Result<User, AppError> {
        simulate_latency(&self.state.config, 400).await;

        self.state
            .user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    pub async fn create(&self, payload: CreateUserRequest) -> Result<User, AppError> {
        simulate_latency(&self.state.config, 800).await;

        if !USER_ROLES.contains(&payload.role.as_str()) {
            return Err(AppError::Validation("Invalid role".to_string()));
        }
        let status = payload.status.unwrap_or_else(|| "active".to_string());
        if !USER_STATUSES.contains(&status.as_str()) {
            return Err(AppError::Validation("Invalid status".to_string()));
        }

        let user = User::new(NewUserParams {
            first_name: payload.first_name,
            last_name: payload.last_name,
            email: payload.email,
            phone: payload.phone,
            role: payload.role,
            status,
        });

        info!("Creating user: {} {}", user.first_name, user.last_name);
        self.state.user_repo.insert(&user).await
    }

    pub async fn update(&self, id: &str, payload: UpdateUserRequest) -> Result<User, AppError> {
        simulate_latency(&self.state.config, 700).await;

        let mut user = self
            .state
            .user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        if let Some(first_name) = payload.first_name {
            user.first_name = first_name;
        }
        if let Some(last_name) = payload.last_name {
            user.last_name = last_name;
        }
        if let Some(email) = payload.email {
            user.email = email;
        }
        if let Some(phone) = payload.phone {
            user.phone = phone;
        }
        if let Some(role) = payload.role {
            if !USER_ROLES.contains(&role.as_str()) {
                return Err(AppError::Validation("Invalid role".to_string()));
            }
            user.role = role;
        }
        if let Some(status) = payload.status {
            if !USER_STATUSES.contains(&status.as_str()) {
                return Err(AppError::Validation("Invalid status".to_string()));
            }
            user.status = status;
        }

        self.state
            .user_repo
            .update(&user)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    pub async fn delete(&self, id: &str) -> Result<User, AppError> {
        simulate_latency(&self.state.config, 500).await;

        info!("Deleting user: {}", id);
        self.state
            .user_repo
            .delete(id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }
}
