//! REST client for the user, chirp, and friend endpoints.

use leptos::prelude::window;
use reqwest::StatusCode;
use serde::Serialize;

use chirper_types::{AddFriend, CreateUser, PostChirp, User};

use crate::error::ApiError;

/// Client for the chirper REST endpoints.
///
/// Holds only the base URL; the browser fetch backend establishes a
/// connection per request anyway. POST bodies are JSON with
/// `Content-Type: application/json`. No timeouts, no retries.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base: String,
}

impl ApiClient {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into().trim_end_matches('/').to_owned(),
        }
    }

    /// Client for the origin the page was served from.
    pub fn same_origin() -> Self {
        Self::new(window().location().origin().unwrap_or_default())
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    /// Look up a user profile. Not-found is an expected answer, not an
    /// error: callers render the raw id instead.
    pub async fn get_user(&self, user_id: &str) -> Result<Option<User>, ApiError> {
        let response = reqwest::get(self.endpoint(&format!("/api/users/{user_id}"))).await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let response = check(response)?;
        Ok(Some(response.json().await?))
    }

    pub async fn create_user(&self, user: &CreateUser) -> Result<(), ApiError> {
        self.post("/api/users", user).await
    }

    pub async fn post_chirp(&self, user_id: &str, chirp: &PostChirp) -> Result<(), ApiError> {
        self.post(&format!("/api/chirps/live/{user_id}"), chirp).await
    }

    pub async fn add_friend(&self, user_id: &str, friend: &AddFriend) -> Result<(), ApiError> {
        self.post(&format!("/api/users/{user_id}/friends"), friend)
            .await
    }

    async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        let response = reqwest::Client::new()
            .post(self.endpoint(path))
            .json(body)
            .send()
            .await?;
        check(response)?;
        Ok(())
    }
}

fn check(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    if response.status().is_success() {
        Ok(response)
    } else {
        Err(ApiError::Status {
            status: response.status().as_u16(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_base_and_path() {
        let api = ApiClient::new("http://localhost:9000");
        assert_eq!(
            api.endpoint("/api/users/alice"),
            "http://localhost:9000/api/users/alice"
        );
    }

    #[test]
    fn trailing_slash_on_the_base_is_normalized() {
        let api = ApiClient::new("http://localhost:9000/");
        assert_eq!(api.endpoint("/api/users"), "http://localhost:9000/api/users");
    }

    #[test]
    fn empty_base_yields_relative_paths() {
        let api = ApiClient::new("");
        assert_eq!(api.endpoint("/api/users"), "/api/users");
    }
}
