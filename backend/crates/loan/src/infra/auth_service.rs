//! Authentication Service Client
//!
//! `UserDirectory` backed by the external authentication service's
//! `GET /api/v1/users/by-email` endpoint.

use crate::application::config::DirectoryConfig;
use crate::domain::entities::ApplicantProfile;
use crate::domain::repository::UserDirectory;
use crate::error::{LoanResult, UpstreamError};
use reqwest::{Client, StatusCode, header};
use serde::Deserialize;
use std::collections::BTreeSet;

const SERVICE_NAME: &str = "authentication service";

/// User record as returned by the authentication service
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExternalUser {
    correo_electronico: Option<String>,
    salario_base: Option<f64>,
    #[serde(default)]
    roles: BTreeSet<String>,
}

impl ExternalUser {
    fn into_profile(self, requested_email: &str) -> ApplicantProfile {
        ApplicantProfile {
            email: self
                .correo_electronico
                .unwrap_or_else(|| requested_email.to_string()),
            base_salary: self.salario_base,
            roles: self.roles,
        }
    }
}

/// HTTP user directory
#[derive(Clone)]
pub struct HttpUserDirectory {
    client: Client,
    base_url: String,
    api_key: String,
}

impl HttpUserDirectory {
    pub fn new(config: &DirectoryConfig) -> LoanResult<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;

        tracing::info!(base_url = %config.base_url, "User directory client configured");

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }
}

impl UserDirectory for HttpUserDirectory {
    async fn find_by_email(&self, email: &str) -> LoanResult<Option<ApplicantProfile>> {
        tracing::debug!(email = %email, "Looking up user in authentication service");

        let response = self
            .client
            .get(format!("{}/api/v1/users/by-email", self.base_url))
            .query(&[("email", email)])
            .header("X-API-Key", &self.api_key)
            .header(header::CONTENT_TYPE, "application/json")
            .send()
            .await?;

        match response.status() {
            StatusCode::NOT_FOUND => {
                tracing::warn!(email = %email, "User not found in authentication service");
                Ok(None)
            }
            status if status.is_success() => {
                let user: ExternalUser = response.json().await?;
                Ok(Some(user.into_profile(email)))
            }
            status => {
                tracing::error!(
                    email = %email,
                    status = status.as_u16(),
                    "Authentication service returned an error"
                );
                Err(UpstreamError::Status {
                    service: SERVICE_NAME,
                    status: status.as_u16(),
                }
                .into())
            }
        }
    }
}
