//! HTTP client for the remote employee store
//!
//! Routes: `GET /employees`, `GET /employees/{id}`, `POST /employees` and
//! `PUT /employees/{id}`, all exchanging camelCase JSON.

use super::error::GatewayError;
use super::traits::EmployeeGateway;
use crate::state::Employee;
use async_trait::async_trait;
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Default store address
pub const DEFAULT_ADDRESS: &str = "http://localhost:3000";

/// Default per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for communicating with the employee store
pub struct StoreClient {
    http: reqwest::Client,
    address: String,
}

impl StoreClient {
    /// Create a new store client
    pub fn new(address: &str, timeout: Duration) -> Result<Self, GatewayError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            address: address.trim_end_matches('/').to_string(),
        })
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    fn employees_url(&self) -> String {
        format!("{}/employees", self.address)
    }

    fn employee_url(&self, id: u32) -> String {
        format!("{}/employees/{id}", self.address)
    }
}

#[async_trait]
impl EmployeeGateway for StoreClient {
    async fn fetch_all(&self) -> Result<Vec<Employee>, GatewayError> {
        tracing::debug!("GET {}", self.employees_url());
        let response = self.http.get(self.employees_url()).send().await?;
        decode(response).await
    }

    async fn fetch_one(&self, id: u32) -> Result<Employee, GatewayError> {
        tracing::debug!("GET {}", self.employee_url(id));
        let response = self.http.get(self.employee_url(id)).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(GatewayError::NotFound(id));
        }
        decode(response).await
    }

    async fn save(&self, employee: &Employee) -> Result<Employee, GatewayError> {
        let request = match employee.id {
            Some(id) => {
                tracing::debug!("PUT {}", self.employee_url(id));
                self.http.put(self.employee_url(id))
            }
            None => {
                tracing::debug!("POST {}", self.employees_url());
                self.http.post(self.employees_url())
            }
        };

        let response = request.json(employee).send().await?;
        match response.status() {
            StatusCode::NOT_FOUND => match employee.id {
                Some(id) => Err(GatewayError::NotFound(id)),
                None => Err(GatewayError::UnexpectedStatus(StatusCode::NOT_FOUND.as_u16())),
            },
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                let body = response.text().await?;
                Err(GatewayError::Validation(body))
            }
            _ => decode(response).await,
        }
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, GatewayError> {
    let status = response.status();
    if !status.is_success() {
        return Err(GatewayError::UnexpectedStatus(status.as_u16()));
    }
    Ok(response.json().await?)
}
