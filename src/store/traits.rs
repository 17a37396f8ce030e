//! Trait abstraction for the employee store to enable mocking in tests

use super::error::GatewayError;
use crate::state::Employee;
use async_trait::async_trait;

/// Fetch and persist employee records. Calls are single-shot: no caching,
/// no retries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeGateway: Send + Sync {
    /// List every employee
    async fn fetch_all(&self) -> Result<Vec<Employee>, GatewayError>;

    /// Fetch one employee by identifier
    async fn fetch_one(&self, id: u32) -> Result<Employee, GatewayError>;

    /// Create (no id) or update (id present) an employee, returning the
    /// stored record
    async fn save(&self, employee: &Employee) -> Result<Employee, GatewayError>;
}
