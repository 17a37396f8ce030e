//! Employee store gateway over HTTP

mod client;
mod error;
mod traits;

pub use client::{StoreClient, DEFAULT_ADDRESS, DEFAULT_TIMEOUT};
pub use traits::EmployeeGateway;

#[cfg(test)]
pub use error::GatewayError;
#[cfg(test)]
pub use traits::MockEmployeeGateway;
