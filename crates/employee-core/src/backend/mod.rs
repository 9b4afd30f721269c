//! Backend Collaborator
//!
//! The remote employee store, reachable only through its REST contract.
//! `HttpBackend` talks to the real service; tests plug in stubs.

mod http;

use async_trait::async_trait;

use crate::error::RequestResult;
use crate::models::{Employee, EmployeeDraft, EmployeeId};

pub use http::HttpBackend;

/// CRUD operations offered by the employee service
///
/// `?Send` because the dashboard runs on a single-threaded WASM executor.
#[async_trait(?Send)]
pub trait EmployeeBackend {
    /// `GET /employees`
    async fn list(&self) -> RequestResult<Vec<Employee>>;

    /// `POST /employees`
    async fn create(&self, draft: &EmployeeDraft) -> RequestResult<()>;

    /// `PUT /employees/{id}`
    async fn update(&self, id: &EmployeeId, draft: &EmployeeDraft) -> RequestResult<()>;

    /// `DELETE /employees/{id}`
    async fn delete(&self, id: &EmployeeId) -> RequestResult<()>;
}
