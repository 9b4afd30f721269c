//! Employee Dashboard Core
//!
//! Everything the dashboard does apart from drawing: the employee model,
//! form validation, the state reducer, the REST client and the controller
//! tying them together. Platform neutral, so it runs natively under test and
//! inside the WASM frontend.

pub mod backend;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod models;
pub mod state;
pub mod validation;


pub use backend::{EmployeeBackend, HttpBackend};
pub use config::{DashboardConfig, LoadFailurePolicy};
pub use dashboard::{Dashboard, StateCell, Timer};
pub use error::{RequestError, RequestResult, ValidationError};
pub use models::{DraftField, Employee, EmployeeDraft, EmployeeId, SubmitMode};
pub use state::{Action, DashboardState, MessageKind, StatusMessage};
