//! UI Components
//!
//! Leptos components for the dashboard page.

mod delete_confirm_button;
mod employee_form;
mod employee_row;
mod employee_table;
mod status_banner;

pub use delete_confirm_button::DeleteConfirmButton;
pub use employee_form::EmployeeForm;
pub use employee_row::EmployeeRow;
pub use employee_table::EmployeeTable;
pub use status_banner::StatusBanner;
