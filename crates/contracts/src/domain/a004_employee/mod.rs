pub mod aggregate;

pub use aggregate::{Employee, EmployeeDraft};
