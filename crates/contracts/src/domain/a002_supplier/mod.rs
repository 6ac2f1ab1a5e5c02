pub mod aggregate;

pub use aggregate::{Supplier, SupplierDraft};
