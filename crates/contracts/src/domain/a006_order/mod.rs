pub mod aggregate;

pub use aggregate::{Order, OrderDetail, OrderDraft};
