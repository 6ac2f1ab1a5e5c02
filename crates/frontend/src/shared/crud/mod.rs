//! Generic entity CRUD core
//!
//! One controller/form/table trio parameterized by the `Entity` descriptor,
//! instantiated once per shop entity instead of six hand-written pages.

pub mod collection;
pub mod controller;
pub mod form;
pub mod table;
