//! Infrastructure layer implementing the interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - Link registry storage

pub mod persistence;
