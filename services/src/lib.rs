pub mod column_datum_service;
pub mod error;
pub mod policy;
pub mod validation;
pub mod visibility;

pub use error::ServiceError;
