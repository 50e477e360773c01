pub mod config;
pub mod paginate;
pub mod state;
