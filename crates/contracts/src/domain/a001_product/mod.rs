pub mod aggregate;
pub mod payload;
