pub mod csv;
pub mod fetch;
