pub mod parser;
pub mod preview;

pub use parser::parse_csv;
pub use preview::{render, select_preview_rows};
