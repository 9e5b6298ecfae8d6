pub mod format;
pub mod table;

pub use format::{format_percentage, format_price, summary_line};
pub use table::{Align, Table};
