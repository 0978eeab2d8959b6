pub mod expenses_table;

pub use expenses_table::{expenses_table, total_row};
