pub mod billing_table;
pub mod report;
pub mod roster_loader;

pub use billing_table::build_billing_table;
pub use roster_loader::generate_roster_snapshot;
