pub mod export_csv;
pub mod ledger;
pub mod membership;

pub use ledger::{read_ledger_export, LedgerRow};
pub use membership::read_membership_export;
