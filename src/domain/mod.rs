pub mod billing;
pub mod due_date;
pub mod member;
pub mod money;
pub mod reminder;
pub mod text;

pub use billing::{BillingBatch, BillingLine, LineItem};
pub use due_date::DueDate;
pub use member::RosterRecord;
pub use reminder::{ReminderEmail, ReminderLine};
