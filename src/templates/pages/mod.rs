pub mod reminder;

pub use reminder::reminder_page;
