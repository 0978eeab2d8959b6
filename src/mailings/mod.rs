mod campaign;
mod reminder;
mod transport;

pub use campaign::{preview_path, send_reminders, MailSummary, ReminderOptions};
pub use transport::{DryRunMailer, MailTransport, SmtpMailer};
