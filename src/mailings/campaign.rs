use crate::config::BillingPolicy;
use crate::domain::money::format_plain;
use crate::domain::{BillingLine, ReminderEmail};
use crate::errors::PipelineError;
use crate::mailings::reminder::group_reminders;
use crate::mailings::transport::MailTransport;
use crate::templates::reminder_page;

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info};

#[derive(Debug, Default, Clone)]
pub struct ReminderOptions {
    /// Only mail the member with exactly this roster name.
    pub only: Option<String>,
    /// Also save each rendered email as `teste_<name>.html` here.
    pub preview_dir: Option<PathBuf>,
    /// Send every email to this address instead of the member's.
    pub recipient_override: Option<String>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MailSummary {
    pub sent: usize,
    pub failed: usize,
    pub skipped: usize,
}

/// Renders and sends one reminder per member.
///
/// A failed send is logged and counted; the loop moves on to the next member.
/// Only a failure to write a preview file aborts the run.
pub fn send_reminders(
    lines: &[BillingLine],
    policy: &BillingPolicy,
    transport: &dyn MailTransport,
    options: &ReminderOptions,
) -> Result<MailSummary, PipelineError> {
    let mut summary = MailSummary::default();

    for reminder in group_reminders(lines, policy) {
        if let Some(only) = options.only.as_deref() {
            if reminder.member_name != only {
                summary.skipped += 1;
                continue;
            }
        }

        info!(
            "Encaminhando descritivo para {} com o valor de R$ {}",
            reminder.member_name,
            format_plain(reminder.total())
        );

        let html = reminder_page(&reminder).into_string();

        if let Some(dir) = options.preview_dir.as_deref() {
            write_preview(dir, &reminder, &html)?;
        }

        let to = options
            .recipient_override
            .as_deref()
            .unwrap_or(reminder.recipient.as_str());

        match transport.send_html(to, &reminder.subject(), &html) {
            Ok(()) => {
                summary.sent += 1;
                info!(member = %reminder.member_name, to, "Email sent");
            }
            Err(e) => {
                summary.failed += 1;
                error!(member = %reminder.member_name, to, error = %e, "Failed to send email");
            }
        }
    }

    info!(
        sent = summary.sent,
        failed = summary.failed,
        skipped = summary.skipped,
        "Reminder run finished"
    );

    Ok(summary)
}

pub fn preview_path(dir: &Path, member_name: &str) -> PathBuf {
    let safe: String = member_name
        .chars()
        .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
        .collect();
    dir.join(format!("teste_{safe}.html"))
}

fn write_preview(dir: &Path, reminder: &ReminderEmail, html: &str) -> Result<(), PipelineError> {
    let path = preview_path(dir, &reminder.member_name);
    fs::write(&path, html).map_err(|e| {
        PipelineError::ExportIoError(format!("Failed to write preview {}: {e}", path.display()))
    })
}
