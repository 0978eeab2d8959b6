// src/mailings/transport.rs

use crate::config::MailConfig;
use crate::errors::PipelineError;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use tracing::info;

/// Delivers one rendered HTML email.
pub trait MailTransport {
    fn send_html(&self, to: &str, subject: &str, html: &str) -> Result<(), PipelineError>;
}

/// SMTP with STARTTLS, authenticated as the sender.
pub struct SmtpMailer {
    sender: Mailbox,
    transport: SmtpTransport,
}

impl SmtpMailer {
    pub fn new(config: &MailConfig) -> Result<Self, PipelineError> {
        let sender = config.sender_email.parse::<Mailbox>().map_err(|e| {
            PipelineError::ConfigError(format!(
                "SENDER_EMAIL '{}' is not an address: {e}",
                config.sender_email
            ))
        })?;

        let transport = SmtpTransport::starttls_relay(&config.smtp_server)
            .map_err(|e| {
                PipelineError::MailTransportError(format!(
                    "Failed to set up relay {}: {e}",
                    config.smtp_server
                ))
            })?
            .port(config.smtp_port)
            .credentials(Credentials::new(
                config.sender_email.clone(),
                config.sender_password.clone(),
            ))
            .build();

        Ok(Self { sender, transport })
    }
}

impl MailTransport for SmtpMailer {
    fn send_html(&self, to: &str, subject: &str, html: &str) -> Result<(), PipelineError> {
        let recipient = to.parse::<Mailbox>().map_err(|e| {
            PipelineError::MailTransportError(format!("Invalid recipient '{to}': {e}"))
        })?;

        let message = Message::builder()
            .from(self.sender.clone())
            .to(recipient)
            .subject(subject)
            .header(ContentType::TEXT_HTML)
            .body(html.to_string())
            .map_err(|e| PipelineError::MailTransportError(format!("Failed to build email: {e}")))?;

        self.transport.send(&message).map_err(|e| {
            PipelineError::MailTransportError(format!("Failed to send email to {to}: {e}"))
        })?;

        Ok(())
    }
}

/// Logs instead of sending.
pub struct DryRunMailer;

impl MailTransport for DryRunMailer {
    fn send_html(&self, to: &str, subject: &str, html: &str) -> Result<(), PipelineError> {
        info!(to, subject, bytes = html.len(), "Dry run; email not sent");
        Ok(())
    }
}
