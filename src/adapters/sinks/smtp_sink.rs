use chrono::NaiveDate;
use lettre::message::header::ContentType;
use lettre::message::{Mailbox, Message};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{SmtpTransport, Transport};

use crate::config::app_config::MailSettings;
use crate::core::errors::{LatchscanError, Result};
use crate::core::traits::sink::ReportSink;

/// Subject line for the report mail.
pub fn subject_for(date: NaiveDate) -> String {
    format!("Latchscan results for {}", date.format("%Y-%m-%d"))
}

/// Mails the report over SMTP with STARTTLS and password authentication.
///
/// One blocking exchange per delivery; failures are returned, not retried.
pub struct SmtpSink {
    sender: Mailbox,
    recipients: Vec<Mailbox>,
    transport: SmtpTransport,
}

impl SmtpSink {
    /// Validate addresses and prepare the transport. No connection is made
    /// until `deliver`.
    pub fn from_settings(settings: &MailSettings) -> Result<Self> {
        let sender = parse_mailbox(&settings.sender, "sender")?;
        let recipients = parse_recipients(&settings.recipients)?;

        let transport = SmtpTransport::starttls_relay(settings.server.trim())
            .map_err(|e| LatchscanError::InvalidConfig {
                detail: format!("mail server '{}': {e}", settings.server),
            })?
            .port(settings.port)
            .credentials(Credentials::new(
                settings.user.clone(),
                settings.pass.clone(),
            ))
            .build();

        Ok(Self {
            sender,
            recipients,
            transport,
        })
    }

    /// Build the message without sending it.
    fn build_message(&self, date: NaiveDate, csv: &str) -> Result<Message> {
        build_message(&self.sender, &self.recipients, date, csv)
    }
}

fn parse_mailbox(address: &str, role: &str) -> Result<Mailbox> {
    address
        .trim()
        .parse::<Mailbox>()
        .map_err(|e| LatchscanError::InvalidConfig {
            detail: format!("invalid mail {role} '{address}': {e}"),
        })
}

fn parse_recipients(addresses: &[String]) -> Result<Vec<Mailbox>> {
    let recipients = addresses
        .iter()
        .filter(|a| !a.trim().is_empty())
        .map(|a| parse_mailbox(a, "recipient"))
        .collect::<Result<Vec<_>>>()?;

    if recipients.is_empty() {
        return Err(LatchscanError::InvalidConfig {
            detail: "mail recipients list is empty".into(),
        });
    }
    Ok(recipients)
}

fn build_message(
    sender: &Mailbox,
    recipients: &[Mailbox],
    date: NaiveDate,
    csv: &str,
) -> Result<Message> {
    let mut builder = Message::builder()
        .from(sender.clone())
        .subject(subject_for(date))
        .header(ContentType::TEXT_PLAIN);
    for rcpt in recipients {
        builder = builder.to(rcpt.clone());
    }

    builder
        .body(csv.to_string())
        .map_err(|e| LatchscanError::MailFailed {
            reason: format!("could not build message: {e}"),
        })
}

impl ReportSink for SmtpSink {
    fn deliver(&mut self, date: NaiveDate, csv: &str) -> Result<()> {
        let message = self.build_message(date, csv)?;

        self.transport
            .send(&message)
            .map_err(|e| LatchscanError::MailFailed {
                reason: e.to_string(),
            })?;
        Ok(())
    }

    fn name(&self) -> &str {
        "mail"
    }
}
