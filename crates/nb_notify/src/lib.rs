use async_trait::async_trait;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use nb_core::{Config, DigestLine, DigestNotifier, Error, Result};
use tracing::info;

/// Render the digest body: a 1-indexed numbered list, one line per
/// summary, in input order.
pub fn format_digest(lines: &[DigestLine]) -> String {
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| format!("{}. {}", i + 1, line))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Sends the digest over an authenticated SMTP relay with a STARTTLS
/// upgrade on the submission port. One session per message, closed after
/// sending.
pub struct SmtpNotifier {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpNotifier {
    pub fn new(host: &str, port: u16, username: String, password: String, from: &str) -> Result<Self> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(host)
            .map_err(|e| Error::Notify(format!("invalid relay {}: {}", host, e)))?
            .port(port)
            .credentials(Credentials::new(username, password))
            .build();
        Ok(Self {
            transport,
            from: parse_mailbox(from)?,
        })
    }

    /// Build a notifier from the environment-resolved configuration.
    /// Credentials and sender are required here, not at startup, so runs
    /// that never deliver (memory backend, dry runs) need none of them.
    pub fn from_config(config: &Config) -> Result<Self> {
        let username = config
            .smtp_username
            .clone()
            .ok_or_else(|| Error::Config("SMTP_USERNAME is not set".to_string()))?;
        let password = config
            .smtp_password
            .clone()
            .ok_or_else(|| Error::Config("SMTP_PASSWORD is not set".to_string()))?;
        let from = config
            .digest_from
            .clone()
            .ok_or_else(|| Error::Config("DIGEST_FROM is not set".to_string()))?;
        Self::new(&config.smtp_host, config.smtp_port, username, password, &from)
    }
}

fn parse_mailbox(address: &str) -> Result<Mailbox> {
    address
        .parse()
        .map_err(|e| Error::Notify(format!("invalid address {}: {}", address, e)))
}

#[async_trait]
impl DigestNotifier for SmtpNotifier {
    async fn notify(&self, subject: &str, lines: &[DigestLine], recipient: &str) -> Result<()> {
        let message = Message::builder()
            .from(self.from.clone())
            .to(parse_mailbox(recipient)?)
            .subject(subject)
            .body(format_digest(lines))
            .map_err(|e| Error::Notify(format!("failed to build message: {}", e)))?;

        self.transport
            .send(message)
            .await
            .map_err(|e| Error::Notify(format!("delivery failed: {}", e)))?;
        info!(recipient, count = lines.len(), "digest email sent");
        Ok(())
    }
}

/// Stand-in used when no SMTP credentials are configured: writes the digest
/// to the log instead of delivering it, so a run without secrets still
/// completes.
#[derive(Debug, Clone, Default)]
pub struct LogNotifier;

#[async_trait]
impl DigestNotifier for LogNotifier {
    async fn notify(&self, subject: &str, lines: &[DigestLine], recipient: &str) -> Result<()> {
        info!(subject, recipient, "digest not delivered, no SMTP configured:\n{}", format_digest(lines));
        Ok(())
    }
}
