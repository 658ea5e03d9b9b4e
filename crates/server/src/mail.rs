//! Outbound mail delivery over SMTP with STARTTLS.

use crate::config::SmtpConfig;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MailError {
    #[error("invalid mail address: {0}")]
    Address(#[from] lettre::address::AddressError),
    #[error("failed to build message: {0}")]
    Build(#[from] lettre::error::Error),
    #[error("{0}")]
    Transport(#[from] lettre::transport::smtp::Error),
}

/// SMTP transport when configured, otherwise a no-op that logs the drop.
pub enum Mailer {
    Smtp {
        transport: AsyncSmtpTransport<Tokio1Executor>,
        from: Mailbox,
    },
    Disabled,
}

impl Mailer {
    pub fn from_config(smtp: Option<&SmtpConfig>) -> Result<Self, MailError> {
        let Some(config) = smtp else {
            return Ok(Self::Disabled);
        };

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)?
            .port(config.port)
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .build();
        let from: Mailbox = config.from_address.parse()?;

        Ok(Self::Smtp { transport, from })
    }

    pub async fn send(&self, to: &str, subject: &str, body: String) -> Result<(), MailError> {
        match self {
            Self::Smtp { transport, from } => {
                let message = Message::builder()
                    .from(from.clone())
                    .to(to.parse()?)
                    .subject(subject)
                    .body(body)?;
                transport.send(message).await?;
                Ok(())
            }
            Self::Disabled => {
                log::warn!("mail transport disabled, dropping message to {to}");
                Ok(())
            }
        }
    }
}
