use crate::domain::model::Message;
use crate::domain::ports::Delivery;
use crate::utils::error::{Result, SantaError};
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::{SmtpTransport, Transport};

/// Sends messages through a plain SMTP relay.
pub struct SmtpDelivery {
    transport: SmtpTransport,
}

impl SmtpDelivery {
    /// Relay without TLS or authentication, as offered by internal mail hosts.
    pub fn relay(host: &str, port: u16) -> Self {
        let transport = SmtpTransport::builder_dangerous(host).port(port).build();
        Self { transport }
    }

    fn build(message: &Message) -> std::result::Result<lettre::Message, String> {
        let from = message.from.parse::<Mailbox>().map_err(|e| format!("invalid sender: {}", e))?;
        let to = message.to.parse::<Mailbox>().map_err(|e| format!("invalid recipient: {}", e))?;

        lettre::Message::builder()
            .from(from)
            .to(to)
            .subject(message.subject.clone())
            .header(ContentType::TEXT_PLAIN)
            .body(message.body.clone())
            .map_err(|e| e.to_string())
    }
}

impl Delivery for SmtpDelivery {
    fn deliver(&mut self, message: &Message) -> Result<()> {
        let email = Self::build(message).map_err(|reason| SantaError::Delivery {
            to: message.to.clone(),
            message: reason,
        })?;

        self.transport
            .send(&email)
            .map_err(|e| SantaError::Delivery {
                to: message.to.clone(),
                message: e.to_string(),
            })?;

        tracing::debug!("Message delivered to {}", message.to);
        Ok(())
    }
}
