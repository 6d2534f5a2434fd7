use crate::core::pairing::create_pairs;
use crate::core::render::create_messages;
use crate::core::template::Template;
use crate::domain::model::{DispatchReport, Message, MessageSettings, Pair, Participant};
use crate::domain::ports::{Delivery, EventLog, RandomSource};
use crate::utils::error::{Result, SantaError};
use crate::utils::validation::validate_positive_number;

/// Runs one draw: pairing, rendering, then delivery or preview.
pub struct SantaEngine<R: RandomSource, L: EventLog> {
    rng: R,
    log: L,
    template: Template,
    settings: MessageSettings,
}

impl<R: RandomSource, L: EventLog> SantaEngine<R, L> {
    pub fn new(rng: R, log: L, template: Template, settings: MessageSettings) -> Self {
        Self {
            rng,
            log,
            template,
            settings,
        }
    }

    pub fn log(&self) -> &L {
        &self.log
    }

    /// Draws receivers for everyone and renders their messages.
    ///
    /// A self-pair anywhere in the draw yields [`SantaError::NothingSent`] and
    /// no messages at all; the full pairing is logged as a warning.
    pub fn draw(&mut self, participants: &[Participant]) -> Result<Vec<Message>> {
        validate_positive_number("participants", participants.len(), 2)?;

        let pairs = create_pairs(participants, &mut self.rng);
        self.log.debug(&format!("Drew {} pairs", pairs.len()));

        match create_messages(&pairs, &self.template, &self.settings, &self.log) {
            Ok(messages) => Ok(messages),
            Err(violation @ SantaError::PairingViolation { .. }) => {
                // 記錄完整配對以便排查
                self.log.warning("No messages have been sent, try again.");
                self.log.warning(&describe_pairs(&pairs));
                Err(SantaError::NothingSent(Box::new(violation)))
            }
            Err(e) => Err(e),
        }
    }

    /// Hands every message to `delivery`. Without a transport this is a dry
    /// run and only the first message is shown.
    ///
    /// A failed message is logged and counted; the rest are still sent.
    pub fn dispatch(
        &self,
        messages: &[Message],
        delivery: Option<&mut dyn Delivery>,
    ) -> DispatchReport {
        let mut report = DispatchReport::default();

        let Some(delivery) = delivery else {
            self.log.warning(
                "\nNo messages were sent! If this was not intended, use the '--send' flag!\n",
            );
            if let Some(first) = messages.first() {
                self.log
                    .info(&format!("This is an example message:\n{}", first.body));
            }
            report.previewed = true;
            return report;
        };

        self.log.info("\nSending messages..");
        for message in messages {
            match delivery.deliver(message) {
                Ok(()) => report.sent += 1,
                Err(e) => {
                    self.log
                        .error(&format!("Message could not be sent!\n{}\n{}", e, message));
                    report.failed += 1;
                }
            }
        }

        self.log.info(&format!(
            "{} of {} messages sent",
            report.sent,
            messages.len()
        ));
        report
    }
}

fn describe_pairs(pairs: &[Pair<Participant>]) -> String {
    serde_json::to_string_pretty(pairs)
        .unwrap_or_else(|e| format!("<pairing could not be serialized: {}>", e))
}
