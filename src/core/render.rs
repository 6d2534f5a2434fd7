use crate::core::template::{title_case, Template};
use crate::domain::model::{Message, MessageSettings, Pair, Participant};
use crate::domain::ports::EventLog;
use crate::utils::error::{Result, SantaError};
use std::collections::HashMap;

/// Renders the message telling `giver` whom they have drawn.
///
/// Fails with [`SantaError::PairingViolation`] before rendering anything when
/// `giver` and `receiver` are the same participant.
pub fn create_message<L: EventLog + ?Sized>(
    giver: &Participant,
    receiver: &Participant,
    template: &Template,
    settings: &MessageSettings,
    log: &L,
) -> Result<Message> {
    if giver == receiver {
        log.warning(&"-".repeat(80));
        log.warning(&format!(
            "{:<32} is the same as {:>32}",
            giver.name, receiver.name
        ));
        return Err(SantaError::PairingViolation {
            giver: giver.name.clone(),
            receiver: receiver.name.clone(),
        });
    }

    let mut values = HashMap::new();
    values.insert("secret_santa", title_case(&giver.firstname()));
    values.insert("receiver", title_case(&receiver.name));
    let body = template.substitute(&values)?;

    log.info(&format!(
        "{:<33} was assigned {:>33}",
        giver.name, receiver.name
    ));

    Ok(Message {
        subject: settings.subject.clone(),
        from: settings.sender.clone(),
        to: giver.address.clone(),
        body,
    })
}

/// Renders one message per pair. The first self-pair aborts the whole batch.
pub fn create_messages<L: EventLog + ?Sized>(
    pairs: &[Pair<Participant>],
    template: &Template,
    settings: &MessageSettings,
    log: &L,
) -> Result<Vec<Message>> {
    pairs
        .iter()
        .map(|pair| create_message(&pair.giver, &pair.receiver, template, settings, log))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::logger::CapturedLog;

    fn jane() -> Participant {
        Participant::new("jane b. doe", "jane@example.com")
    }

    fn john() -> Participant {
        Participant::new("JOHN SMITH", "john@example.com")
    }

    #[test]
    fn test_message_is_personalised() {
        let template = Template::new("    Dear ${secret_santa},\n    you drew ${receiver}.\n");
        let settings = MessageSettings::default();
        let log = CapturedLog::new();

        let message = create_message(&jane(), &john(), &template, &settings, &log).unwrap();

        assert_eq!(message.body, "Dear Jane B.,\nyou drew John Smith.\n");
        assert_eq!(message.to, "jane@example.com");
        assert_eq!(message.from, settings.sender);
        assert_eq!(message.subject, settings.subject);
        assert_eq!(log.infos().len(), 1);
        assert!(log.infos()[0].contains("was assigned"));
    }

    #[test]
    fn test_self_pair_is_rejected() {
        let log = CapturedLog::new();
        let result = create_message(
            &jane(),
            &jane(),
            &Template::default(),
            &MessageSettings::default(),
            &log,
        );

        assert!(matches!(result, Err(SantaError::PairingViolation { .. })));
        assert!(log.infos().is_empty());
        assert_eq!(log.warnings().len(), 2);
        assert_eq!(log.warnings()[0], "-".repeat(80));
        assert!(log.warnings()[1].contains("is the same as"));
    }

    #[test]
    fn test_batch_aborts_on_any_self_pair() {
        let pairs = vec![
            Pair { giver: jane(), receiver: john() },
            Pair { giver: john(), receiver: john() },
            Pair { giver: john(), receiver: jane() },
        ];
        let log = CapturedLog::new();

        let result = create_messages(&pairs, &Template::default(), &MessageSettings::default(), &log);

        assert!(matches!(result, Err(SantaError::PairingViolation { .. })));
        // the pair after the violation is never rendered
        assert_eq!(log.infos().len(), 1);
    }

    #[test]
    fn test_batch_renders_every_pair() {
        let pairs = vec![
            Pair { giver: jane(), receiver: john() },
            Pair { giver: john(), receiver: jane() },
        ];
        let log = CapturedLog::new();

        let messages =
            create_messages(&pairs, &Template::default(), &MessageSettings::default(), &log).unwrap();

        assert_eq!(messages.len(), 2);
        assert!(messages[0].body.contains("You have drawn John Smith."));
        assert!(messages[1].body.starts_with("Dear John,"));
    }
}
