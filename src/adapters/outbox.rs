use crate::domain::model::Message;
use crate::domain::ports::Delivery;
use crate::utils::error::{Result, SantaError};
use std::fs;
use std::path::{Path, PathBuf};

/// Writes every message as a text file into a directory instead of mailing it.
#[derive(Debug, Clone)]
pub struct OutboxDelivery {
    base_path: PathBuf,
    written: usize,
}

impl OutboxDelivery {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            written: 0,
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    fn file_name(&self, message: &Message) -> String {
        let recipient: String = message
            .to
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || "@._-".contains(c) { c } else { '_' })
            .collect();
        format!("{:03}-{}.eml", self.written + 1, recipient)
    }
}

impl Delivery for OutboxDelivery {
    fn deliver(&mut self, message: &Message) -> Result<()> {
        let full_path = self.base_path.join(self.file_name(message));

        let write = || -> std::io::Result<()> {
            fs::create_dir_all(&self.base_path)?;
            fs::write(&full_path, message.to_string())
        };

        write().map_err(|e| SantaError::Delivery {
            to: message.to.clone(),
            message: format!("{}: {}", full_path.display(), e),
        })?;

        self.written += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn message(to: &str) -> Message {
        Message {
            subject: "Secret Santa".to_string(),
            from: "santa@example.com".to_string(),
            to: to.to_string(),
            body: "Dear Jane,\n".to_string(),
        }
    }

    #[test]
    fn test_messages_are_written_in_order() {
        let temp_dir = TempDir::new().unwrap();
        let mut outbox = OutboxDelivery::new(temp_dir.path().join("outbox"));

        outbox.deliver(&message("jane@example.com")).unwrap();
        outbox.deliver(&message("john smith@example.com")).unwrap();

        let first = fs::read_to_string(outbox.base_path().join("001-jane@example.com.eml")).unwrap();
        assert_eq!(
            first,
            "From: santa@example.com\nTo: jane@example.com\nSubject: Secret Santa\n\nDear Jane,\n"
        );
        assert!(outbox.base_path().join("002-john_smith@example.com.eml").exists());
    }

    #[test]
    fn test_unwritable_outbox_is_a_delivery_error() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("not-a-dir");
        fs::write(&blocker, "").unwrap();

        let mut outbox = OutboxDelivery::new(&blocker);
        let err = outbox.deliver(&message("jane@example.com")).unwrap_err();

        assert!(matches!(err, SantaError::Delivery { .. }));
    }
}
