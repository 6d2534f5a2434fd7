use serde::{Deserialize, Serialize};
use std::fmt;

/// Someone taking part in the draw. Compared by name and address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Participant {
    pub name: String,
    #[serde(rename = "email")]
    pub address: String,
}

impl Participant {
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
        }
    }

    /// First and middle names: every word of `name` but the last.
    pub fn firstname(&self) -> String {
        let words: Vec<&str> = self.name.split_whitespace().collect();
        match words.split_last() {
            Some((_, rest)) => rest.join(" "),
            None => String::new(),
        }
    }
}

/// `giver` gives a present to `receiver`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pair<T> {
    pub giver: T,
    pub receiver: T,
}

impl<T: PartialEq> Pair<T> {
    pub fn is_self_pair(&self) -> bool {
        self.giver == self.receiver
    }
}

/// A rendered notification for one giver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    pub subject: String,
    pub from: String,
    pub to: String,
    pub body: String,
}

impl fmt::Display for Message {
    /// Header block, blank line, body.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "From: {}\nTo: {}\nSubject: {}\n\n{}",
            self.from, self.to, self.subject, self.body
        )
    }
}

/// Metadata shared by every message of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageSettings {
    pub subject: String,
    pub sender: String,
}

impl Default for MessageSettings {
    fn default() -> Self {
        Self {
            subject: "Secret Santa".to_string(),
            sender: "secret_santa@example.com".to_string(),
        }
    }
}

/// Outcome of handing a batch of messages to delivery.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DispatchReport {
    pub sent: usize,
    pub failed: usize,
    pub previewed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_firstname_keeps_middle_names() {
        let jane = Participant::new("Jane B. Doe", "jane@example.com");
        assert_eq!(jane.firstname(), "Jane B.");
    }

    #[test]
    fn test_firstname_of_single_word_is_empty() {
        assert_eq!(Participant::new("Cher", "cher@example.com").firstname(), "");
        assert_eq!(Participant::new("", "nobody@example.com").firstname(), "");
    }

    #[test]
    fn test_firstname_collapses_whitespace() {
        let p = Participant::new("  Mary   Ann  Smith ", "mary@example.com");
        assert_eq!(p.firstname(), "Mary Ann");
    }

    #[test]
    fn test_participants_compare_structurally() {
        let a = Participant::new("John Smith", "john@example.com");
        let b = Participant::new("John Smith", "john@example.com");
        let c = Participant::new("John Smith", "john.smith@example.com");

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(Pair { giver: a.clone(), receiver: b }.is_self_pair());
        assert!(!Pair { giver: a, receiver: c }.is_self_pair());
    }
}
