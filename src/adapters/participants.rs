use crate::domain::model::Participant;
use crate::utils::error::{Result, SantaError};
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;

/// Layout of the participant file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ParticipantFormat {
    /// CSV with a `name,email` header row
    #[default]
    Csv,
    /// One `name, email` entry per line, no header
    Lines,
}

pub fn read_participants<P: AsRef<Path>>(path: P, format: ParticipantFormat) -> Result<Vec<Participant>> {
    let file = std::fs::File::open(&path)?;
    match format {
        ParticipantFormat::Csv => parse_csv(file),
        ParticipantFormat::Lines => {
            let mut content = String::new();
            std::io::BufReader::new(file).read_to_string(&mut content)?;
            parse_lines(&content)
        }
    }
}

pub fn parse_csv<R: Read>(reader: R) -> Result<Vec<Participant>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut participants = Vec::new();
    for row in reader.deserialize::<Participant>() {
        participants.push(row?);
    }
    Ok(participants)
}

pub fn parse_lines(content: &str) -> Result<Vec<Participant>> {
    let mut participants = Vec::new();

    for (index, line) in content.lines().enumerate() {
        // 跳過空行
        if line.trim().is_empty() {
            continue;
        }

        let malformed = |message: &str| SantaError::Participants {
            line: index + 1,
            message: message.to_string(),
        };

        let (name, address) = line
            .split_once(',')
            .ok_or_else(|| malformed("expected 'full name, email address'"))?;
        let (name, address) = (name.trim(), address.trim());

        if name.is_empty() {
            return Err(malformed("name is empty"));
        }
        if address.is_empty() {
            return Err(malformed("email address is empty"));
        }

        participants.push(Participant::new(name, address));
    }

    Ok(participants)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_csv_with_header() {
        let data = "name,email\nJane B. Doe, jane@example.com\nJohn Smith,john@example.com\n";
        let participants = parse_csv(data.as_bytes()).unwrap();

        assert_eq!(
            participants,
            vec![
                Participant::new("Jane B. Doe", "jane@example.com"),
                Participant::new("John Smith", "john@example.com"),
            ]
        );
    }

    #[test]
    fn test_parse_csv_ignores_extra_columns() {
        let data = "email,team,name\njane@example.com,blue,Jane Doe\n";
        let participants = parse_csv(data.as_bytes()).unwrap();
        assert_eq!(participants, vec![Participant::new("Jane Doe", "jane@example.com")]);
    }

    #[test]
    fn test_parse_csv_missing_column_fails() {
        let data = "name\nJane Doe\n";
        assert!(matches!(parse_csv(data.as_bytes()), Err(SantaError::Csv(_))));
    }

    #[test]
    fn test_parse_lines() {
        let content = "Jane B. Doe, jane@example.com\n\n  John Smith ,john@example.com  \n";
        let participants = parse_lines(content).unwrap();

        assert_eq!(
            participants,
            vec![
                Participant::new("Jane B. Doe", "jane@example.com"),
                Participant::new("John Smith", "john@example.com"),
            ]
        );
    }

    #[test]
    fn test_parse_lines_reports_bad_line() {
        let content = "Jane Doe, jane@example.com\nJohn Smith john@example.com\n";
        match parse_lines(content) {
            Err(SantaError::Participants { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected a participant error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_lines_rejects_empty_address() {
        assert!(parse_lines("Jane Doe,   \n").is_err());
    }
}
