use crate::utils::error::{Result, SantaError};
use regex::Regex;
use std::collections::HashMap;
use std::path::Path;
use std::sync::OnceLock;

/// Message template shipped with the binary.
pub const DEFAULT_TEMPLATE: &str = include_str!("../../templates/MESSAGE_FROM_SANTA");

fn placeholder_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(
            r"(?i)\$(?:(?P<escaped>\$)|(?P<named>[_a-z][_a-z0-9]*)|\{(?P<braced>[_a-z][_a-z0-9]*)\}|(?P<invalid>))",
        )
        .expect("placeholder pattern is valid")
    })
}

/// A message body with `$name` / `${name}` placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
}

impl Template {
    /// Builds a template, stripping the indentation shared by all lines.
    /// `\r\n` line endings are read as `\n`.
    pub fn new(source: &str) -> Self {
        Self {
            source: dedent(&source.replace("\r\n", "\n")),
        }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SantaError::Io)?;
        Ok(Self::new(&content))
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Names of all placeholders the template refers to.
    pub fn placeholders(&self) -> Vec<String> {
        let mut names = Vec::new();
        for caps in placeholder_pattern().captures_iter(&self.source) {
            if let Some(name) = caps.name("named").or_else(|| caps.name("braced")) {
                if !names.iter().any(|n| n == name.as_str()) {
                    names.push(name.as_str().to_string());
                }
            }
        }
        names
    }

    pub fn substitute(&self, values: &HashMap<&str, String>) -> Result<String> {
        let mut rendered = String::with_capacity(self.source.len());
        let mut last = 0;

        for caps in placeholder_pattern().captures_iter(&self.source) {
            let whole = caps.get(0).expect("group 0 always matches");
            rendered.push_str(&self.source[last..whole.start()]);
            last = whole.end();

            if caps.name("escaped").is_some() {
                rendered.push('$');
                continue;
            }

            if let Some(name) = caps.name("named").or_else(|| caps.name("braced")) {
                let value = values.get(name.as_str()).ok_or_else(|| SantaError::Template {
                    message: format!("no value for placeholder '{}'", name.as_str()),
                })?;
                rendered.push_str(value);
                continue;
            }

            let line = self.source[..whole.start()].matches('\n').count() + 1;
            return Err(SantaError::Template {
                message: format!("invalid placeholder on line {}", line),
            });
        }

        rendered.push_str(&self.source[last..]);
        Ok(rendered)
    }
}

impl Default for Template {
    fn default() -> Self {
        Self::new(DEFAULT_TEMPLATE)
    }
}

/// Removes the leading whitespace common to every non-blank line.
/// Whitespace-only lines are emptied and ignored when measuring.
pub fn dedent(text: &str) -> String {
    let margin = text
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .map(|line| &line[..line.len() - line.trim_start_matches([' ', '\t']).len()])
        .reduce(|common, indent| {
            let shared: usize = common
                .chars()
                .zip(indent.chars())
                .take_while(|(a, b)| a == b)
                .map(|(a, _)| a.len_utf8())
                .sum();
            &common[..shared]
        })
        .unwrap_or("");

    text.split('\n')
        .map(|line| {
            if line.trim().is_empty() {
                ""
            } else {
                line.strip_prefix(margin).unwrap_or(line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Capitalises the first letter of every word and lower-cases the rest.
/// A word starts after any character that is not a letter.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_is_letter = false;

    for c in text.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }

    out
}
