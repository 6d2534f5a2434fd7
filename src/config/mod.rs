#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::adapters::ParticipantFormat;
use crate::domain::model::MessageSettings;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_path, validate_positive_number, Validate};
use serde::Serialize;
use std::path::PathBuf;
use toml_config::TomlConfig;

pub const DEFAULT_SMTP_HOST: &str = "localhost";
pub const DEFAULT_SMTP_PORT: u16 = 25;

/// Effective settings of one run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Settings {
    pub participants_file: String,
    pub format: ParticipantFormat,
    pub template: Option<PathBuf>,
    pub message: MessageSettings,
    pub smtp_host: String,
    pub smtp_port: u16,
    pub outbox: Option<PathBuf>,
    pub send: bool,
    pub seed: Option<u64>,
}

impl Settings {
    pub fn new(participants_file: impl Into<String>) -> Self {
        Self {
            participants_file: participants_file.into(),
            format: ParticipantFormat::default(),
            template: None,
            message: MessageSettings::default(),
            smtp_host: DEFAULT_SMTP_HOST.to_string(),
            smtp_port: DEFAULT_SMTP_PORT,
            outbox: None,
            send: false,
            seed: None,
        }
    }

    /// Takes values from the settings file where it has them.
    pub fn with_file(mut self, file: &TomlConfig) -> Self {
        if let Some(subject) = file.subject() {
            self.message.subject = subject.to_string();
        }
        if let Some(sender) = file.sender() {
            self.message.sender = sender.to_string();
        }
        if let Some(template) = file.template() {
            self.template = Some(template.to_path_buf());
        }
        if let Some(host) = file.smtp_host() {
            self.smtp_host = host.to_string();
        }
        if let Some(port) = file.smtp_port() {
            self.smtp_port = port;
        }
        if let Some(format) = file.format() {
            self.format = format;
        }
        self
    }

    /// Command line flags over the `--config` file over built-in defaults.
    #[cfg(feature = "cli")]
    pub fn from_cli(cli: &cli::CliConfig) -> Result<Self> {
        let mut settings = Self::new(cli.participants_file.clone());
        if let Some(path) = &cli.config {
            settings = settings.with_file(&TomlConfig::from_file(path)?);
        }

        if let Some(subject) = &cli.subject {
            settings.message.subject = subject.clone();
        }
        if let Some(sender) = &cli.sender {
            settings.message.sender = sender.clone();
        }
        if let Some(template) = &cli.template {
            settings.template = Some(template.clone());
        }
        if let Some(host) = &cli.smtp_host {
            settings.smtp_host = host.clone();
        }
        if let Some(port) = cli.smtp_port {
            settings.smtp_port = port;
        }
        if let Some(format) = cli.format {
            settings.format = format;
        }
        settings.outbox = cli.outbox.clone();
        settings.send = cli.send;
        settings.seed = cli.seed;

        Ok(settings)
    }

    /// `name: value` for every setting, sorted by name.
    pub fn entries(&self) -> Vec<String> {
        match serde_json::to_value(self) {
            Ok(serde_json::Value::Object(map)) => map
                .iter()
                .map(|(key, value)| format!("{}: {}", key, value))
                .collect(),
            _ => vec![format!("{:?}", self)],
        }
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_path("participants_file", &self.participants_file)?;
        validate_non_empty_string("message.subject", &self.message.subject)?;
        validate_non_empty_string("message.sender", &self.message.sender)?;
        if self.outbox.is_none() {
            validate_non_empty_string("smtp.host", &self.smtp_host)?;
            validate_positive_number("smtp.port", self.smtp_port as usize, 1)?;
        }
        Ok(())
    }
}
