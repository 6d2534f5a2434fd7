use crate::adapters::ParticipantFormat;
use crate::utils::error::{Result, SantaError};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Optional settings file, every section and key may be left out.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TomlConfig {
    pub message: Option<MessageConfig>,
    pub smtp: Option<SmtpConfig>,
    pub participants: Option<ParticipantsConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageConfig {
    pub subject: Option<String>,
    pub sender: Option<String>,
    pub template: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SmtpConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParticipantsConfig {
    pub format: Option<ParticipantFormat>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SantaError::Io)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${SMTP_HOST}),未設定的保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SantaError::Config {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn subject(&self) -> Option<&str> {
        self.message.as_ref()?.subject.as_deref()
    }

    pub fn sender(&self) -> Option<&str> {
        self.message.as_ref()?.sender.as_deref()
    }

    pub fn template(&self) -> Option<&Path> {
        self.message.as_ref()?.template.as_deref()
    }

    pub fn smtp_host(&self) -> Option<&str> {
        self.smtp.as_ref()?.host.as_deref()
    }

    pub fn smtp_port(&self) -> Option<u16> {
        self.smtp.as_ref()?.port
    }

    pub fn format(&self) -> Option<ParticipantFormat> {
        self.participants.as_ref()?.format
    }
}
