use crate::adapters::ParticipantFormat;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "secret-santa")]
#[command(about = "Assign each participant a secret santa")]
#[command(after_help = "Merry Christmas!")]
pub struct CliConfig {
    /// File that contains the name and email address of every participant
    pub participants_file: String,

    /// Template of the message that will be sent to every participant
    #[arg(long)]
    pub template: Option<PathBuf>,

    #[arg(long, help = "Required to actually send the messages")]
    pub send: bool,

    #[arg(long, value_enum)]
    pub format: Option<ParticipantFormat>,

    /// TOML settings file, command line flags take precedence
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub subject: Option<String>,

    #[arg(long)]
    pub sender: Option<String>,

    #[arg(long)]
    pub smtp_host: Option<String>,

    #[arg(long)]
    pub smtp_port: Option<u16>,

    /// Write messages as files into this directory instead of using SMTP
    #[arg(long)]
    pub outbox: Option<PathBuf>,

    #[arg(long, default_value = "secret_santa.log")]
    pub log_file: PathBuf,

    /// Seed for a reproducible draw
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}
