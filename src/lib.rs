pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;
pub use config::{toml_config::TomlConfig, Settings};

#[cfg(feature = "smtp")]
pub use adapters::SmtpDelivery;
pub use adapters::{read_participants, OutboxDelivery, ParticipantFormat};
pub use crate::core::{
    engine::SantaEngine,
    pairing::create_pairs,
    render::{create_message, create_messages},
    template::Template,
};
pub use domain::model::{DispatchReport, Message, MessageSettings, Pair, Participant};
pub use domain::ports::{Delivery, EventLog, RandomSource, RngSource};
pub use utils::error::{Result, SantaError};
pub use utils::logger::{CapturedLog, TracingLog};
