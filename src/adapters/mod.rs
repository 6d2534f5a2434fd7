// Adapters layer: participant files and message transports.

pub mod outbox;
pub mod participants;
#[cfg(feature = "smtp")]
pub mod smtp;

pub use outbox::OutboxDelivery;
pub use participants::{read_participants, ParticipantFormat};
#[cfg(feature = "smtp")]
pub use smtp::SmtpDelivery;
