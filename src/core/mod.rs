pub mod engine;
pub mod pairing;
pub mod render;
pub mod template;

pub use crate::domain::model::{DispatchReport, Message, MessageSettings, Pair, Participant};
pub use crate::domain::ports::{Delivery, EventLog, RandomSource, RngSource};
pub use crate::utils::error::Result;
