//! Value types handed to the API layer

mod snapshot;
mod track;
mod transport_state;

pub use snapshot::{SpeakerSnapshot, SpeakerStatus};
pub use track::Track;
pub use transport_state::TransportState;
