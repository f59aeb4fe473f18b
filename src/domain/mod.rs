mod collection;
pub mod models;
mod progress;
pub mod raw;

pub use collection::TournamentCollection;
pub use models::*;
pub use progress::ProcessProgress;
pub use raw::{RawMetadata, RawTournament};
