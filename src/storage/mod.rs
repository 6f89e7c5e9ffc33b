mod snapshot;

pub use snapshot::{load, save};
