pub mod exhibitor;

pub use exhibitor::{ExhibitorKey, ExhibitorRecord};
