pub mod format;
pub mod snapshot;
pub mod version;
