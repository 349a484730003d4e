pub mod service;
pub mod snapshot;

pub use service::{ImportReport, Importer};
pub use snapshot::ProjectSnapshot;
