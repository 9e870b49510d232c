// Library root for the draft recommendation core.
//
// Everything here is pure and synchronous apart from `FactStore::load`. A
// loaded `FactStore` is shared read-only across any number of concurrent
// requests.

pub mod draft;
pub mod facts;
pub mod protocol;
pub mod recommend;

pub use facts::{DataLoadError, FactStore, LoadSummary};
pub use protocol::{DraftRequest, DraftResponse};
pub use recommend::engine::Recommender;
