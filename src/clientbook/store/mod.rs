//! # Storage Layer
//!
//! The whole client collection lives in a single JSON document. Every save
//! rewrites that document; there is no incremental persistence.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage bound to one data file
//!   - Missing file loads as an empty collection
//!   - Malformed content also loads as an empty collection (logged as a warning)
//!   - Writes go through a temporary file and a rename
//!
//! - [`memory::InMemoryStore`]: keeps the last saved collection in memory, for tests
//!
//! ## Storage Format
//!
//! ```text
//! [
//!   {
//!     "id": 1,
//!     "nom": "Jean Mbarga",
//!     "ville": "Yaoundé",
//!     "telephone": "677123456",
//!     "tags": ["vip"],
//!     "historique_achats": [["2025-11-10", 75000]]
//!   }
//! ]
//! ```
//!
//! The on-disk keys are fixed; [`record::StoredClient`] maps them to and from
//! [`Client`](crate::model::Client).

use crate::error::Result;
use crate::model::Client;

pub mod fs;
pub mod memory;
pub mod record;

pub use fs::{load_clients, save_clients};

/// Abstract interface for loading and saving the full client collection.
pub trait DataStore {
    /// Load every stored client, in stored order.
    fn load(&self) -> Result<Vec<Client>>;

    /// Replace the stored collection with `clients`.
    fn save(&mut self, clients: &[Client]) -> Result<()>;
}
