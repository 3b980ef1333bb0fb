//! Strictly Quarto host - challenges, storage and a console front end.
//!
//! # Architecture
//!
//! - **Store**: key-value persistence of [`TableRecord`]s behind [`GameStore`]
//! - **Table**: challenge lifecycle and serialized move submission
//! - **Console**: a hot-seat terminal game over a [`TableService`]
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use strictly_quarto_host::{MemoryStore, TableService};
//!
//! let service = TableService::new(MemoryStore::new());
//! let id = service.challenge("ann", "bo", "general").unwrap();
//! let record = service.accept(&id, &mut rand::rngs::StdRng::seed_from_u64(1)).unwrap();
//! assert!(record.game().is_some());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod console;
mod error;
mod record;
mod store;
mod table;

pub use config::{ConfigError, HostConfig};
pub use console::{CommandError, Console, ConsoleCommand, describe};
pub use error::{StoreError, TableError};
pub use record::{GameId, TableRecord, game_id};
pub use store::{GameStore, MemoryStore};
pub use table::TableService;
