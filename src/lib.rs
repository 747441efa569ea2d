//! Folio - Interactive portfolio builder wizard for the terminal.
//!
//! Folio walks a freelancer through assembling a portfolio step by step:
//! profile, services, projects, testimonials, availability. All state lives
//! in a single portfolio store that persists itself to one JSON slot on
//! disk after every change, so a half-finished portfolio survives between
//! sessions.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`ids`] - Caller-side entry id generation
//! - [`portfolio`] - The portfolio data store, the single source of truth
//! - [`storage`] - Durable slot storage backing the store
//! - [`ui`] - Interactive prompts and terminal output
//! - [`wizard`] - The ordered wizard step registry
//!
//! # Example
//!
//! ```
//! use folio::portfolio::{PortfolioStore, Profile};
//! use folio::storage::MemorySlot;
//!
//! let mut store = PortfolioStore::open(Box::new(MemorySlot::new()));
//! store.update_profile(Profile {
//!     full_name: "Ada Lovelace".into(),
//!     tagline: "Engineer".into(),
//!     ..Default::default()
//! }).unwrap();
//! assert!(store.is_profile_complete());
//! ```

pub mod cli;
pub mod error;
pub mod ids;
pub mod portfolio;
pub mod storage;
pub mod ui;
pub mod wizard;

pub use error::{FolioError, Result};
pub use portfolio::PortfolioStore;
