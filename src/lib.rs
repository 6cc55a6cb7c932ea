//! Data access and reconciliation layer for the Marquee catalog client:
//! one repository facade over a remote catalog service or a local offline
//! profile, plus the pure read-model derivations the browsing UI renders.

pub mod assist;
pub mod catalog;
pub mod config;
pub mod entry;
pub mod error;
pub mod remote;
pub mod repository;
pub mod seed;
pub mod session;
pub mod store;

pub use config::BackendConfig;
pub use entry::{CatalogEntry, EntryId, EntryKind, SaveMode};
pub use error::CatalogError;
pub use repository::CatalogRepository;
pub use session::{AuthSession, SessionManager};
