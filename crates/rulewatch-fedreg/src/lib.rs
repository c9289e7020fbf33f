pub mod client;
pub mod collect;
pub mod error;
pub mod types;

pub use client::FedRegClient;
pub use collect::{next_step, PageStep, MAX_PAGES};
pub use error::FedRegError;
pub use types::{AgencyEntry, AgencyField, DocumentsPage, RawDocument};
