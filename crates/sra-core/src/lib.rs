//! sra-core - Core library for srasync
//!
//! This crate provides the record types for the SRA Data Share payload,
//! nested-collection decoding, field normalizers, and the builders that
//! flatten organisations into the six destination tables.

pub mod config;
pub mod error;
pub mod expand;
pub mod normalize;
pub mod organisation;
pub mod table;
pub mod tables;

pub use config::Config;
pub use error::{CoreError, CoreResult};
pub use organisation::{
    approved, parse_organisations, FirmFields, NestedList, Office, Organisation,
    APPROVED_STATUS,
};
pub use table::Table;
