//! sra-store - Destination store abstraction for srasync
//!
//! This crate provides the `TableStore` trait, the Supabase REST backend,
//! and an in-memory backend used by tests.

pub mod error;
pub mod memory;
pub mod supabase;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use supabase::SupabaseStore;
pub use traits::{Row, TableStore};
