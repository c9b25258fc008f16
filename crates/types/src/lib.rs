//! Canonical ledger records: transaction receipts, blocks and producer
//! confirmations, with the wire encoding and digests every node must agree
//! on byte for byte.

pub mod block;
pub mod codec;
pub mod config;
pub mod confirmation;
pub mod error;
pub mod header;
pub mod merkle;
pub mod primitives;
pub mod receipt;
pub mod schedule;
pub mod signing;
pub mod status;
pub mod transaction;


pub use block::*;
pub use config::*;
pub use confirmation::*;
pub use error::*;
pub use header::*;
pub use merkle::merkle_root;
pub use primitives::*;
pub use receipt::*;
pub use schedule::*;
pub use signing::*;
pub use status::*;
pub use transaction::*;
