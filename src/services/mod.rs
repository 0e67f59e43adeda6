//! Fixture-backed leaf services.
//!
//! Each service answers from an injected [`RecordSource`]; nothing here
//! performs downstream calls.

pub mod fixtures;
pub mod hello;
pub mod orders;
pub mod records;
pub mod source;
pub mod users;

pub use orders::OrderBook;
pub use records::{Identified, Order, User};
pub use source::{FixtureSource, RecordSource};
pub use users::UserDirectory;
