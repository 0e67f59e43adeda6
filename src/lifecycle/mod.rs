//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main.rs):
//!     Load config → Env overrides → CLI flags → Validate → Logging → Bind → Serve
//!
//! Shutdown (shutdown.rs):
//!     Signal received (signals.rs) → broadcast → server drains → exit
//! ```

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
