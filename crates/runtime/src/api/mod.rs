//! Public API surface for arena clients.
//!
//! - [`errors`] unifies engine, repository and scheduling failures
//! - [`handle`] is the cloneable async façade over an [`Arena`](crate::Arena)
mod errors;
mod handle;

pub use errors::{Result, RuntimeError};
pub use handle::ArenaHandle;
