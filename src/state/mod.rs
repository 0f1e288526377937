//! Client-side state stores.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `contacts`, `ui`) so individual
//! components can depend on small focused models. Every store is a plain
//! struct whose transitions are total, side-effect-free functions; the root
//! component owns each store in an `RwSignal` provided via context, and the
//! network flows are the only writers.

pub mod contacts;
pub mod session;
pub mod ui;
