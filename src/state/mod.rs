//! Shared dashboard state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`requirements`, `stories`, `charts`, `ui`) so
//! individual widgets can depend on small focused models. Everything here is
//! a plain struct; the app root wraps each domain in an `RwSignal` and
//! provides it via context.

pub mod charts;
pub mod requirements;
pub mod stories;
pub mod ui;
