//! Internal graph accessors and low-level building blocks.
//!
//! This module is `pub(crate)` so traversals can share the visited-state
//! primitive without exposing it as part of the public API surface.

pub(crate) mod visited;
