//! Internal traversal building blocks.
//!
//! This module is `pub(crate)` so the query algorithms can share scratch
//! state (visited sets) without exposing it as part of the public API.

pub(crate) mod visited;
