//! Internal graph accessors and low-level building blocks.
//!
//! This module is intentionally `pub(crate)` so both engines can share vertex
//! index validation and visited bookkeeping without exposing them as part of
//! the public API surface.

pub(crate) mod index;
pub(crate) mod visited;
