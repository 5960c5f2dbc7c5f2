//! Purpose: Shared helper library used across the peer-to-peer stack.
//! Exports: `api` (stable surface), `core` (wire, encoding, workers, timing, errors), `notice`.
//! Role: Independent leaf utilities; no protocol engine and no shared state.
//! Invariants: Treat `api` as the supported surface; `core` layout may shift between releases.
//! Invariants: Core modules prefer explicit inputs/outputs over hidden state.
pub mod api;
pub mod core;
pub mod notice;
