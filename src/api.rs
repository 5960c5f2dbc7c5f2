//! Purpose: Define the stable public API boundary for peerkit.
//! Exports: Errors, wire helpers, the RLP integer codec, worker sizing, timing, notices.
//! Role: Public, additive-only surface; the rest of the stack imports from here.
//! Invariants: This module is the only supported path to the helpers.
//! Invariants: Internal module layout may change without notice; these names do not.

pub use crate::core::clock::{Timer, split_duration, time_since};
pub use crate::core::error::{Error, ErrorKind};
pub use crate::core::rlp::{cmd_id, decode_uint, encode_uint};
pub use crate::core::wire::{align16, xor};
pub use crate::core::workers::{WorkerBudget, WorkerPool, detected_parallelism, worker_budget};
pub use crate::notice::{Notice, notice_json};
