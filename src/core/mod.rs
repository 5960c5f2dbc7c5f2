// Core modules implementing wire helpers, encoding, timing, and error modeling.
pub mod clock;
pub mod error;
pub mod rlp;
pub mod wire;
pub mod workers;
