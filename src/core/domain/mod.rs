//! Domain types.

mod key;

pub use key::{fingerprint, Key};
