//! Cipher backend selection.

use tracing::debug;

use super::{AgeCommand, Cipher, NativeAge};

/// Which [`Cipher`] implementation to use.
///
/// - `Age`: the external `age` binary (default)
/// - `Native`: the in-process `age` crate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Backend {
    #[default]
    Age,
    Native,
}

impl Backend {
    /// Create the cipher for this backend.
    pub fn cipher(self) -> Box<dyn Cipher> {
        debug!(backend = ?self, "creating cipher backend");
        match self {
            Self::Age => Box::new(AgeCommand::new()),
            Self::Native => Box::new(NativeAge),
        }
    }
}
