//! envault - Encrypted environment secrets for git repositories.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── init          # Initialize .envault
//! │   ├── keys          # add-key / remove-key / list-keys
//! │   ├── encrypt       # Encrypt a plaintext file
//! │   ├── decrypt       # Decrypt to stdout
//! │   ├── reencrypt     # Re-encrypt for the current keys
//! │   ├── load          # Write an environment to its targets
//! │   ├── check         # Verify configuration
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── config        # .envault/config.yaml management
//!     ├── registry      # .envault/authorized_keys
//!     ├── cipher/       # Encryption backends
//!     │   ├── command   # external age binary
//!     │   └── age       # in-process age crate
//!     ├── identity      # SSH private key discovery
//!     ├── fs            # Atomic file writes
//!     └── workspace/    # Operations rooted at a directory
//! ```
//!
//! # Features
//!
//! - SSH public keys as recipients, no extra key management
//! - Multiple targets per environment, written atomically
//! - Access revocation by re-encrypting for the current key set
//! - Pluggable cipher backend

pub mod cli;
pub mod core;
pub mod error;
