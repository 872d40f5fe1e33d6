//! External `age` binary backend.
//!
//! ## Requirements
//!
//! - `age` must be on `PATH` (<https://github.com/FiloSottile/age>)
//! - Recipients file holds OpenSSH public keys (`age -R` format)
//! - Identity is an OpenSSH private key (`age -i`); passphrase-protected keys
//!   prompt on the terminal

use std::ffi::OsString;
use std::io::{self, Write};
use std::path::Path;
use std::process::{Command, Output, Stdio};

use tracing::{debug, trace};
use zeroize::Zeroizing;

use super::Cipher;
use crate::core::constants;
use crate::error::{CipherError, Result};

/// Cipher backend that shells out to `age`.
#[derive(Debug, Clone)]
pub struct AgeCommand {
    program: OsString,
}

impl AgeCommand {
    pub fn new() -> Self {
        Self {
            program: constants::AGE_BINARY.into(),
        }
    }

    /// Use a different executable, e.g. an absolute path to `age`.
    pub fn with_program(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn command(&self) -> Command {
        Command::new(&self.program)
    }
}

impl Default for AgeCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl Cipher for AgeCommand {
    fn name(&self) -> &'static str {
        "age"
    }

    fn check(&self) -> Result<()> {
        which::which(&self.program).map_err(|_| {
            CipherError::PrerequisiteMissing(self.program.to_string_lossy().to_string())
        })?;
        Ok(())
    }

    fn encrypt(&self, plaintext: &[u8], recipients: &Path) -> Result<Vec<u8>> {
        trace!(
            plaintext_len = plaintext.len(),
            recipients = %recipients.display(),
            "encrypting with age"
        );

        let mut cmd = self.command();
        cmd.arg("-e").arg("-R").arg(recipients);

        let output = run_piped(cmd, plaintext).map_err(|e| {
            CipherError::EncryptionFailed(format!("failed to run age: {}", e))
        })?;

        if !output.status.success() {
            return Err(CipherError::EncryptionFailed(diagnostics(&output)).into());
        }

        debug!(ciphertext_len = output.stdout.len(), "encrypted with age");
        Ok(output.stdout)
    }

    fn decrypt(&self, ciphertext: &[u8], identity: &Path) -> Result<Zeroizing<Vec<u8>>> {
        trace!(
            ciphertext_len = ciphertext.len(),
            identity = %identity.display(),
            "decrypting with age"
        );

        let mut cmd = self.command();
        cmd.arg("-d").arg("-i").arg(identity);

        let output = run_piped(cmd, ciphertext).map_err(|e| {
            CipherError::DecryptionFailed(format!("failed to run age: {}", e))
        })?;

        if !output.status.success() {
            return Err(CipherError::DecryptionFailed(diagnostics(&output)).into());
        }

        let plaintext = Zeroizing::new(output.stdout);
        debug!(plaintext_len = plaintext.len(), "decrypted with age");
        Ok(plaintext)
    }
}

/// Run `cmd` with `input` on stdin, collecting stdout and stderr.
///
/// Stdin is fed from a scoped thread while the output pipes are drained, so
/// neither side can block on a full pipe.
fn run_piped(mut cmd: Command, input: &[u8]) -> io::Result<Output> {
    cmd.stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    let mut child = cmd.spawn()?;
    let stdin = child.stdin.take();

    std::thread::scope(|s| {
        let feeder = s.spawn(move || match stdin {
            Some(mut pipe) => pipe.write_all(input),
            None => Ok(()),
        });

        let output = child.wait_with_output()?;
        let fed = feeder
            .join()
            .unwrap_or_else(|_| Err(io::Error::new(io::ErrorKind::Other, "stdin writer panicked")));

        // A failing child may close stdin early; its exit status says more.
        if output.status.success() {
            fed?;
        }
        Ok(output)
    })
}

fn diagnostics(output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stderr = stderr.trim();
    match output.status.code() {
        Some(code) if stderr.is_empty() => format!("age exited with status {}", code),
        Some(code) => format!("age exited with status {}\nStderr: {}", code, stderr),
        None if stderr.is_empty() => "age was terminated by a signal".to_string(),
        None => format!("age was terminated by a signal\nStderr: {}", stderr),
    }
}
