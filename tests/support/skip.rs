/// Skip a test if `ssh-keygen` is not on PATH.
#[macro_export]
macro_rules! skip_without_ssh_keygen {
    () => {
        if which::which("ssh-keygen").is_err() {
            eprintln!("SKIPPED: ssh-keygen not installed");
            return;
        }
    };
}

/// Skip a test if the `age` binary is not on PATH.
#[macro_export]
macro_rules! skip_without_age {
    () => {
        $crate::skip_without_ssh_keygen!();
        if which::which("age").is_err() {
            eprintln!("SKIPPED: age not installed");
            return;
        }
    };
}
