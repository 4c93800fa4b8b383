//! Runs the export invocation with a bounded wait.
//!
//! The export core only computes the token list; this module owns spawning,
//! the timeout, and killing a hung script. There is no retry: by the time the
//! process starts, the user's settings are already persisted.

use std::process::Stdio;
use std::time::{Duration, Instant};

use crate::error::ExportError;
use crate::export::invocation::ExportInvocation;

/// Time budget for one script run, after which it is treated as hung.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// Spawn the invocation and wait for it to finish within `timeout`.
///
/// The child's stdout/stderr are inherited so script progress stays visible.
/// On timeout the child is killed and reaped before returning.
pub fn run_invocation(
    invocation: &ExportInvocation,
    timeout: Duration,
) -> Result<(), ExportError> {
    tracing::info!("Running export: {}", invocation);

    let mut child = invocation
        .to_command()
        .stdin(Stdio::null())
        .spawn()
        .map_err(ExportError::SpawnFailed)?;

    let deadline = Instant::now() + timeout;
    loop {
        match child.try_wait().map_err(ExportError::WaitFailed)? {
            Some(status) if status.success() => {
                tracing::info!("Export finished successfully");
                return Ok(());
            }
            Some(status) => {
                tracing::warn!("Export process failed with {}", status);
                return Err(ExportError::ScriptFailed(status));
            }
            None if Instant::now() >= deadline => {
                tracing::warn!("Export exceeded {}s, killing", timeout.as_secs());
                let _ = child.kill();
                let _ = child.wait();
                return Err(ExportError::Timeout(timeout.as_secs()));
            }
            None => std::thread::sleep(Duration::from_millis(50)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::invocation::ExportInvocation;
    use std::path::PathBuf;

    use std::sync::atomic::{AtomicUsize, Ordering};

    static SCRIPT_COUNTER: AtomicUsize = AtomicUsize::new(0);

    // The invocation type pins "bash" as the program, so tests drive real
    // (tiny) bash processes through temp script files.
    fn bash_invocation(script_body: &str) -> ExportInvocation {
        let path = std::env::temp_dir().join(format!(
            "oomoxify-runner-{}-{}.sh",
            std::process::id(),
            SCRIPT_COUNTER.fetch_add(1, Ordering::Relaxed)
        ));
        std::fs::write(&path, format!("#!/usr/bin/env bash\n{script_body}\n")).unwrap();
        ExportInvocation::new(&path, &PathBuf::from("/tmp/theme"), "/tmp/apps")
    }

    #[test]
    fn test_successful_run() {
        let invocation = bash_invocation("exit 0");
        assert!(run_invocation(&invocation, DEFAULT_TIMEOUT).is_ok());
    }

    #[test]
    fn test_nonzero_exit_is_script_failure() {
        let invocation = bash_invocation("exit 3");
        let err = run_invocation(&invocation, DEFAULT_TIMEOUT).unwrap_err();
        assert!(matches!(err, ExportError::ScriptFailed(_)));
    }

    #[test]
    fn test_hung_script_times_out() {
        let invocation = bash_invocation("sleep 30");
        let err = run_invocation(&invocation, Duration::from_millis(200)).unwrap_err();
        assert!(matches!(err, ExportError::Timeout(_)));
    }

    #[test]
    fn test_missing_script_is_script_failure() {
        let invocation = ExportInvocation::new(
            &PathBuf::from("/nonexistent/script.sh"),
            &PathBuf::from("/tmp/theme"),
            "/tmp/apps",
        );
        // bash itself exists, so a missing script surfaces as a non-zero
        // exit, not a spawn error.
        let err = run_invocation(&invocation, DEFAULT_TIMEOUT).unwrap_err();
        assert!(matches!(err, ExportError::ScriptFailed(_)));
    }
}
