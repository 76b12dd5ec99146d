//! # Git Module
//!
//! Repository inspection through the git CLI. Every query runs under the
//! configured timeout; an overrun or failure leaves the affected field
//! absent instead of blocking the render.

use std::io::Read;
use std::path::Path;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

use crate::models::GitInfo;

const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Run a git subcommand in `dir` and return its stdout, provided it exits
/// successfully within `timeout`. The child is killed on expiry.
fn run_git(dir: &Path, args: &[&str], timeout: Duration) -> Option<String> {
    let mut child = Command::new("git")
        .arg("-C")
        .arg(dir)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .ok()?;

    let deadline = Instant::now() + timeout;
    loop {
        match child.try_wait() {
            Ok(Some(status)) => {
                if !status.success() {
                    return None;
                }
                let mut out = String::new();
                child.stdout.take()?.read_to_string(&mut out).ok()?;
                return Some(out);
            }
            Ok(None) => {
                if Instant::now() >= deadline {
                    let _ = child.kill();
                    let _ = child.wait();
                    return None;
                }
                std::thread::sleep(POLL_INTERVAL);
            }
            Err(_) => return None,
        }
    }
}

/// Inspect the repository containing `dir`. `None` when git is absent or
/// `dir` is not inside a work tree; otherwise fields degrade independently.
pub fn inspect(dir: &Path, timeout: Duration) -> Option<GitInfo> {
    let branch = run_git(dir, &["rev-parse", "--abbrev-ref", "HEAD"], timeout)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty() && s != "HEAD");

    let is_clean = run_git(dir, &["status", "--porcelain"], timeout).map(|s| s.trim().is_empty());

    if branch.is_none() && is_clean.is_none() {
        return None;
    }
    Some(GitInfo { branch, is_clean })
}
