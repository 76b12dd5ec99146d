//! # Activity Module
//!
//! Best-effort byte count of project files touched since the current
//! window opened. Feeds the token estimator; anything unreadable simply
//! contributes nothing.

use chrono::{DateTime, Local, NaiveTime};
use std::path::Path;
use std::time::SystemTime;
use walkdir::WalkDir;

/// Subdirectories considered when measuring recent working activity.
pub const ACTIVITY_DIRS: &[&str] = &["src", "lib", "tests", "scripts", "docs"];

/// Sum the sizes of regular files under the candidate directories that
/// were modified at or after `modified_after`.
pub fn scan_activity(root: &Path, modified_after: SystemTime) -> u64 {
    let mut total = 0u64;
    for sub in ACTIVITY_DIRS {
        let dir = root.join(sub);
        if !dir.is_dir() {
            continue;
        }
        for entry in WalkDir::new(&dir).into_iter().flatten() {
            if !entry.file_type().is_file() {
                continue;
            }
            let Ok(meta) = entry.metadata() else { continue };
            match meta.modified() {
                Ok(mtime) if mtime >= modified_after => total += meta.len(),
                _ => {}
            }
        }
    }
    total
}

/// Wall-clock instant at which today's window opened (`start_minute`
/// minutes after local midnight). `None` only when the local calendar
/// cannot represent that instant (DST gap).
pub fn window_open_instant(now: DateTime<Local>, start_minute: u32) -> Option<SystemTime> {
    let time = NaiveTime::from_num_seconds_from_midnight_opt(start_minute * 60, 0)?;
    let local = now
        .date_naive()
        .and_time(time)
        .and_local_timezone(Local)
        .earliest()?;
    Some(SystemTime::from(local))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::time::Duration;

    #[test]
    fn counts_recent_files_in_candidate_dirs() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("src")).unwrap();
        fs::write(dir.path().join("src/main.rs"), vec![0u8; 1200]).unwrap();

        let past = SystemTime::now() - Duration::from_secs(3600);
        assert_eq!(scan_activity(dir.path(), past), 1200);
    }

    #[test]
    fn ignores_stale_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("src")).unwrap();
        fs::write(dir.path().join("src/old.rs"), vec![0u8; 500]).unwrap();

        let future = SystemTime::now() + Duration::from_secs(3600);
        assert_eq!(scan_activity(dir.path(), future), 0);
    }

    #[test]
    fn ignores_non_candidate_dirs() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("target")).unwrap();
        fs::write(dir.path().join("target/blob.bin"), vec![0u8; 9000]).unwrap();

        let past = SystemTime::now() - Duration::from_secs(3600);
        assert_eq!(scan_activity(dir.path(), past), 0);
    }

    #[test]
    fn missing_root_is_zero() {
        let past = SystemTime::now() - Duration::from_secs(3600);
        assert_eq!(scan_activity(Path::new("/nonexistent/xyz"), past), 0);
    }

    #[test]
    fn window_open_instant_is_before_now_for_open_window() {
        let now = Local::now();
        let minute = now.time().signed_duration_since(NaiveTime::MIN).num_minutes() as u32;
        if minute > 0 {
            let open = window_open_instant(now, 0).unwrap();
            assert!(open <= SystemTime::now());
        }
    }
}
