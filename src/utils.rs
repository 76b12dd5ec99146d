use chrono::{DateTime, Local, Timelike};
use std::io::Read;

pub fn read_stdin() -> anyhow::Result<Vec<u8>> {
    let mut buf = Vec::new();
    std::io::stdin().read_to_end(&mut buf)?;
    Ok(buf)
}

pub fn format_path(p: &str) -> String {
    if let Some(b) = directories::BaseDirs::new() {
        let home_s = b.home_dir().to_string_lossy();
        if p.starts_with(&*home_s) {
            return format!("~{}", &p[home_s.len()..]);
        }
    }
    p.to_owned()
}

/// Minutes since local midnight, 0..=1439.
pub fn minutes_since_midnight(now: DateTime<Local>) -> u32 {
    now.hour() * 60 + now.minute()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn midnight_is_zero() {
        let dt = Local.with_ymd_and_hms(2026, 3, 2, 0, 0, 59).unwrap();
        assert_eq!(minutes_since_midnight(dt), 0);
    }

    #[test]
    fn late_evening() {
        let dt = Local.with_ymd_and_hms(2026, 3, 2, 23, 30, 0).unwrap();
        assert_eq!(minutes_since_midnight(dt), 1410);
    }
}
