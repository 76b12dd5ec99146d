use anyhow::Result;
use chrono::Local;
use std::path::PathBuf;

#[cfg(feature = "colors")]
use owo_colors::OwoColorize;

#[cfg(not(feature = "colors"))]
use paceline::display::color_shim::ColorizeShim;

use paceline::activity::{scan_activity, window_open_instant};
use paceline::budget::{estimate_context_percent, estimate_token_percent};
use paceline::cli::{Args, RenderConfig};
use paceline::display::{LineInputs, build_status_line};
use paceline::models::HookJson;
use paceline::project::{classify, project_name};
use paceline::utils::{format_path, minutes_since_midnight, read_stdin};
use paceline::window::{self, WindowStatus};

fn main() -> Result<()> {
    let args = Args::parse();
    let config = RenderConfig::resolve(&args);

    // An empty or malformed snapshot still renders, with defaults
    let stdin = read_stdin()?;
    let hook: HookJson = serde_json::from_slice(&stdin).unwrap_or_default();

    let work_dir = hook
        .working_dir()
        .map(PathBuf::from)
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."));

    let now = Local::now();
    let minute = minutes_since_midnight(now);
    let status = window::locate(minute);

    // Activity only matters inside a window; the scan cutoff is the
    // window opening instant.
    let activity_bytes = match status {
        WindowStatus::Inside { window: w, .. } => window_open_instant(now, w.start)
            .map(|cutoff| scan_activity(&work_dir, cutoff))
            .unwrap_or(0),
        WindowStatus::Outside { .. } => 0,
    };
    let token_percent = estimate_token_percent(&status, activity_bytes);

    let transcript_bytes = hook
        .transcript_path
        .as_deref()
        .and_then(|p| std::fs::metadata(p).ok())
        .map(|m| m.len())
        .unwrap_or(0);
    let context_percent = estimate_context_percent(transcript_bytes);

    let git_info = {
        #[cfg(feature = "git")]
        {
            paceline::git::inspect(&work_dir, config.vcs_timeout)
        }
        #[cfg(not(feature = "git"))]
        {
            None::<paceline::models::GitInfo>
        }
    };

    let type_tag = classify(&work_dir);
    let project = project_name(&work_dir);

    let line = build_status_line(
        &LineInputs {
            context_percent,
            token_percent,
            window_status: status,
            project: &project,
            type_tag,
            git: git_info.as_ref(),
            style: hook.style_name(),
        },
        config.long_labels,
        config.decoration,
    );
    println!("{line}");

    if config.debug {
        eprintln!();
        eprintln!("{}", "=== Debug Information ===".bright_black());
        eprintln!("Model: {}", hook.model_display_name());
        eprintln!(
            "Dir: {} (type: {})",
            format_path(&work_dir.to_string_lossy()),
            type_tag.unwrap_or("unknown")
        );
        eprintln!("Clock: {} min since midnight, status: {:?}", minute, status);
        eprintln!(
            "Activity: {} bytes since window open (dirs: {:?})",
            activity_bytes,
            paceline::activity::ACTIVITY_DIRS
        );
        eprintln!(
            "Transcript: {} bytes -> context {}%",
            transcript_bytes, context_percent
        );
        eprintln!("Tokens: {:?}% of budget", token_percent);
        if let Some(ref info) = git_info {
            eprintln!(
                "Git: branch={}, clean={}",
                info.branch.as_deref().unwrap_or("detached"),
                info.is_clean
                    .map(|c| if c { "yes" } else { "no" })
                    .unwrap_or("unknown")
            );
        }
        eprintln!("{}", "========================".bright_black());
    }
    Ok(())
}
