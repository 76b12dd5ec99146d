//! # Display Module
//!
//! Builds the status components in their fixed priority order and joins
//! the present ones into the single output line.

#[cfg(feature = "colors")]
use owo_colors::OwoColorize;

// Provide a no-op color shim when "colors" feature is disabled
#[cfg(not(feature = "colors"))]
pub mod color_shim {
    use std::fmt::{self, Display, Formatter};

    #[derive(Clone)]
    pub struct Plain(pub String);

    impl Display for Plain {
        fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
            f.write_str(&self.0)
        }
    }

    pub trait ColorizeShim {
        fn as_str(&self) -> &str;

        fn green(&self) -> Plain {
            Plain(self.as_str().to_string())
        }
        fn yellow(&self) -> Plain {
            Plain(self.as_str().to_string())
        }
        fn red(&self) -> Plain {
            Plain(self.as_str().to_string())
        }
        fn dimmed(&self) -> Plain {
            Plain(self.as_str().to_string())
        }
        fn bright_black(&self) -> Plain {
            Plain(self.as_str().to_string())
        }
    }

    impl ColorizeShim for &str {
        fn as_str(&self) -> &str {
            self
        }
    }
    impl ColorizeShim for String {
        fn as_str(&self) -> &str {
            self.as_str()
        }
    }
    impl ColorizeShim for Plain {
        fn as_str(&self) -> &str {
            &self.0
        }
    }
}

#[cfg(not(feature = "colors"))]
use color_shim::ColorizeShim as OwoColorize;

use crate::budget::budget_tier;
use crate::models::GitInfo;
use crate::severity::{Decoration, decorate};
use crate::window::{WindowStatus, format_minutes, phase_of, progress_percent};

pub const SEPARATOR: &str = " | ";

/// Everything the composer needs for one line.
pub struct LineInputs<'a> {
    pub context_percent: u8,
    pub token_percent: Option<u8>,
    pub window_status: WindowStatus,
    pub project: &'a str,
    pub type_tag: Option<&'a str>,
    pub git: Option<&'a GitInfo>,
    pub style: &'a str,
}

pub fn context_component(percent: u8, long_labels: bool, decor: Decoration) -> String {
    let label = if long_labels { "context:" } else { "ctx:" };
    decorate(
        budget_tier(percent).into(),
        &format!("{label}{percent}%"),
        decor,
    )
}

pub fn token_component(percent: u8, long_labels: bool, decor: Decoration) -> String {
    let label = if long_labels { "tokens:" } else { "tok:" };
    decorate(
        budget_tier(percent).into(),
        &format!("{label}{percent}%"),
        decor,
    )
}

pub fn window_component(status: &WindowStatus, long_labels: bool, decor: Decoration) -> String {
    match status {
        WindowStatus::Inside {
            window,
            elapsed,
            remaining,
        } => {
            let phase = phase_of(progress_percent(window, *elapsed));
            let left = format_minutes(*remaining);
            let label = if long_labels {
                format!("window:{left} left")
            } else {
                format!("left:{left}")
            };
            decorate(phase.into(), &label, decor)
        }
        WindowStatus::Outside {
            until_open,
            tomorrow,
        } => {
            let when = format_minutes(*until_open);
            let mut label = if long_labels {
                format!("opens in {when}")
            } else {
                format!("opens:{when}")
            };
            if *tomorrow {
                label.push_str(" (tomorrow)");
            }
            match decor {
                Decoration::Symbolic => label.dimmed().to_string(),
                Decoration::Plain => label,
            }
        }
    }
}

/// Project identification. Never absent: degrades from
/// `"name[tag] branch*"` all the way down to the bare name.
pub fn project_label(name: &str, tag: Option<&str>, git: Option<&GitInfo>) -> String {
    let mut label = match tag {
        Some(t) => format!("{name}[{t}]"),
        None => name.to_string(),
    };
    if let Some(info) = git {
        if let Some(branch) = info.branch.as_deref() {
            label.push(' ');
            label.push_str(branch);
            if info.is_clean == Some(false) {
                label.push('*');
            }
        }
    }
    label
}

pub fn style_component(style: &str, decor: Decoration) -> Option<String> {
    if style == "default" {
        return None;
    }
    let label = format!("style:{style}");
    Some(match decor {
        Decoration::Symbolic => label.dimmed().to_string(),
        Decoration::Plain => label,
    })
}

/// Join present components with [`SEPARATOR`]; absent ones leave no
/// placeholder behind.
pub fn compose(components: Vec<Option<String>>) -> String {
    components
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}

pub fn build_status_line(inputs: &LineInputs, long_labels: bool, decor: Decoration) -> String {
    compose(vec![
        Some(context_component(inputs.context_percent, long_labels, decor)),
        inputs
            .token_percent
            .map(|p| token_component(p, long_labels, decor)),
        Some(window_component(&inputs.window_status, long_labels, decor)),
        Some(project_label(inputs.project, inputs.type_tag, inputs.git)),
        style_component(inputs.style, decor),
    ])
}
