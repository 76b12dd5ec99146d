//! # Severity Module
//!
//! Maps tier severities onto their terminal decoration. Pure string
//! mapping; the decoration mode comes in from configuration.

#[cfg(feature = "colors")]
use owo_colors::OwoColorize;

#[cfg(not(feature = "colors"))]
use crate::display::color_shim::ColorizeShim as OwoColorize;

use crate::budget::BudgetTier;
use crate::window::WindowPhase;

/// Display-level severity both tier vocabularies map into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Ok,
    Warn,
    Crit,
}

/// How components are decorated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decoration {
    Symbolic,
    Plain,
}

impl From<BudgetTier> for Severity {
    fn from(tier: BudgetTier) -> Self {
        match tier {
            BudgetTier::Low => Severity::Ok,
            BudgetTier::Medium => Severity::Warn,
            BudgetTier::High => Severity::Crit,
        }
    }
}

impl From<WindowPhase> for Severity {
    // Inverted on purpose: a freshly opened window has the longest wait
    // until renewal, a nearly finished one is about to refresh.
    fn from(phase: WindowPhase) -> Self {
        match phase {
            WindowPhase::Early => Severity::Crit,
            WindowPhase::Mid => Severity::Warn,
            WindowPhase::Late => Severity::Ok,
        }
    }
}

pub fn decorate(severity: Severity, label: &str, mode: Decoration) -> String {
    match mode {
        Decoration::Plain => {
            let prefix = match severity {
                Severity::Ok => "[OK]",
                Severity::Warn => "[WARN]",
                Severity::Crit => "[CRIT]",
            };
            format!("{prefix} {label}")
        }
        Decoration::Symbolic => match severity {
            Severity::Ok => format!("{} {label}", "●".green()),
            Severity::Warn => format!("{} {label}", "◆".yellow()),
            Severity::Crit => format!("{} {label}", "✖".red()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_prefixes() {
        assert_eq!(decorate(Severity::Ok, "ctx:10%", Decoration::Plain), "[OK] ctx:10%");
        assert_eq!(
            decorate(Severity::Crit, "tok:90%", Decoration::Plain),
            "[CRIT] tok:90%"
        );
    }

    #[test]
    fn window_phase_inversion() {
        assert_eq!(Severity::from(WindowPhase::Early), Severity::Crit);
        assert_eq!(Severity::from(WindowPhase::Late), Severity::Ok);
        assert_eq!(Severity::from(BudgetTier::Low), Severity::Ok);
        assert_eq!(Severity::from(BudgetTier::High), Severity::Crit);
    }
}
