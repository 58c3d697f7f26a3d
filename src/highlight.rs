use inksac::prelude::*;

use crate::process::{ProcessState, TerminationReport};

/// Colors for the lines the shell prints itself.
#[derive(Debug, Clone, Copy)]
pub struct Styler {
    color_support: ColorSupport,
}

impl Default for Styler {
    fn default() -> Self {
        Self::new()
    }
}

impl Styler {
    pub fn new() -> Self {
        let support = check_color_support().unwrap_or(ColorSupport::NoColor);
        Self {
            color_support: support,
        }
    }

    pub fn plain() -> Self {
        Self {
            color_support: ColorSupport::NoColor,
        }
    }

    fn paint(&self, text: &str, style: Style) -> String {
        if matches!(self.color_support, ColorSupport::NoColor) {
            return text.to_string();
        }
        text.style(style).to_string()
    }

    pub fn error(&self, error: &str) -> String {
        let style = Style::builder().foreground(Color::Red).bold().build();
        self.paint(error, style)
    }

    pub fn report(&self, report: &TerminationReport) -> String {
        let color = match report.state {
            ProcessState::Exited(0) => Color::Green,
            ProcessState::Exited(_) => Color::Yellow,
            _ => Color::Red,
        };
        let style = Style::builder().foreground(color).build();
        self.paint(&report.to_string(), style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_styler_leaves_text_alone() {
        let styler = Styler::plain();
        let report = TerminationReport {
            pid: 42,
            state: ProcessState::Exited(0),
            transitions: Vec::new(),
        };

        assert_eq!(styler.error("set: invalid variable name"), "set: invalid variable name");
        assert_eq!(styler.report(&report), "Program exited with status 0");
    }
}
