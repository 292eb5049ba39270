use serde::Deserialize;

/// Formatting knobs, read from the `[format]` config table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    /// Longest run of blank lines kept between content lines.
    pub max_blank_lines: usize,
    /// Whether output ends with a newline.
    pub trailing_newline: bool,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            max_blank_lines: 1,
            trailing_newline: true,
        }
    }
}

/// Output formatter, constructed once at startup and passed by parameter.
///
/// Normalizes rendered text: trims trailing whitespace per line, drops
/// leading and trailing blank lines, collapses blank-line runs.
#[derive(Debug, Clone)]
pub struct Formatter {
    config: FormatConfig,
}

impl Formatter {
    pub fn new(config: FormatConfig) -> Self {
        Self { config }
    }

    pub fn format(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut pending_blanks = 0usize;

        for line in text.lines() {
            let line = line.trim_end();
            if line.is_empty() {
                if !out.is_empty() {
                    pending_blanks += 1;
                }
                continue;
            }
            for _ in 0..pending_blanks.min(self.config.max_blank_lines) {
                out.push('\n');
            }
            pending_blanks = 0;
            out.push_str(line);
            out.push('\n');
        }

        if !self.config.trailing_newline {
            while out.ends_with('\n') {
                out.pop();
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_blank_line_runs() {
        let formatter = Formatter::new(FormatConfig::default());
        let out = formatter.format("a\n\n\n\nb\n");
        assert_eq!(out, "a\n\nb\n");
    }

    #[test]
    fn drops_leading_and_trailing_blank_lines() {
        let formatter = Formatter::new(FormatConfig::default());
        let out = formatter.format("\n\nfirst\nsecond\n\n\n");
        assert_eq!(out, "first\nsecond\n");
    }

    #[test]
    fn trims_trailing_whitespace_per_line() {
        let formatter = Formatter::new(FormatConfig::default());
        let out = formatter.format("a   \nb\t\n");
        assert_eq!(out, "a\nb\n");
    }

    #[test]
    fn honors_trailing_newline_setting() {
        let formatter = Formatter::new(FormatConfig {
            trailing_newline: false,
            ..FormatConfig::default()
        });
        assert_eq!(formatter.format("a\nb\n"), "a\nb");
    }

    #[test]
    fn wider_blank_line_budget_is_kept() {
        let formatter = Formatter::new(FormatConfig {
            max_blank_lines: 2,
            ..FormatConfig::default()
        });
        assert_eq!(formatter.format("a\n\n\n\n\nb\n"), "a\n\n\nb\n");
    }
}
