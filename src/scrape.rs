use crate::interpreter::value::Variables;

/// Default number of leading lines examined by [`scrape_variables`].
pub const DEFAULT_HEAD_LINES: usize = 100;
/// Default number of trailing lines examined by [`scrape_variables`].
pub const DEFAULT_TAIL_LINES: usize = 100;

/// Which part of a program's output is searched for `$name = number` lines.
///
/// Diagnostic output can be very long, so only the first `head_lines` and the
/// last `tail_lines` lines are read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrapeConfig {
    /// Number of lines read from the start of the output.
    pub head_lines: usize,
    /// Number of lines read from the end of the output.
    pub tail_lines: usize,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self { head_lines: DEFAULT_HEAD_LINES,
               tail_lines: DEFAULT_TAIL_LINES, }
    }
}

/// Extracts `$name = number` assignments from a program's diagnostic output.
///
/// Only the head and tail windows described by `config` are examined; a line
/// inside both windows is read once. Lines are taken in output order, so
/// when a name appears more than once the last occurrence wins. Keys keep
/// their `$` sigil, matching how they are written in expressions, and every
/// value is a one-element array.
///
/// # Example
/// ```
/// use benchexpr::scrape::{ScrapeConfig, scrape_variables};
///
/// let stderr = "loading\n$turns = 120\n$score=3.5e2\n$turns = 80\ndone";
/// let variables = scrape_variables(stderr, &ScrapeConfig::default());
///
/// assert_eq!(variables["$turns"], vec![80.0]);
/// assert_eq!(variables["$score"], vec![350.0]);
/// assert_eq!(variables.len(), 2);
/// ```
#[must_use]
pub fn scrape_variables(output: &str, config: &ScrapeConfig) -> Variables {
    let lines: Vec<&str> = output.lines().collect();
    let head_end = config.head_lines.min(lines.len());
    let tail_start = lines.len().saturating_sub(config.tail_lines).max(head_end);

    let mut variables = Variables::new();
    for line in lines[..head_end].iter().chain(&lines[tail_start..]) {
        if let Some((name, value)) = parse_assignment(line) {
            variables.insert(name.to_string(), vec![value]);
        }
    }

    tracing::debug!(count = variables.len(), "scraped variables from output");
    variables
}

/// Parses a single `$name = number` line.
///
/// Surrounding whitespace and whitespace around `=` are ignored. The name must
/// be a valid identifier after the sigil; the number may carry a sign and an
/// exponent and must be finite.
///
/// # Example
/// ```
/// use benchexpr::scrape::parse_assignment;
///
/// assert_eq!(parse_assignment("  $best = -4.5 "), Some(("$best", -4.5)));
/// assert_eq!(parse_assignment("best = 4"), None);
/// assert_eq!(parse_assignment("$1x = 4"), None);
/// assert_eq!(parse_assignment("$x = inf"), None);
/// ```
#[must_use]
pub fn parse_assignment(line: &str) -> Option<(&str, f64)> {
    let (name, value) = line.trim().split_once('=')?;
    let name = name.trim_end();
    if !is_sigil_identifier(name) {
        return None;
    }

    let value: f64 = value.trim().parse().ok()?;
    value.is_finite().then_some((name, value))
}

fn is_sigil_identifier(name: &str) -> bool {
    let Some(rest) = name.strip_prefix('$') else {
        return false;
    };
    let mut chars = rest.chars();
    chars.next()
         .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
    && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
