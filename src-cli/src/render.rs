//! Text and JSON rendering of check results.

use crate::error::CommandError;
use breachscope_lookup::{CheckReport, Verdict};
use owo_colors::OwoColorize;
use serde::Serialize;

const SAFE_RGB: (u8, u8, u8) = (46, 204, 113);
const ALERT_RGB: (u8, u8, u8) = (231, 76, 60);
const ERROR_RGB: (u8, u8, u8) = (243, 156, 18);

/// How results are written to the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Renderer {
    /// Emit JSON instead of text
    pub json: bool,
    /// Colour the text report
    pub color: bool,
    /// Render undetermined verdicts as errors
    pub strict: bool,
}

impl Renderer {
    /// Render a complete check report.
    pub fn report(&self, report: &CheckReport) -> String {
        if self.json {
            to_json(report)
        } else {
            self.verdict_text(&report.verdict)
        }
    }

    /// Render a verdict without the surrounding report.
    pub fn verdict(&self, verdict: &Verdict) -> String {
        if self.json {
            to_json(verdict)
        } else {
            self.verdict_text(verdict)
        }
    }

    /// Render an error block.
    pub fn error(&self, err: &CommandError) -> String {
        if self.json {
            to_json(err)
        } else {
            format!("{}\n{}\n", self.paint("❌ Error", ERROR_RGB), self.paint(&err.message, ERROR_RGB))
        }
    }

    fn verdict_text(&self, verdict: &Verdict) -> String {
        match verdict {
            Verdict::Safe => self.safe_text(),
            Verdict::Undetermined { reason } if self.strict => self.error(&undetermined_error(reason)),
            // A payload we could not read looks the same as a clean one unless --strict.
            Verdict::Undetermined { .. } => self.safe_text(),
            Verdict::Exposed { result } => {
                let mut out = format!(
                    "{}\n{}\n",
                    self.paint("⚠️ Warning! Breaches Found!", ALERT_RGB),
                    self.paint(
                        &format!("Your email was found in {} data breach(es):", result.count()),
                        ALERT_RGB
                    ),
                );
                for (i, breach) in result.iter().enumerate() {
                    out.push_str(&self.paint(&format!("  {}. 🔴 {breach}", i + 1), ALERT_RGB));
                    out.push('\n');
                }
                out
            }
        }
    }

    fn safe_text(&self) -> String {
        format!(
            "{}\n{}\n",
            self.paint("✅ Safe! No breaches found.", SAFE_RGB),
            self.paint(
                "Your email was not found in any known data breaches.",
                SAFE_RGB
            ),
        )
    }

    fn paint(&self, text: &str, (r, g, b): (u8, u8, u8)) -> String {
        if self.color {
            text.truecolor(r, g, b).to_string()
        } else {
            text.to_string()
        }
    }
}

/// Error used when `--strict` refuses an undetermined verdict.
pub fn undetermined_error(reason: &str) -> CommandError {
    CommandError::with_details(
        "UNDETERMINED",
        format!("Could not determine breach status:\n{reason}"),
        serde_json::json!({ "reason": reason }),
    )
}

fn to_json<T: Serialize>(value: &T) -> String {
    match serde_json::to_string_pretty(value) {
        Ok(json) => format!("{json}\n"),
        Err(e) => format!("{{\"code\":\"INTERNAL_ERROR\",\"message\":\"{e}\"}}\n"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use breachscope_core::{BreachName, EmailAddress};
    use breachscope_normalize::NormalizedResult;

    fn plain() -> Renderer {
        Renderer {
            json: false,
            color: false,
            strict: false,
        }
    }

    fn exposed(names: &[&str]) -> Verdict {
        Verdict::Exposed {
            result: NormalizedResult::new(
                names
                    .iter()
                    .map(|name| BreachName::new(*name).expect("non-empty name"))
                    .collect(),
            ),
        }
    }

    #[test]
    fn test_safe_text() {
        assert_eq!(
            plain().verdict(&Verdict::Safe),
            "✅ Safe! No breaches found.\nYour email was not found in any known data breaches.\n"
        );
    }

    #[test]
    fn test_exposed_text() {
        assert_eq!(
            plain().verdict(&exposed(&["Adobe", "LinkedIn"])),
            "⚠️ Warning! Breaches Found!\n\
             Your email was found in 2 data breach(es):\n  \
             1. 🔴 Adobe\n  \
             2. 🔴 LinkedIn\n"
        );
    }

    #[test]
    fn test_undetermined_renders_as_safe() {
        let verdict = Verdict::Undetermined {
            reason: "payload is a string, expected a list or an object".to_string(),
        };
        assert_eq!(plain().verdict(&verdict), plain().verdict(&Verdict::Safe));
    }

    #[test]
    fn test_undetermined_strict() {
        let renderer = Renderer {
            strict: true,
            ..plain()
        };
        let verdict = Verdict::Undetermined {
            reason: "payload nesting exceeds the depth limit of 64".to_string(),
        };
        assert_eq!(
            renderer.verdict(&verdict),
            "❌ Error\nCould not determine breach status:\npayload nesting exceeds the depth limit of 64\n"
        );
    }

    #[test]
    fn test_color_applied() {
        let renderer = Renderer {
            color: true,
            ..plain()
        };
        let text = renderer.verdict(&Verdict::Safe);
        assert!(text.contains("\u{1b}["));
        assert!(text.contains("Safe! No breaches found."));
    }

    #[test]
    fn test_json_report() {
        let renderer = Renderer {
            json: true,
            ..plain()
        };
        let report = CheckReport::new(
            EmailAddress::parse("user@example.com").expect("valid email"),
            exposed(&["Adobe"]),
        );

        let value: serde_json::Value =
            serde_json::from_str(&renderer.report(&report)).expect("parse JSON output");
        assert_eq!(value["status"], "exposed");
        assert_eq!(value["count"], 1);
        assert_eq!(value["breaches"], serde_json::json!(["Adobe"]));
    }

    #[test]
    fn test_error_text() {
        let err = CommandError::new("TIMEOUT", "Request timed out!\nThe server took too long to respond.");
        assert_eq!(
            plain().error(&err),
            "❌ Error\nRequest timed out!\nThe server took too long to respond.\n"
        );
    }
}
