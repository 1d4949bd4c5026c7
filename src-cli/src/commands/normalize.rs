use super::Outcome;
use crate::error::CommandError;
use crate::render::Renderer;
use anyhow::Context;
use breachscope_core::NormalizeConfig;
use breachscope_lookup::Verdict;
use breachscope_normalize::Normalizer;
use serde_json::Value;
use std::io::Read;
use std::path::Path;

/// Normalize a saved payload read from `file`, or stdin when `None` or `-`.
pub fn run(config: &NormalizeConfig, renderer: Renderer, file: Option<&Path>) -> anyhow::Result<Outcome> {
    let raw = match file {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        _ => {
            let mut raw = String::new();
            std::io::stdin()
                .read_to_string(&mut raw)
                .context("failed to read payload from stdin")?;
            raw
        }
    };

    Ok(normalize_text(config, renderer, &raw))
}

/// Decode `raw` as JSON and render its verdict.
pub fn normalize_text(config: &NormalizeConfig, renderer: Renderer, raw: &str) -> Outcome {
    let payload: Value = match serde_json::from_str(raw) {
        Ok(payload) => payload,
        Err(e) => {
            return Outcome::error(
                renderer,
                &CommandError::new("INVALID_JSON", format!("Payload is not valid JSON:\n{e}")),
            )
        }
    };

    let verdict = Verdict::from_normalization(Normalizer::from_config(config).normalize(&payload));
    Outcome::verdict(renderer, &verdict)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{Stream, EXIT_ERROR, EXIT_EXPOSED, EXIT_SAFE};

    fn renderer(strict: bool) -> Renderer {
        Renderer {
            json: false,
            color: false,
            strict,
        }
    }

    #[test]
    fn test_exposed_payload() {
        let outcome = normalize_text(
            &NormalizeConfig::default(),
            renderer(false),
            r#"{"ExposedBreaches": ["BreachX", "BreachY"]}"#,
        );
        assert_eq!(outcome.code, EXIT_EXPOSED);
        assert!(outcome
            .output
            .contains("Your email was found in 2 data breach(es):"));
    }

    #[test]
    fn test_empty_payload() {
        let outcome = normalize_text(&NormalizeConfig::default(), renderer(false), "{}");
        assert_eq!(outcome.code, EXIT_SAFE);
    }

    #[test]
    fn test_invalid_json() {
        let outcome = normalize_text(&NormalizeConfig::default(), renderer(false), "{not json");
        assert_eq!(outcome.code, EXIT_ERROR);
        assert_eq!(outcome.stream, Stream::Stderr);
        assert!(outcome.output.contains("Payload is not valid JSON"));
    }

    #[test]
    fn test_depth_limit_respects_strict() {
        let config = NormalizeConfig { max_depth: 1 };
        let payload = r#"{"breaches": [[["A"]]]}"#;

        let lenient = normalize_text(&config, renderer(false), payload);
        assert_eq!(lenient.code, EXIT_SAFE);
        assert!(lenient.output.starts_with("✅ Safe!"));

        let strict = normalize_text(&config, renderer(true), payload);
        assert_eq!(strict.code, EXIT_ERROR);
        assert!(strict.output.contains("depth limit of 1"));
    }
}
