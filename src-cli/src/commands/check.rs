use super::Outcome;
use crate::render::Renderer;
use breachscope_core::AppConfig;
use breachscope_lookup::{BreachChecker, BreachLookup, XposedOrNotClient};
use breachscope_normalize::Normalizer;
use tracing::warn;

/// Check `email` against the configured lookup service.
pub async fn run(config: &AppConfig, renderer: Renderer, email: &str) -> anyhow::Result<Outcome> {
    let client = XposedOrNotClient::from_config(&config.lookup)?;
    let checker = BreachChecker::new(client, Normalizer::from_config(&config.normalize));
    Ok(check_with(&checker, renderer, email).await)
}

/// Run a check with any lookup backend and render the result.
pub async fn check_with<L: BreachLookup>(
    checker: &BreachChecker<L>,
    renderer: Renderer,
    email: &str,
) -> Outcome {
    match checker.check(email).await {
        Ok(report) => Outcome::report(renderer, &report),
        Err(err) => {
            warn!(error = %err, "breach check failed");
            Outcome::error(renderer, &(&err).into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{Stream, EXIT_ERROR, EXIT_EXPOSED, EXIT_SAFE};
    use breachscope_core::EmailAddress;
    use breachscope_lookup::{LookupError, LookupOutcome};
    use serde_json::json;

    struct Canned(fn() -> breachscope_lookup::Result<LookupOutcome>);

    #[async_trait::async_trait]
    impl BreachLookup for Canned {
        async fn check_email(
            &self,
            _email: &EmailAddress,
        ) -> breachscope_lookup::Result<LookupOutcome> {
            (self.0)()
        }

        fn service_name(&self) -> &'static str {
            "canned"
        }
    }

    fn renderer() -> Renderer {
        Renderer {
            json: false,
            color: false,
            strict: false,
        }
    }

    fn checker(answer: fn() -> breachscope_lookup::Result<LookupOutcome>) -> BreachChecker<Canned> {
        BreachChecker::new(Canned(answer), Normalizer::default())
    }

    #[tokio::test]
    async fn test_exposed() {
        let checker = checker(|| Ok(LookupOutcome::Found(json!({"breaches": [["Adobe"]]}))));
        let outcome = check_with(&checker, renderer(), "user@example.com").await;

        assert_eq!(outcome.code, EXIT_EXPOSED);
        assert_eq!(outcome.stream, Stream::Stdout);
        assert!(outcome.output.contains("  1. 🔴 Adobe"));
    }

    #[tokio::test]
    async fn test_not_found() {
        let checker = checker(|| Ok(LookupOutcome::NotFound));
        let outcome = check_with(&checker, renderer(), "user@example.com").await;

        assert_eq!(outcome.code, EXIT_SAFE);
        assert!(outcome.output.starts_with("✅ Safe! No breaches found."));
    }

    #[tokio::test]
    async fn test_connection_error() {
        let checker = checker(|| Err(LookupError::Connection("refused".to_string())));
        let outcome = check_with(&checker, renderer(), "user@example.com").await;

        assert_eq!(outcome.code, EXIT_ERROR);
        assert_eq!(outcome.stream, Stream::Stderr);
        assert_eq!(
            outcome.output,
            "❌ Error\nNo internet connection!\nPlease check your network and try again.\n"
        );
    }

    #[tokio::test]
    async fn test_invalid_email_json() {
        let checker = checker(|| Ok(LookupOutcome::NotFound));
        let json_renderer = Renderer {
            json: true,
            ..renderer()
        };
        let outcome = check_with(&checker, json_renderer, "nope").await;

        let value: serde_json::Value =
            serde_json::from_str(&outcome.output).expect("parse JSON error");
        assert_eq!(value["code"], "INVALID_EMAIL");
        assert_eq!(value["message"], "Please enter a valid email address!");
    }
}
