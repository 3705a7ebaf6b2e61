use clap::Parser;
use guardrail::utils::{logger, validation::Validate};
use guardrail::{coerce_int, coerce_int_checked, read_text, CliConfig};
use serde_json::Value;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting guardrail CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let outcome = match &config.command {
        guardrail::config::Command::Coerce { value, check_first } => {
            let input = parse_cli_value(value);
            let result = if *check_first {
                coerce_int_checked(&input)
            } else {
                coerce_int(&input)
            };
            result.map(|n| n.to_string())
        }
        guardrail::config::Command::Read { path } => read_text(path),
    };

    match outcome {
        Ok(output) => {
            tracing::info!("✅ Operation completed successfully");
            println!("{}", output);
        }
        Err(e) => {
            tracing::error!(
                "❌ Operation failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                guardrail::ErrorSeverity::Low => 0, // warning, but success
                guardrail::ErrorSeverity::Medium => 2, // bad input, retryable
                guardrail::ErrorSeverity::High => 1, // operation failed
                guardrail::ErrorSeverity::Critical => 3, // environment problem
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

// A bare CLI argument is JSON if it parses as JSON, otherwise a plain string:
// `coerce 123` arrives as a number, `coerce abc` as the string "abc".
fn parse_cli_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}
