//! GymMaster CLI - workout rest timer for the terminal
//!
//! - Rest countdowns with quick-select presets
//! - Set-by-set exercise sessions with rest and break timers
//! - Daily calorie and macronutrient calculator

use anyhow::Result;
use clap::{CommandFactory, Parser};

use gymmaster::cli::{run_session, run_timer, Cli, Commands, Display};
use gymmaster::nutrition::{self, NutritionError};
use gymmaster::timer::TimerError;
use gymmaster::types::TimerConfig;

/// Main entry point
#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging
    init_tracing(cli.verbose);

    // Execute command
    if let Err(e) = execute(cli).await {
        Display::show_error(&e.to_string());
        if let Some(hint) = suggestion_for(&e) {
            eprintln!("  {}", hint);
        }
        std::process::exit(1);
    }
}

/// Initializes the tracing subscriber for logging.
fn init_tracing(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

/// Loads the timer configuration, falling back to defaults.
fn load_config(cli: &Cli) -> Result<TimerConfig> {
    match &cli.config {
        Some(path) => Ok(TimerConfig::from_json_file(path)?),
        None => Ok(TimerConfig::default()),
    }
}

/// Executes the CLI command.
async fn execute(cli: Cli) -> Result<()> {
    if cli.verbose {
        tracing::info!("Verbose mode enabled");
    }

    let config = load_config(&cli)?;

    match cli.command {
        Some(Commands::Timer(args)) => {
            run_timer(&args, &config).await?;
        }
        Some(Commands::Session(args)) => {
            run_session(&args, &config).await?;
        }
        Some(Commands::Presets) => {
            Display::show_presets(&config.presets);
        }
        Some(Commands::Nutrition(args)) => {
            let plan = nutrition::calculate(&args.to_profile())?;
            Display::show_nutrition_plan(&plan);
        }
        Some(Commands::Completions { shell }) => {
            generate_completions(shell);
        }
        None => {
            // No command provided, show help
            Cli::command().print_help()?;
        }
    }

    Ok(())
}

/// Returns a hint for errors that carry one.
fn suggestion_for(e: &anyhow::Error) -> Option<&'static str> {
    if let Some(err) = e.downcast_ref::<TimerError>() {
        return Some(err.suggestion());
    }
    e.downcast_ref::<NutritionError>().map(NutritionError::suggestion)
}

/// Generates shell completion scripts.
fn generate_completions(shell: clap_complete::Shell) {
    use clap_complete::generate;
    use std::io;

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    generate(shell, &mut cmd, bin_name, &mut io::stdout());
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_timer() {
        let cli = Cli::parse_from(["gymmaster", "timer", "--seconds", "90"]);
        match cli.command {
            Some(Commands::Timer(args)) => assert_eq!(args.seconds, Some(90)),
            _ => panic!("Expected Timer command"),
        }
    }

    #[test]
    fn test_load_config_default() {
        let cli = Cli::parse_from(["gymmaster", "presets"]);
        assert_eq!(load_config(&cli).unwrap(), TimerConfig::default());
    }

    #[test]
    fn test_suggestion_for_timer_error() {
        let e = anyhow::Error::new(TimerError::NegativeDuration(-5));
        assert_eq!(
            suggestion_for(&e),
            Some(TimerError::NegativeDuration(-5).suggestion())
        );
    }

    #[test]
    fn test_suggestion_for_nutrition_error() {
        let e = anyhow::Error::new(NutritionError::AgeOutOfRange(90));
        assert!(suggestion_for(&e).is_some());
    }

    #[test]
    fn test_suggestion_for_other_error() {
        let e = anyhow::anyhow!("plain");
        assert!(suggestion_for(&e).is_none());
    }
}
