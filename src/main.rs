use anyhow::Context;
use clap::Parser;
use field_ladder::utils::palette::{paint, Tone};
use field_ladder::utils::{logger, validation::Validate};
use field_ladder::{CliConfig, GeneratorConfig, LadderEngine, LadderError};

fn main() -> anyhow::Result<()> {
    // Usage errors (missing, extra or malformed arguments) exit here via clap.
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    // Arity is checked before anything else is read.
    if let Err(e) = config.validate() {
        fail(&e, !config.no_color);
    }

    let file_config = match &config.config {
        Some(path) => {
            tracing::info!("Loading generator defaults from: {}", path.display());
            GeneratorConfig::from_file(path)
                .with_context(|| format!("Failed to load config file '{}'", path.display()))?
        }
        None => GeneratorConfig::default(),
    };

    let plan = match config.resolve(&file_config) {
        Ok(plan) => plan,
        Err(e) => fail(&e, config.color_enabled(&file_config)),
    };

    tracing::info!(
        "Generating {} section(s) for arities {}..={}",
        plan.kinds.len(),
        plan.from,
        plan.to
    );

    let engine = LadderEngine::new(plan);
    let stdout = std::io::stdout();
    if let Err(e) = engine.run(&mut stdout.lock()) {
        fail(&e, false);
    }

    Ok(())
}

fn fail(error: &LadderError, color: bool) -> ! {
    tracing::debug!("Rejected: {:?}", error);
    tracing::debug!("Suggestion: {}", error.recovery_suggestion());
    eprintln!("{}", paint(Tone::Failure, &error.to_string(), color));
    std::process::exit(error.exit_code());
}
