use anyhow::Context;
use clap::Parser;
use solid_shapes::utils::{logger, validation::Validate};
use solid_shapes::{CliConfig, ShapeDimensions, ShapeError, ShowcaseRunner, TomlConfig};

fn load_dimensions(config: &CliConfig) -> anyhow::Result<(ShapeDimensions, Option<String>)> {
    let Some(path) = &config.config else {
        return Ok((config.apply_overrides(ShapeDimensions::default()), None));
    };

    let file_config = TomlConfig::from_file(path)
        .with_context(|| format!("Failed to load config file '{}'", path))?;
    file_config
        .validate()
        .with_context(|| format!("Invalid values in config file '{}'", path))?;

    let level = file_config.log_level().map(str::to_string);
    Ok((config.apply_overrides(file_config.dimensions()), level))
}

fn exit_with(err: &anyhow::Error) -> ! {
    let Some(shape_error) = err.downcast_ref::<ShapeError>() else {
        eprintln!("❌ {:#}", err);
        std::process::exit(1);
    };

    tracing::error!(
        "❌ Run failed: {:#} (Category: {:?}, Severity: {:?})",
        err,
        shape_error.category(),
        shape_error.severity()
    );
    eprintln!("❌ {}", shape_error.user_friendly_message());
    eprintln!("💡 {}", shape_error.recovery_suggestion());
    std::process::exit(shape_error.exit_code());
}

fn main() {
    let config = CliConfig::parse();

    if let Err(e) = config.validate() {
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    let (dimensions, level) = match load_dimensions(&config) {
        Ok(loaded) => loaded,
        Err(e) => {
            logger::init_cli_logger(config.verbose);
            exit_with(&e)
        }
    };

    // 初始化日誌
    match level.as_deref() {
        Some(level) if !config.verbose => logger::init_with_level(level),
        _ => logger::init_cli_logger(config.verbose),
    }

    tracing::info!("Starting solid-shapes");
    tracing::debug!("CLI config: {:?}", config);
    tracing::debug!("Resolved dimensions: {:?}", dimensions);

    if let Err(e) = dimensions.validate() {
        exit_with(&anyhow::Error::from(e));
    }

    let runner = ShowcaseRunner::new(dimensions);
    match runner.run_to_stdout() {
        Ok(summary) => tracing::info!("✅ Showcase completed: {:?}", summary),
        Err(e) => exit_with(&anyhow::Error::from(e)),
    }
}
