#[cfg(not(target_arch = "wasm32"))]
mod cli;

/// PVAT command-line entry point for native builds
#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    use clap::Parser;

    let args = cli::Args::parse();
    let config = cli::load_config(args.config.as_deref());

    // Default filter comes from the configuration, RUST_LOG overrides it
    let log_level = config
        .as_ref()
        .map(|(config, _)| config.preferences.log_level)
        .unwrap_or_default();
    env_logger::Builder::new()
        .filter_level(log_level.to_level_filter())
        .parse_default_env()
        .init();

    let result = config
        .map_err(cli::CliError::from)
        .and_then(|(config, fallback)| {
            if let Some(e) = fallback {
                log::warn!("Failed to load the default config file, using defaults: {}", e);
            }
            cli::run(args.command, &config)
        });

    match result {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Application error: {}", e);
            std::process::ExitCode::FAILURE
        }
    }
}

// WASM builds only use the library
#[cfg(target_arch = "wasm32")]
fn main() {}
