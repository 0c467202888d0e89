//! Application startup

use crate::app::cli::display::format_output_line;
use crate::app::cli::{load_config, Args};
use crate::app::error::AppError;
use crate::core::error_handling::log_error_with_context;
use crate::core::logging::init_logging;
use crate::core::version::version_banner;
use crate::harness::{ScriptRunner, ScriptedProvider};
use clap::Parser;

/// Parse arguments, run the script and return the process exit code
pub fn startup() -> i32 {
    let args = Args::parse();

    if args.version {
        println!("{}", version_banner());
        return 0;
    }

    let use_color = args.use_color();
    colored::control::set_override(use_color);

    let log_level = args.effective_log_level();
    let log_file = args.log_file_path();
    if let Err(e) = init_logging(
        Some(&log_level),
        args.log_format.as_deref(),
        log_file.as_deref(),
        use_color,
    ) {
        eprintln!("Failed to initialize logging: {}", e);
        return 1;
    }

    log::info!("{} starting", version_banner());

    let result = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(AppError::Runtime)
        .and_then(|runtime| runtime.block_on(run(args)));

    match result {
        Ok(()) => 0,
        Err(e) => {
            log_error_with_context(&e, "Running push script");
            1
        }
    }
}

async fn run(args: Args) -> Result<(), AppError> {
    let config = load_config(args.config_file).await?;
    log::debug!("Presentation policy: {:?}", config.presentation_policy());

    let script_path = args.script.ok_or(AppError::MissingScript)?;
    let script = tokio::fs::read_to_string(&script_path)
        .await
        .map_err(|source| AppError::Read {
            path: script_path.clone(),
            source,
        })?;
    let steps = ScriptRunner::parse(&script)?;
    log::info!("Running {} steps from {}", steps.len(), script_path.display());

    let provider = match args.token_error {
        Some(message) => ScriptedProvider::failing(message),
        None => ScriptedProvider::with_token(args.token),
    };
    let runner = ScriptRunner::new(&config, provider);

    for line in runner.run(&steps).await? {
        println!("{}", format_output_line(&line));
    }

    log::info!(
        "Finished: {} events dispatched",
        runner.coordinator().dispatch_statistics().dispatched()
    );
    Ok(())
}
