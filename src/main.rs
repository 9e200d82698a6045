//! vidgrab - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use vidgrab::{
    app::App,
    cli::{run_session, Args, Command},
    config::{validate_config, Config, PlatformSelector},
    download::DownloadRequest,
    error::{exit_codes, Result},
    output::{
        print_banner, print_config_summary, print_error, print_info, print_success, print_table,
        print_warning,
    },
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

async fn run() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_env_filter(filter).with_target(false).init();

    // Load configuration
    if !args.config.exists() {
        tracing::debug!("Configuration file not found: {}", args.config.display());
    }
    let mut config = Config::load_or_default(&args.config)?;

    // Merge CLI arguments into config
    args.merge_into_config(&mut config);

    // Validate configuration
    validate_config(&config)?;

    let mut app = App::new(config)?;

    match args.command.clone().unwrap_or(Command::Session) {
        Command::Download {
            url,
            name,
            output,
            platform,
        } => {
            let output = output
                .unwrap_or_else(|| app.config().download_directory().display().to_string());
            let platform = platform
                .map(PlatformSelector::from)
                .unwrap_or(app.config().options.default_platform);

            let request = DownloadRequest::new(url, name, output, platform);
            print_info("Downloading video...");

            let outcome = app.download(&request).await;
            match outcome.error {
                None => print_success(&outcome.message),
                Some(e) => return Err(e),
            }
        }
        Command::Browse { path } => {
            let path =
                path.unwrap_or_else(|| app.config().download_directory().display().to_string());
            let files = app.scan(&path)?;
            print_table(&files, &format!("No files found in {}", path.trim()));
        }
        Command::Export { from, to } => {
            let from =
                from.unwrap_or_else(|| app.config().download_directory().display().to_string());
            let to = to.unwrap_or_else(|| app.config().export_directory().display().to_string());
            let path = app.export_directory(&from, &to)?;
            print_success(&format!("Exported to {}", path.display()));
        }
        Command::Session => {
            print_banner();
            if !args.config.exists() {
                print_warning(&format!(
                    "Configuration file not found: {}",
                    args.config.display()
                ));
                print_info("Using default configuration with CLI arguments");
            }

            let config = app.config();
            print_config_summary(
                &config.download_directory().display().to_string(),
                &config.export_directory().display().to_string(),
                &config.options.default_platform.to_string(),
            );

            run_session(&mut app).await?;
        }
    }

    Ok(())
}

