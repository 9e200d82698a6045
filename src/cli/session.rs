//! Interactive session with Download, Browse and Export screens.

use dialoguer::{Input, Select};

use crate::app::App;
use crate::config::PlatformSelector;
use crate::download::DownloadRequest;
use crate::error::{Error, Result};
use crate::output::{
    print_error, print_header, print_help, print_info, print_success, print_table, print_warning,
};

/// Navigation entries, in menu order.
const SCREENS: [&str; 4] = [
    "Download Videos",
    "View Downloaded Files",
    "Export to Excel",
    "Quit",
];

/// What the export screen can write out.
const EXPORT_OPTIONS: [&str; 2] = ["Download History", "Files in Directory"];

/// Run the interactive loop until the user quits.
pub async fn run_session(app: &mut App) -> Result<()> {
    print_help();

    loop {
        let choice = Select::new()
            .with_prompt("Navigation")
            .items(&SCREENS)
            .default(0)
            .interact_opt()
            .map_err(prompt_error)?;

        match choice {
            Some(0) => download_screen(app).await?,
            Some(1) => browse_screen(app)?,
            Some(2) => export_screen(app)?,
            _ => break,
        }
    }

    print_info(&format!(
        "Session ended with {} download(s)",
        app.history().len()
    ));
    Ok(())
}

async fn download_screen(app: &mut App) -> Result<()> {
    print_header("Download Videos");

    let url = prompt("Enter YouTube or Instagram video URL", None)?;
    let filename = prompt("Enter desired filename (without extension)", None)?;
    let default_dir = app.config().download_directory().display().to_string();
    let output_path = prompt("Enter download path", Some(default_dir))?;
    let platform = select_platform(app.config().options.default_platform)?;

    let request = DownloadRequest::new(url, filename, output_path, platform);
    print_info("Downloading video...");

    let outcome = app.download(&request).await;
    if outcome.is_success() {
        print_success(&outcome.message);
    } else {
        print_error(&outcome.message);
    }

    Ok(())
}

fn browse_screen(app: &App) -> Result<()> {
    print_header("View Downloaded Files");

    let default_dir = app.config().download_directory().display().to_string();
    let scan_path = prompt("Enter path to scan for files", Some(default_dir))?;

    match app.scan(&scan_path) {
        Ok(files) => print_table(&files, &format!("No files found in {}", scan_path.trim())),
        Err(e) => print_error(&e.to_string()),
    }

    print_header("Download History");
    print_table(app.history().records(), "No download history yet");

    Ok(())
}

fn export_screen(app: &App) -> Result<()> {
    print_header("Export to Excel");

    let option = Select::new()
        .with_prompt("What would you like to export?")
        .items(&EXPORT_OPTIONS)
        .default(0)
        .interact()
        .map_err(prompt_error)?;

    let default_export = app.config().export_directory().display().to_string();
    let export_path = prompt("Enter path to save Excel file", Some(default_export))?;

    let result = if option == 0 {
        app.export_history(&export_path)
    } else {
        let default_dir = app.config().download_directory().display().to_string();
        let directory = prompt("Enter directory to export files from", Some(default_dir))?;
        app.export_directory(&directory, &export_path)
    };

    match result {
        Ok(path) => print_success(&format!("Exported to {}", path.display())),
        Err(Error::Export(message)) => print_warning(&message),
        Err(e) => print_error(&e.to_string()),
    }

    Ok(())
}

fn select_platform(default: PlatformSelector) -> Result<PlatformSelector> {
    let labels: Vec<String> = PlatformSelector::ALL.iter().map(|p| p.to_string()).collect();
    let default_idx = PlatformSelector::ALL
        .iter()
        .position(|p| *p == default)
        .unwrap_or(0);

    let idx = Select::new()
        .with_prompt("Select platform")
        .items(&labels)
        .default(default_idx)
        .interact()
        .map_err(prompt_error)?;

    Ok(PlatformSelector::ALL[idx])
}

fn prompt(label: &str, default: Option<String>) -> Result<String> {
    let mut input = Input::<String>::new().with_prompt(label).allow_empty(true);
    if let Some(default) = default {
        input = input.default(default);
    }
    input.interact_text().map_err(prompt_error)
}

fn prompt_error(e: dialoguer::Error) -> Error {
    match e {
        dialoguer::Error::IO(io) => Error::Io(io),
    }
}
