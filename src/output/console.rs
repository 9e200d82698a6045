//! Console output utilities.

use console::style;

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("[info]").cyan(), message);
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", style("[done]").green().bold(), message);
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    println!("{} {}", style("[warn]").yellow().bold(), message);
}

/// Print an error message to stderr.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("[fail]").red().bold(), style(message).red());
}

/// Print the application banner.
pub fn print_banner() {
    println!();
    println!("{}", style(" vidgrab ").black().on_cyan().bold());
    println!("{}", style("YouTube and Instagram video downloader").dim());
}

/// Print a screen heading.
pub fn print_header(title: &str) {
    println!();
    println!("{}", style(title).bold().underlined());
}

/// Print the usage notes shown at the bottom of the interactive session.
pub fn print_help() {
    println!();
    println!("{}", style("How to use this app").bold());
    println!("  1. Enter the URL of a YouTube or Instagram video");
    println!("  2. Provide a desired filename");
    println!("  3. Specify the download path");
    println!("  4. Choose 'Download Videos' to fetch it");
    println!("  5. View your downloaded files in 'View Downloaded Files'");
    println!("  6. Export file lists in 'Export to Excel'");
    println!();
}

/// Print the effective settings.
pub fn print_config_summary(download_dir: &str, export_dir: &str, default_platform: &str) {
    println!();
    println!("{}", style("Settings").bold());
    println!("  Download directory: {}", download_dir);
    println!("  Export directory:   {}", export_dir);
    println!("  Platform:           {}", default_platform);
    println!();
}
