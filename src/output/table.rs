//! Tabular rendering of records.

use console::style;

use crate::export::{ExportCell, ExportRow};

/// Render rows as an aligned text table.
pub fn render_table<R: ExportRow>(rows: &[R]) -> String {
    let headers = R::headers();
    let body: Vec<Vec<String>> = rows
        .iter()
        .map(|row| row.cells().into_iter().map(cell_text).collect())
        .collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in &body {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    out.push_str(&format_line(headers.iter().map(|h| h.to_string()), &widths));
    out.push('\n');
    out.push_str(
        &widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("  "),
    );
    for row in body {
        out.push('\n');
        out.push_str(&format_line(row.into_iter(), &widths));
    }
    out
}

/// Print rows as a table, or `empty_message` when there are none.
pub fn print_table<R: ExportRow>(rows: &[R], empty_message: &str) {
    if rows.is_empty() {
        println!("{} {}", style("[info]").cyan(), empty_message);
        return;
    }
    println!("{}", render_table(rows));
    println!("{}", style(format!("{} row(s)", rows.len())).dim());
}

fn cell_text(cell: ExportCell) -> String {
    match cell {
        ExportCell::Text(text) => text,
        ExportCell::Number(n) => format!("{:.2}", n),
    }
}

fn format_line(cells: impl Iterator<Item = String>, widths: &[usize]) -> String {
    cells
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}
