use crate::cli::theme::CliTheme;
use crossterm::style::{Color, Stylize};
use std::io::{self, IsTerminal, Write};

/// Prints `(name, path)` rows under a NAME/PATH header. An empty list still
/// prints the header.
pub fn print_entries(
    out: &mut dyn Write,
    entries: &[(String, String)],
    theme: &CliTheme,
) -> io::Result<()> {
    let use_color = theme.enabled && io::stdout().is_terminal();
    let width = entries
        .iter()
        .map(|(name, _)| name.chars().count())
        .max()
        .unwrap_or(0)
        .max("NAME".len());

    writeln!(
        out,
        "{}  {}",
        colorize(&pad("NAME", width), theme.header, use_color),
        colorize("PATH", theme.header, use_color)
    )?;
    for (name, path) in entries {
        writeln!(
            out,
            "{}  {}",
            colorize(&pad(name, width), theme.name, use_color),
            colorize(path, theme.path, use_color)
        )?;
    }
    Ok(())
}

fn pad(text: &str, width: usize) -> String {
    format!("{:<width$}", text, width = width)
}

fn colorize(text: &str, color: Color, enabled: bool) -> String {
    if enabled {
        format!("{}", text.with(color))
    } else {
        text.to_string()
    }
}
