// src/output/palette.rs

//! Colours used to tell tasks apart, and the per-task line label.

use std::sync::LazyLock;

use console::Style;

static PALETTE: LazyLock<Vec<Style>> = LazyLock::new(|| {
    let s = Style::new;
    vec![
        // foreground only
        s().red(),
        s().blue(),
        s().green(),
        s().yellow().on_black(),
        s().black().bright(),
        s().magenta(),
        s().cyan(),
        s().red().bright(),
        s().blue().bright(),
        s().green().bright(),
        s().magenta().bright(),
        s().yellow().bright().on_black(),
        s().cyan().bright(),
        // inverse
        s().on_red().white(),
        s().on_blue().white(),
        s().on_cyan().black(),
        s().on_green().black(),
        s().on_magenta().white().bright(),
        s().on_yellow().black(),
        s().on_black().on_bright().white(),
        s().on_red().on_bright().white(),
        s().on_blue().on_bright().white(),
        s().on_cyan().on_bright().black(),
        s().on_green().on_bright().black(),
        s().on_magenta().on_bright().black(),
        s().on_yellow().on_bright().black(),
        // mixes
        s().on_red().yellow(),
        s().on_yellow().red(),
        s().on_blue().yellow(),
        s().on_yellow().blue(),
        s().on_black().white().bright(),
        s().on_white().on_bright().black(),
    ]
});

/// Number of distinct task colours before they wrap around.
pub fn palette_len() -> usize {
    PALETTE.len()
}

/// Style for the task at `index`; colours cycle.
pub fn task_style(index: usize, colored: bool) -> Style {
    PALETTE[index % PALETTE.len()]
        .clone()
        .force_styling(colored)
}

/// Build the line label for one task: the context name right-aligned to
/// `width` columns, coloured, followed by `" | "`.
pub fn task_label(name: &str, index: usize, width: usize, colored: bool) -> String {
    let padding = width.saturating_sub(name.chars().count());
    format!(
        "{}{} | ",
        " ".repeat(padding),
        task_style(index, colored).apply_to(name)
    )
}

/// Widest context name, in characters.
pub fn label_width<S: AsRef<str>>(names: &[S]) -> usize {
    names
        .iter()
        .map(|n| n.as_ref().chars().count())
        .max()
        .unwrap_or(0)
}

/// Gray text for informational lines on stderr.
pub fn dim(text: &str, colored: bool) -> String {
    Style::new()
        .black()
        .bright()
        .force_styling(colored)
        .apply_to(text)
        .to_string()
}

/// Red text for the `error: ` marker.
pub fn error_marker(colored: bool) -> String {
    Style::new()
        .red()
        .force_styling(colored)
        .apply_to("error: ")
        .to_string()
}
