//! Terminal output. Every line goes through `tracing` on the print target so
//! the formatter decides how it reaches stdout.

use std::fmt::Display;

use crate::terminal::colors;
use colored::*;
use primer_common::log::PRINT_TARGET;
use tracing::info;
use unicode_width::UnicodeWidthStr;

pub const TOTAL_WIDTH: usize = 64;

#[macro_export]
macro_rules! mprint {
    () => {
        $crate::terminal::print::print("");
    };
    ($msg:expr) => {
        $crate::terminal::print::print($msg);
    };
}

pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, raw_msg = msg);
}

pub fn banner(no_banner: bool, q_level: u8) {
    if no_banner || q_level > 0 {
        return;
    }

    let title: String = format!("⟦ PRIMER v{} ⟧ ", env!("CARGO_PKG_VERSION"));
    let (left, right) = rule_sides(UnicodeWidthStr::width(title.as_str()));
    print(&format!(
        "{}{}{}",
        "═".repeat(left).bright_black(),
        title.bright_green().bold(),
        "═".repeat(right).bright_black()
    ));
}

pub fn header(msg: &str, q_level: u8) {
    if q_level > 0 {
        return;
    }

    let title: String = format!("⟦ {} ⟧", msg.to_uppercase());
    let (left, right) = rule_sides(title.chars().count());
    print(&format!(
        "{}{}{}",
        "─".repeat(left).bright_black(),
        title.bright_green(),
        "─".repeat(right).bright_black()
    ));
}

pub fn fat_separator() {
    print(&"═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR).to_string());
}

/// `> key....: value`, with dots padding `key` to `key_width`.
pub fn aligned_line(key: &str, key_width: usize, value: impl Display) {
    let prefix: ColoredString = ">".color(colors::SEPARATOR);
    print(&format!(
        "{} {}{} {}",
        prefix,
        key.color(colors::PRIMARY),
        dotted_colon(key, key_width),
        value
    ));
}

pub fn tree_head<I: Display>(idx: I, name: &str) {
    print(&format!(
        "{}{}{} {}",
        "[".color(colors::SEPARATOR),
        idx.to_string().color(colors::ACCENT),
        "]".color(colors::SEPARATOR),
        name.color(colors::PRIMARY)
    ));
}

pub fn as_tree_one_level(details: Vec<(String, ColoredString)>) {
    let width: usize = key_width(details.iter().map(|(key, _)| key.as_str()));

    for (i, (key, value)) in details.iter().enumerate() {
        let branch: &str = if i + 1 == details.len() { "└─" } else { "├─" };
        print(&format!(
            " {} {}{} {}",
            branch.bright_black(),
            key.color(colors::TEXT_DEFAULT),
            dotted_colon(key, width),
            value
        ));
    }
}

pub fn centerln(msg: &str) {
    let space = " ".repeat(TOTAL_WIDTH.saturating_sub(console::measure_text_width(msg)) / 2);
    print(&format!("{}{}{}", space, msg, space));
}

pub fn end_of_program(q_level: u8) {
    if q_level > 1 {
        return;
    }
    fat_separator();
}

/// Widest key, in characters.
pub fn key_width<'a>(keys: impl IntoIterator<Item = &'a str>) -> usize {
    keys.into_iter()
        .map(|key| key.chars().count())
        .max()
        .unwrap_or(0)
}

fn dotted_colon(key: &str, width: usize) -> String {
    let dots: usize = width.saturating_sub(key.chars().count()) + 1;
    format!(
        "{}{}",
        ".".repeat(dots).color(colors::SEPARATOR),
        ":".color(colors::SEPARATOR)
    )
}

/// Splits the rule around a title of `title_width` columns.
fn rule_sides(title_width: usize) -> (usize, usize) {
    let fill: usize = TOTAL_WIDTH.saturating_sub(title_width);
    let left: usize = fill / 2;
    (left, fill - left)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_width() {
        assert_eq!(key_width(["Radius", "Area", "Perimeter"]), 9);
        assert_eq!(key_width(Vec::<&str>::new()), 0);
    }

    #[test]
    fn test_dots_pad_to_width() {
        let short = dotted_colon("Area", 9);
        let long = dotted_colon("Perimeter", 9);
        assert_eq!(console::measure_text_width(&short), 7);
        assert_eq!(console::measure_text_width(&long), 2);
    }

    #[test]
    fn test_rule_sides() {
        assert_eq!(rule_sides(10), (27, 27));
        assert_eq!(rule_sides(11), (26, 27));
        assert_eq!(rule_sides(100), (0, 0));
    }
}
