use std::fmt::Display;
use std::path::Path;

use colored::*;

use crate::terminal::colors;

pub const TOTAL_WIDTH: usize = 64;
const KEY_WIDTH: usize = 14;

/// Results go to stdout. Log lines go to stderr through `tracing`.
pub fn print(msg: &str) {
    println!("{msg}");
}

/// Section banner above a command's results. Hidden from `-q` on.
pub fn header(msg: &str, q_level: u8) {
    if q_level > 0 {
        return;
    }

    let title = format!(" {} ", msg.to_uppercase());
    let rule_len = TOTAL_WIDTH.saturating_sub(title.chars().count()) / 2;
    let rule = "─".repeat(rule_len).color(colors::SEPARATOR);

    print(&format!("{rule}{}{rule}", title.color(colors::PRIMARY).bold()));
}

pub fn aligned_line<V: Display>(key: &str, value: V, q_level: u8) {
    if q_level > 0 {
        return;
    }

    let dots: String = ".".repeat(KEY_WIDTH.saturating_sub(key.len()));
    let colon: String = format!(
        "{}{}",
        dots.color(colors::SEPARATOR),
        ":".color(colors::SEPARATOR)
    );
    let prefix: ColoredString = ">".color(colors::SEPARATOR);
    print(&format!(
        "{} {}{} {}",
        prefix,
        key.color(colors::PRIMARY),
        colon,
        value.to_string().color(colors::TEXT_DEFAULT)
    ));
}

/// Announces a written table on stdout. Always shown, scripts rely on it.
pub fn saved(what: &str, path: &Path) {
    print(&format!(
        "{} saved to {}",
        what,
        path.display().to_string().color(colors::ACCENT).bold()
    ));
}

pub fn centerln(msg: &str) {
    let space = " ".repeat(TOTAL_WIDTH.saturating_sub(console::measure_text_width(msg)) / 2);
    print(&format!("{}{}", space, msg));
}

pub fn fat_separator(q_level: u8) {
    if q_level > 0 {
        return;
    }
    print(&format!("{}", "═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR)));
}
