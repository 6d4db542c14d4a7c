// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Console output styling.
//!
//! Thin helpers over crossterm's [`Stylize`] so that every part of the
//! console loop prints prompts, headings and errors the same way.
//!
//! # Compatibility
//!
//! Styling is emitted as ANSI escape sequences. Most modern terminals
//! support these, and crossterm falls back to plain text where it has to.

use std::io::{self, Write};

use crossterm::style::Stylize;

/// Prints the input prompt without a trailing newline.
///
/// # Note
///
/// This function flushes `stdout` so the prompt shows before the loop blocks
/// reading the next line.
pub(crate) fn print_prompt(prompt: &str) -> io::Result<()> {
    let mut stdout = io::stdout();
    write!(stdout, "{} ", prompt.green().bold())?;
    stdout.flush()
}

pub(crate) fn print_heading(text: &str) {
    println!("{}", text.cyan().bold());
}

pub(crate) fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{}", line);
    }
}

pub(crate) fn print_error(message: &str) {
    println!("{} {}", "[error]".red().bold(), message);
}
