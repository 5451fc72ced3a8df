#![allow(dead_code)]

pub mod command;
pub mod file;

/// Strip ANSI escape sequences so assertions can target layout separately
/// from styling.
pub fn strip_ansi(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut chars = input.chars();

    while let Some(c) = chars.next() {
        if c == '\u{1b}' {
            for c in chars.by_ref() {
                if c == 'm' {
                    break;
                }
            }
        } else {
            output.push(c);
        }
    }

    output
}
