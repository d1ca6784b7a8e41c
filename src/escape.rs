//! Display-safe rendering of output text.
//!
//! Each line is escaped on its own and the lines are joined back with `\n`, so
//! the result has exactly the line structure of the input while every other
//! control or invisible character shows up as a visible escape. Both sides of a
//! comparison go through here before they are diffed.

/// Escapes `text` line by line, keeping the `\n` separators verbatim.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            out.push('\n');
        }
        escape_line_into(line, &mut out);
    }
    out
}

/// Escapes a single line. A `\n` inside `line` is escaped like any other
/// control character.
pub fn escape_line(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    escape_line_into(line, &mut out);
    out
}

fn escape_line_into(line: &str, out: &mut String) {
    for ch in line.chars() {
        match ch {
            '\x07' => out.push_str("\\a"),
            '\x08' => out.push_str("\\b"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\x0b' => out.push_str("\\v"),
            '\x0c' => out.push_str("\\f"),
            '\r' => out.push_str("\\r"),
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            c if c.is_ascii_control() => {
                out.push_str(&format!("\\x{:02x}", c as u32));
            }
            c if is_invisible(c) => {
                out.push_str(&format!("\\u{{{:04x}}}", c as u32));
            }
            c => out.push(c),
        }
    }
}

/// Characters that render as nothing (or as ambiguous blank space) in a
/// terminal and would hide a difference.
fn is_invisible(c: char) -> bool {
    if c.is_control() {
        return true;
    }
    if c.is_whitespace() && c != ' ' {
        return true;
    }
    matches!(
        c,
        '\u{00ad}'
            | '\u{180e}'
            | '\u{200b}'..='\u{200f}'
            | '\u{202a}'..='\u{202e}'
            | '\u{2060}'..='\u{2064}'
            | '\u{2066}'..='\u{206f}'
            | '\u{feff}'
            | '\u{fff9}'..='\u{fffb}'
    )
}
