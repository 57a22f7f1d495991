use std::fmt::Write;

use anyhow::Result;
use buildstamp_core::Properties;

/// Parse properties-file text into ordered entries.
///
/// Supports `#`/`!` comments, `=`/`:`/whitespace separators, backslash line continuations and
/// the usual escapes including `\uXXXX`. Later duplicates overwrite earlier values.
///
/// # Errors
/// Returns error if a `\u` escape is not followed by four hex digits.
pub fn parse_properties(content: &str) -> Result<Properties> {
    let mut properties = Properties::new();
    let mut lines = content.lines();
    while let Some(line) = lines.next() {
        let trimmed = line.trim_start_matches(is_blank);
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('!') {
            continue;
        }
        let mut logical = String::new();
        let mut current = trimmed;
        loop {
            if !ends_with_continuation(current) {
                logical.push_str(current);
                break;
            }
            logical.push_str(&current[..current.len() - 1]);
            match lines.next() {
                Some(next) => current = next.trim_start_matches(is_blank),
                None => break,
            }
        }
        let (key, value) = split_entry(&logical);
        properties.set(&unescape(key)?, unescape(value)?);
    }
    Ok(properties)
}

/// Render entries in properties-file format, preceded by an optional comment and the
/// timestamp line.
#[must_use]
pub fn store_properties(properties: &Properties, comment: Option<&str>, timestamp: &str) -> String {
    let mut out = String::new();
    if let Some(comment) = comment {
        let _ = writeln!(out, "#{comment}");
    }
    let _ = writeln!(out, "#{timestamp}");
    for (key, value) in properties.iter() {
        let _ = writeln!(out, "{}={}", escape(key, true), escape(value, false));
    }
    out
}

const fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\x0c')
}

fn ends_with_continuation(line: &str) -> bool {
    line.chars().rev().take_while(|c| *c == '\\').count() % 2 == 1
}

fn split_entry(line: &str) -> (&str, &str) {
    let mut key_end = line.len();
    let mut escaped = false;
    for (i, c) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '=' | ':' => {
                key_end = i;
                break;
            }
            c if is_blank(c) => {
                key_end = i;
                break;
            }
            _ => {}
        }
    }
    let rest = line[key_end..].trim_start_matches(is_blank);
    let rest = rest.strip_prefix(['=', ':']).unwrap_or(rest);
    (&line[..key_end], rest.trim_start_matches(is_blank))
}

fn unescape(text: &str) -> Result<String> {
    let mut out = String::with_capacity(text.len());
    let mut units: Vec<u16> = Vec::new();
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some('u') => {
                    let hex: String = chars.by_ref().take(4).collect();
                    if hex.len() != 4 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
                        anyhow::bail!("Malformed \\uxxxx encoding");
                    }
                    units.push(u16::from_str_radix(&hex, 16)?);
                    continue;
                }
                Some(escaped) => {
                    flush_units(&mut units, &mut out);
                    out.push(match escaped {
                        't' => '\t',
                        'n' => '\n',
                        'r' => '\r',
                        'f' => '\x0c',
                        other => other,
                    });
                }
                None => flush_units(&mut units, &mut out),
            }
            continue;
        }
        flush_units(&mut units, &mut out);
        out.push(c);
    }
    flush_units(&mut units, &mut out);
    Ok(out)
}

fn flush_units(units: &mut Vec<u16>, out: &mut String) {
    if !units.is_empty() {
        out.push_str(&String::from_utf16_lossy(units));
        units.clear();
    }
}

fn escape(text: &str, is_key: bool) -> String {
    let mut out = String::with_capacity(text.len());
    for (i, c) in text.chars().enumerate() {
        match c {
            '\\' => out.push_str("\\\\"),
            ' ' if i == 0 || is_key => out.push_str("\\ "),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\x0c' => out.push_str("\\f"),
            '=' | ':' | '#' | '!' => {
                out.push('\\');
                out.push(c);
            }
            c if (c as u32) < 0x20 || (c as u32) > 0x7e => {
                let mut buf = [0u16; 2];
                for unit in c.encode_utf16(&mut buf) {
                    let _ = write!(out, "\\u{unit:04X}");
                }
            }
            c => out.push(c),
        }
    }
    out
}
