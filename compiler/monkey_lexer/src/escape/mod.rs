//! Escape sequences in string literals.
//!
//! Recognized escapes: `\n`, `\r`, `\t`, `\\`, `\"`. Anything else after a
//! backslash is kept literally, backslash included.

#[inline]
fn resolve_escape(c: char) -> Option<char> {
    match c {
        'n' => Some('\n'),
        'r' => Some('\r'),
        't' => Some('\t'),
        '\\' => Some('\\'),
        '"' => Some('"'),
        _ => None,
    }
}

pub(crate) fn unescape_string(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some(esc) => match resolve_escape(esc) {
                Some(resolved) => result.push(resolved),
                None => {
                    result.push('\\');
                    result.push(esc);
                }
            },
            None => result.push('\\'),
        }
    }

    result
}
