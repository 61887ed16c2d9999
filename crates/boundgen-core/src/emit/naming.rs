//! Rust naming rules for emitted code

use crate::error::{BoundgenError, BoundgenResult};

const STRICT_KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "dyn", "else", "enum", "extern", "false",
    "fn", "for", "gen", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut", "pub",
    "ref", "return", "static", "struct", "trait", "true", "type", "unsafe", "use", "where",
    "while", "abstract", "become", "box", "do", "final", "macro", "override", "priv", "try",
    "typeof", "unsized", "virtual", "yield",
];

// Keywords that cannot be written as raw identifiers
const RESERVED: &[&str] = &["crate", "self", "super", "Self", "_"];

/// Render `name` as a Rust identifier, using a raw identifier for keywords.
pub fn rust_identifier(name: &str) -> BoundgenResult<String> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(first) => {
            (first.is_alphabetic() || first == '_') && chars.all(|c| c.is_alphanumeric() || c == '_')
        }
        None => false,
    };
    if !valid || RESERVED.contains(&name) {
        return Err(BoundgenError::emit(format!(
            "'{}' is not usable as a Rust identifier",
            name
        )));
    }

    if STRICT_KEYWORDS.contains(&name) {
        Ok(format!("r#{}", name))
    } else {
        Ok(name.to_string())
    }
}

/// Module name for a record's unit: `UserProfile` becomes `user_profile_validator`.
pub fn module_name(record: &str) -> String {
    format!("{}_validator", snake_case(record))
}

fn snake_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() {
            let prev = i.checked_sub(1).map(|p| chars[p]);
            let next = chars.get(i + 1);
            let boundary = match prev {
                Some(p) if p.is_lowercase() || p.is_ascii_digit() => true,
                Some(p) if p.is_uppercase() => next.is_some_and(|n| n.is_lowercase()),
                _ => false,
            };
            if boundary && !out.ends_with('_') {
                out.push('_');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_name() {
        assert_eq!(module_name("User"), "user_validator");
        assert_eq!(module_name("UserProfile"), "user_profile_validator");
        assert_eq!(module_name("HTTPRequest"), "http_request_validator");
        assert_eq!(module_name("Point3D"), "point3_d_validator");
    }

    #[test]
    fn test_rust_identifier() {
        assert_eq!(rust_identifier("name").unwrap(), "name");
        assert_eq!(rust_identifier("type").unwrap(), "r#type");
        assert!(rust_identifier("self").is_err());
        assert!(rust_identifier("first-name").is_err());
        assert!(rust_identifier("9lives").is_err());
        assert!(rust_identifier("").is_err());
    }
}
