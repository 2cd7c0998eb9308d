//! In-place editing of one top-level member of a JSON object.
//!
//! The document is never re-serialized. The editor locates member spans in
//! the original text and splices only the bytes of the affected member, so
//! key order, whitespace and number spelling elsewhere survive unchanged.

use crate::error::{ThemerError, ThemerResult};
use serde_json::Value;

/// Byte span of one top-level `"key": value` member.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Member {
    key: String,
    key_start: usize,
    value_end: usize,
}

/// Top-level layout of an object document.
#[derive(Debug)]
struct ObjectLayout {
    open: usize,
    close: usize,
    members: Vec<Member>,
}

/// The text a brand-new document holding only `key` should have.
fn fresh_document(key: &str, value: &Value) -> ThemerResult<String> {
    Ok(format!("{{\n  {}\n}}\n", member_text(key, value)?))
}

fn member_text(key: &str, value: &Value) -> ThemerResult<String> {
    let key = serde_json::to_string(key).map_err(|e| ThemerError::Json(e.to_string()))?;
    let value = serde_json::to_string(value).map_err(|e| ThemerError::Json(e.to_string()))?;
    Ok(format!("{key}: {value}"))
}

fn ensure_object(source: &str) -> ThemerResult<()> {
    match serde_json::from_str::<Value>(source) {
        Ok(Value::Object(_)) => Ok(()),
        Ok(_) => Err(ThemerError::Json("top-level value is not an object".to_string())),
        Err(e) => Err(ThemerError::Json(e.to_string())),
    }
}

/// Set top-level `key` to `value`.
///
/// An existing member is rewritten as `"key": <value>`; otherwise the member
/// is appended after the last one, following the document's indentation.
/// `None` means the file does not exist yet.
pub fn set_member(source: Option<&str>, key: &str, value: &Value) -> ThemerResult<String> {
    let Some(source) = source.filter(|s| !s.trim().is_empty()) else {
        return fresh_document(key, value);
    };
    ensure_object(source)?;

    let layout = scan(source)?;
    let replacement = member_text(key, value)?;

    let edited = match layout.members.iter().rev().find(|m| m.key == key) {
        Some(member) => splice(source, member.key_start, member.value_end, &replacement),
        None => match (layout.members.first(), layout.members.last()) {
            (Some(first), Some(last)) => {
                let lead = &source[layout.open + 1..first.key_start];
                let separator = match lead.rfind('\n') {
                    Some(newline) => {
                        let eol = if lead[..newline].ends_with('\r') {
                            "\r\n"
                        } else {
                            "\n"
                        };
                        format!(",{eol}{}", &lead[newline + 1..])
                    }
                    None => ", ".to_string(),
                };
                let insertion = format!("{separator}{replacement}");
                splice(source, last.value_end, last.value_end, &insertion)
            }
            _ => splice(
                source,
                layout.open,
                layout.close + 1,
                &format!("{{\n  {replacement}\n}}"),
            ),
        },
    };

    ensure_object(&edited)?;
    Ok(edited)
}

/// Remove every top-level `key` member. Returns the source unchanged when
/// the key is absent.
pub fn remove_member(source: &str, key: &str) -> ThemerResult<String> {
    ensure_object(source)?;

    let mut edited = source.to_string();
    loop {
        let layout = scan(&edited)?;
        let Some(index) = layout.members.iter().position(|m| m.key == key) else {
            break;
        };

        let members = &layout.members;
        let (start, end) = if members.len() == 1 {
            (layout.open + 1, layout.close)
        } else if index == 0 {
            (members[0].key_start, members[1].key_start)
        } else {
            (members[index - 1].value_end, members[index].value_end)
        };
        edited = splice(&edited, start, end, "");
    }

    ensure_object(&edited)?;
    Ok(edited)
}

fn splice(source: &str, start: usize, end: usize, replacement: &str) -> String {
    let mut out = String::with_capacity(source.len() + replacement.len());
    out.push_str(&source[..start]);
    out.push_str(replacement);
    out.push_str(&source[end..]);
    out
}

fn malformed(at: usize) -> ThemerError {
    ThemerError::Json(format!("unexpected input at byte {at}"))
}

struct Scanner<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl Scanner<'_> {
    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(b' ' | b'\t' | b'\n' | b'\r')) {
            self.pos += 1;
        }
    }

    fn expect(&mut self, byte: u8) -> ThemerResult<()> {
        if self.peek() == Some(byte) {
            self.pos += 1;
            Ok(())
        } else {
            Err(malformed(self.pos))
        }
    }

    /// Advance past a string literal starting at the current quote.
    fn skip_string(&mut self) -> ThemerResult<()> {
        self.expect(b'"')?;
        loop {
            match self.peek() {
                Some(b'\\') => self.pos += 2,
                Some(b'"') => {
                    self.pos += 1;
                    return Ok(());
                }
                Some(_) => self.pos += 1,
                None => return Err(malformed(self.pos)),
            }
        }
    }

    /// Advance past any JSON value.
    fn skip_value(&mut self) -> ThemerResult<()> {
        match self.peek() {
            Some(b'"') => self.skip_string(),
            Some(b'{' | b'[') => {
                let mut depth = 0usize;
                loop {
                    match self.peek() {
                        Some(b'"') => self.skip_string()?,
                        Some(b'{' | b'[') => {
                            depth += 1;
                            self.pos += 1;
                        }
                        Some(b'}' | b']') => {
                            depth -= 1;
                            self.pos += 1;
                            if depth == 0 {
                                return Ok(());
                            }
                        }
                        Some(_) => self.pos += 1,
                        None => return Err(malformed(self.pos)),
                    }
                }
            }
            Some(_) => {
                let start = self.pos;
                while !matches!(
                    self.peek(),
                    None | Some(b',' | b'}' | b']' | b' ' | b'\t' | b'\n' | b'\r')
                ) {
                    self.pos += 1;
                }
                if self.pos == start {
                    Err(malformed(start))
                } else {
                    Ok(())
                }
            }
            None => Err(malformed(self.pos)),
        }
    }
}

/// Locate the top-level members of an object document.
fn scan(source: &str) -> ThemerResult<ObjectLayout> {
    let mut scanner = Scanner {
        bytes: source.as_bytes(),
        pos: 0,
    };

    scanner.skip_whitespace();
    let open = scanner.pos;
    scanner.expect(b'{')?;

    let mut members = Vec::new();
    loop {
        scanner.skip_whitespace();
        if scanner.peek() == Some(b'}') {
            break;
        }

        let key_start = scanner.pos;
        scanner.skip_string()?;
        let key: String = serde_json::from_str(&source[key_start..scanner.pos])
            .map_err(|e| ThemerError::Json(e.to_string()))?;

        scanner.skip_whitespace();
        scanner.expect(b':')?;
        scanner.skip_whitespace();
        scanner.skip_value()?;
        members.push(Member {
            key,
            key_start,
            value_end: scanner.pos,
        });

        scanner.skip_whitespace();
        match scanner.peek() {
            Some(b',') => scanner.pos += 1,
            Some(b'}') => break,
            _ => return Err(malformed(scanner.pos)),
        }
    }

    Ok(ObjectLayout {
        open,
        close: scanner.pos,
        members,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::assert_err;
    use serde_json::json;

    fn light() -> Value {
        json!("light")
    }

    #[test]
    fn test_set_existing_member_rewrites_only_that_member() {
        let out = set_member(Some(r#"{"theme":"dark","other":"v"}"#), "theme", &light()).unwrap();
        assert_eq!(out, r#"{"theme": "light","other":"v"}"#);
    }

    #[test]
    fn test_set_appends_with_document_indentation() {
        let source = "{\n    \"numStartups\": 1.50,\n    \"tips\": {\"a\": [1, 2]}\n}\n";
        let out = set_member(Some(source), "theme", &light()).unwrap();
        assert_eq!(
            out,
            "{\n    \"numStartups\": 1.50,\n    \"tips\": {\"a\": [1, 2]},\n    \"theme\": \"light\"\n}\n"
        );
    }

    #[test]
    fn test_set_duplicate_key_rewrites_the_effective_member() {
        let source = r#"{"theme":"a","x":1,"theme":"b"}"#;
        let out = set_member(Some(source), "theme", &light()).unwrap();
        assert_eq!(out, r#"{"theme":"a","x":1,"theme": "light"}"#);

        let parsed: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["theme"], light());
    }

    #[test]
    fn test_set_appends_with_crlf_line_endings() {
        let source = "{\r\n  \"a\": 1\r\n}\r\n";
        let out = set_member(Some(source), "theme", &light()).unwrap();
        assert_eq!(out, "{\r\n  \"a\": 1,\r\n  \"theme\": \"light\"\r\n}\r\n");
    }

    #[test]
    fn test_set_appends_inline() {
        let out = set_member(Some(r#"{"a":1}"#), "theme", &light()).unwrap();
        assert_eq!(out, r#"{"a":1, "theme": "light"}"#);
    }

    #[test]
    fn test_set_into_empty_object_and_new_file() {
        let expected = "{\n  \"theme\": \"light\"\n}";
        assert_eq!(set_member(Some("{}\n"), "theme", &light()).unwrap(), format!("{expected}\n"));
        assert_eq!(set_member(None, "theme", &light()).unwrap(), format!("{expected}\n"));
        assert_eq!(set_member(Some("  "), "theme", &light()).unwrap(), format!("{expected}\n"));
    }

    #[test]
    fn test_set_same_value_is_stable() {
        let source = "{\n  \"theme\": \"light\"\n}\n";
        assert_eq!(set_member(Some(source), "theme", &light()).unwrap(), source);
    }

    #[test]
    fn test_remove_first_middle_last_and_only() {
        assert_eq!(
            remove_member(r#"{"theme":"light","other":"v"}"#, "theme").unwrap(),
            r#"{"other":"v"}"#
        );
        assert_eq!(
            remove_member("{\n  \"a\": 1,\n  \"theme\": \"x\",\n  \"b\": 2\n}", "theme").unwrap(),
            "{\n  \"a\": 1,\n  \"b\": 2\n}"
        );
        assert_eq!(
            remove_member("{\n  \"a\": 1,\n  \"theme\": \"x\"\n}\n", "theme").unwrap(),
            "{\n  \"a\": 1\n}\n"
        );
        assert_eq!(remove_member("{ \"theme\": \"x\" }", "theme").unwrap(), "{}");
    }

    #[test]
    fn test_remove_absent_key_is_identity() {
        let source = "{\"a\": 1e3, \"b\": \"}\\\"{\"}";
        assert_eq!(remove_member(source, "theme").unwrap(), source);
    }

    #[test]
    fn test_nested_theme_keys_are_not_touched() {
        let source = r#"{"projects":{"theme":"keep"},"theme":"x"}"#;
        assert_eq!(
            remove_member(source, "theme").unwrap(),
            r#"{"projects":{"theme":"keep"}}"#
        );
    }

    #[test]
    fn test_escaped_key_matches() {
        let source = r#"{"th\u0065me":"x","a":1}"#;
        assert_eq!(remove_member(source, "theme").unwrap(), r#"{"a":1}"#);
    }

    #[test]
    fn test_rejects_non_objects() {
        assert_err!(set_member(Some("[1, 2]"), "theme", &light()));
        assert_err!(remove_member("{\"a\": ", "theme"));
    }
}
