//! Text based scaffold that finds method bodies by their declaration
//!
//! A method is located by its name followed by a parameter list, an optional
//! return type annotation and the opening brace of the body. Call sites such
//! as `this.SetupSecrets();` never match. Brace matching skips string
//! literals and comments, which is all the structure the scaffold needs.

use regex::Regex;
use tracing::debug;

use super::{MethodHandle, ScaffoldError, SourceScaffold};

/// One indentation level of generated code
const INDENT: &str = "  ";

#[derive(Debug, Clone)]
struct MethodBody {
    name: String,
    /// Byte offset in the scaffold where statements are spliced in
    insert_at: usize,
    /// Closing brace shares its line with other code, e.g. `SetupSecrets() {}`
    inline_close: bool,
    /// Indentation of the line holding the closing brace
    outer_indent: String,
    statements: Vec<String>,
}

impl MethodBody {
    fn insertion(&self) -> String {
        let indent = format!("{}{INDENT}", self.outer_indent);
        let mut out = String::new();

        if self.inline_close {
            out.push('\n');
        }
        for statement in &self.statements {
            for line in statement.trim_start_matches(['\r', '\n']).trim_end().lines() {
                if !line.trim().is_empty() {
                    out.push_str(&indent);
                    out.push_str(line);
                }
                out.push('\n');
            }
        }
        if self.inline_close {
            out.push_str(&self.outer_indent);
        }
        out
    }
}

/// Scaffold over plain source text
#[derive(Debug, Clone)]
pub struct MarkerScaffold {
    source: String,
    bodies: Vec<MethodBody>,
}

impl MarkerScaffold {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            bodies: Vec::new(),
        }
    }

    fn locate(&self, name: &str) -> Result<MethodBody, ScaffoldError> {
        let declaration = Regex::new(&format!(r"(?:^|[^.\w$]){}\s*\(", regex::escape(name)))
            .map_err(|_| ScaffoldError::MethodNotFound(name.to_string()))?;

        for found in declaration.find_iter(&self.source) {
            let open_paren = found.end() - 1;
            let Some(close_paren) = matching_delimiter(&self.source, open_paren, b'(', b')')
            else {
                continue;
            };
            let Some(open_brace) = body_start(&self.source, close_paren + 1) else {
                continue;
            };
            let close_brace = matching_delimiter(&self.source, open_brace, b'{', b'}')
                .ok_or_else(|| ScaffoldError::UnbalancedBody(name.to_string()))?;

            return Ok(self.body(name, open_brace, close_brace));
        }

        Err(ScaffoldError::MethodNotFound(name.to_string()))
    }

    fn body(&self, name: &str, open_brace: usize, close_brace: usize) -> MethodBody {
        let close_line = line_start(&self.source, close_brace);
        let before_close = &self.source[close_line..close_brace];

        if close_line > open_brace && before_close.trim().is_empty() {
            MethodBody {
                name: name.to_string(),
                insert_at: close_line,
                inline_close: false,
                outer_indent: before_close.to_string(),
                statements: Vec::new(),
            }
        } else {
            let decl_start = line_start(&self.source, open_brace);
            let decl_line = &self.source[decl_start..];
            let indent_len = decl_line.len() - decl_line.trim_start_matches([' ', '\t']).len();
            MethodBody {
                name: name.to_string(),
                insert_at: close_brace,
                inline_close: true,
                outer_indent: decl_line[..indent_len].to_string(),
                statements: Vec::new(),
            }
        }
    }
}

impl SourceScaffold for MarkerScaffold {
    fn method(&mut self, name: &str) -> Result<MethodHandle, ScaffoldError> {
        if let Some(existing) = self.bodies.iter().position(|body| body.name == name) {
            return Ok(MethodHandle(existing));
        }

        let body = self.locate(name)?;
        debug!(method = %name, offset = body.insert_at, "Located scaffold method");
        self.bodies.push(body);
        Ok(MethodHandle(self.bodies.len() - 1))
    }

    fn add_statements(&mut self, method: MethodHandle, statements: Vec<String>) {
        if let Some(body) = self.bodies.get_mut(method.0) {
            body.statements.extend(statements);
        }
    }

    fn to_source(&self) -> String {
        let mut bodies: Vec<&MethodBody> = self
            .bodies
            .iter()
            .filter(|body| !body.statements.is_empty())
            .collect();
        bodies.sort_by_key(|body| body.insert_at);

        let mut out = String::with_capacity(self.source.len());
        let mut cursor = 0;
        for body in bodies {
            out.push_str(&self.source[cursor..body.insert_at]);
            out.push_str(&body.insertion());
            cursor = body.insert_at;
        }
        out.push_str(&self.source[cursor..]);
        out
    }
}

fn line_start(source: &str, offset: usize) -> usize {
    source[..offset].rfind('\n').map_or(0, |pos| pos + 1)
}

/// Offset of the `{` opening a body that follows a parameter list
fn body_start(source: &str, from: usize) -> Option<usize> {
    let rest = &source[from..];
    let trimmed = rest.trim_start();
    let offset = from + (rest.len() - trimmed.len());

    match trimmed.as_bytes().first()? {
        b'{' => Some(offset),
        // return type annotation
        b':' => {
            let end = trimmed.find(['{', ';', '='])?;
            (trimmed.as_bytes()[end] == b'{').then_some(offset + end)
        }
        _ => None,
    }
}

/// Offset of the delimiter closing the one at `open`
fn matching_delimiter(source: &str, open: usize, opening: u8, closing: u8) -> Option<usize> {
    let bytes = source.as_bytes();
    let mut depth = 0usize;
    let mut i = open;

    while i < bytes.len() {
        match bytes[i] {
            b'\'' | b'"' | b'`' => i = skip_string(bytes, i),
            b'/' if bytes.get(i + 1) == Some(&b'/') => i = skip_until(bytes, i, b"\n"),
            b'/' if bytes.get(i + 1) == Some(&b'*') => i = skip_until(bytes, i + 2, b"*/"),
            b if b == opening => depth += 1,
            b if b == closing => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
        i += 1;
    }

    None
}

/// Offset of the quote closing the string literal starting at `start`
fn skip_string(bytes: &[u8], start: usize) -> usize {
    let quote = bytes[start];
    let mut i = start + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b if b == quote => return i,
            _ => i += 1,
        }
    }
    bytes.len()
}

/// Offset of the last byte of the next `terminator` at or after `from`
fn skip_until(bytes: &[u8], from: usize, terminator: &[u8]) -> usize {
    bytes
        .get(from..)
        .and_then(|rest| rest.windows(terminator.len()).position(|w| w == terminator))
        .map_or(bytes.len(), |pos| from + pos + terminator.len() - 1)
}
