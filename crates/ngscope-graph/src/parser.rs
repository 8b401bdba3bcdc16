//! Parser façade over OXC.
//!
//! Turns raw TypeScript source text into an arena-allocated AST. The
//! classifier only ever sees a [`ParsedProgram`]; a source with syntax
//! errors never produces one.

use oxc_allocator::Allocator;
use oxc_parser::Parser;
use oxc_span::SourceType;

/// Parse options for reading source code
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Source type (TypeScript, TSX, module or script)
    pub source_type: SourceType,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self::typescript()
    }
}

impl ParseOptions {
    /// Create parse options from file path (auto-detects source type)
    pub fn from_path(path: &str) -> Self {
        Self {
            source_type: SourceType::from_path(path).unwrap_or(SourceType::ts()),
        }
    }

    /// Create parse options for TypeScript
    pub fn typescript() -> Self {
        Self {
            source_type: SourceType::ts(),
        }
    }
}

/// The source could not be turned into a syntax tree.
#[derive(Debug, Clone, thiserror::Error)]
#[error("Parse errors: {}", messages.join(", "))]
pub struct ParseError {
    /// Every message reported by the parser
    pub messages: Vec<String>,
}

/// A syntax tree built without errors.
pub struct ParsedProgram<'a> {
    program: oxc_ast::ast::Program<'a>,
}

impl<'a> ParsedProgram<'a> {
    pub fn ast(&self) -> &oxc_ast::ast::Program<'a> {
        &self.program
    }
}

/// Parse source code into an AST
///
/// # Arguments
///
/// * `allocator` - Allocator for AST nodes (must outlive the returned program)
/// * `source` - Source code to parse
/// * `options` - Parse options
pub fn parse<'a>(
    allocator: &'a Allocator,
    source: &'a str,
    options: ParseOptions,
) -> Result<ParsedProgram<'a>, ParseError> {
    let result = Parser::new(allocator, source, options.source_type).parse();

    let mut messages: Vec<String> = result.errors.iter().map(|err| err.to_string()).collect();
    if result.panicked && messages.is_empty() {
        messages.push("parser aborted on unrecoverable syntax".to_string());
    }

    if !messages.is_empty() {
        return Err(ParseError { messages });
    }

    Ok(ParsedProgram {
        program: result.program,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_decorated_class() {
        let allocator = Allocator::default();
        let source = "@Component({ selector: 'app-root' })\nexport class AppComponent {}";
        let parsed = parse(&allocator, source, ParseOptions::typescript()).unwrap();

        assert_eq!(parsed.ast().body.len(), 1);
    }

    #[test]
    fn test_parse_error_is_reported() {
        let allocator = Allocator::default();
        let err = parse(&allocator, "export class {", ParseOptions::typescript())
            .err()
            .expect("malformed source must fail");

        assert!(!err.messages.is_empty());
        assert!(err.to_string().starts_with("Parse errors"));
    }

    #[test]
    fn test_recoverable_errors_still_fail() {
        let allocator = Allocator::default();
        assert!(parse(&allocator, "const = ;", ParseOptions::typescript()).is_err());
    }

    #[test]
    fn test_options_from_path() {
        assert!(ParseOptions::from_path("app.component.ts").source_type.is_typescript());
        assert!(ParseOptions::from_path("view.tsx").source_type.is_jsx());
        assert!(ParseOptions::from_path("no-extension").source_type.is_typescript());
    }
}
