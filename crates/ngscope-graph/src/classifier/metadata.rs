//! Component annotation argument extraction.

use oxc_ast::ast::{Argument, Decorator, Expression, ObjectExpression, ObjectPropertyKind};
use oxc_span::GetSpan;

/// Why an annotation argument could not be read as an object literal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MetadataError {
    #[error("annotation is not called with arguments")]
    NotACall,
    #[error("annotation call has no arguments")]
    NoArguments,
    #[error("first argument is not an object literal")]
    NotAnObject,
}

/// Fields read from a `@Component({...})` argument object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComponentMetadata {
    pub selector: String,
    pub template: String,
}

impl ComponentMetadata {
    pub fn from_decorator(
        decorator: &Decorator<'_>,
        source_text: &str,
    ) -> Result<Self, MetadataError> {
        let object = annotation_object(&decorator.expression)?;
        let mut metadata = Self::default();

        for property in &object.properties {
            let ObjectPropertyKind::ObjectProperty(property) = property else {
                continue;
            };
            let Some(key) = property.key.static_name() else {
                continue;
            };
            match &*key {
                "selector" => metadata.selector = initializer_text(&property.value, source_text),
                "template" => metadata.template = initializer_text(&property.value, source_text),
                _ => {}
            }
        }

        Ok(metadata)
    }
}

fn annotation_object<'b, 'a>(
    expression: &'b Expression<'a>,
) -> Result<&'b ObjectExpression<'a>, MetadataError> {
    let Expression::CallExpression(call) = expression else {
        return Err(MetadataError::NotACall);
    };
    match call.arguments.first() {
        Some(Argument::ObjectExpression(object)) => Ok(object),
        Some(_) => Err(MetadataError::NotAnObject),
        None => Err(MetadataError::NoArguments),
    }
}

/// Raw initializer text with quoting characters removed.
fn initializer_text(value: &Expression<'_>, source_text: &str) -> String {
    strip_quotes(value.span().source_text(source_text))
}

/// Remove every single, double and backtick quote character.
pub fn strip_quotes(text: &str) -> String {
    text.chars()
        .filter(|c| !matches!(c, '\'' | '"' | '`'))
        .collect()
}
