//! Recursive shape rendering.
//!
//! [`ShapeRenderer`] walks the shape graph of a [`ServiceDefinition`] and turns
//! a shape into text in one of two modes:
//!
//! - **Top level** (empty indent): an input structure becomes a documentation
//!   block, one `## \`Name = ...\`` entry per member.
//! - **Nested** (non-empty indent): a shape becomes a literal expression
//!   (`["Key" => <required> ::String, ...]`, `[<element>, ...]`, `::Int` ...)
//!   used both inline and in fenced blocks.
//!
//! Shapes reference each other by name, so the graph may be cyclic. The
//! renderer threads the chain of shapes currently being expanded through every
//! recursive call; meeting a shape already on that chain stops the descent and
//! substitutes the shape's kind tag. The same shape may still be expanded
//! several times in sibling branches.

use sdkgen_define::{ServiceDefinition, Shape, StructureShape};
use tracing::warn;

use crate::docs::{DocFormatter, format_optional};
use crate::errors::GeneratorError;
use crate::naming::{effective_member_name, join_with_or};

/// One level of nesting.
pub const INDENT: &str = "    ";

/// Marker placed before required members of nested structures.
pub const REQUIRED_MARKER: &str = "<required>";

/// Separator between the first and last line of a brief.
pub const BRIEF_ELLIPSIS: &str = " ... ";

/// Type annotation for map shapes.
pub const MAP_ANNOTATION: &str = "::Dict{String,String}";
/// Type annotation for plain strings.
pub const STRING_ANNOTATION: &str = "::String";
/// Type annotation for integer and long shapes.
pub const INT_ANNOTATION: &str = "::Int";
/// Type annotation for booleans.
pub const BOOL_ANNOTATION: &str = "::Bool";

/// Renders shapes of one service.
pub struct ShapeRenderer<'a> {
    service: &'a ServiceDefinition,
    docs: &'a dyn DocFormatter,
}

impl<'a> ShapeRenderer<'a> {
    pub fn new(service: &'a ServiceDefinition, docs: &'a dyn DocFormatter) -> Self {
        Self { service, docs }
    }

    /// Renders `shape_name`.
    ///
    /// `indent` selects the mode: empty for the top-level documentation block,
    /// non-empty for a nested literal whose entries sit at `indent`. `stack`
    /// holds the shapes currently being expanded and is restored before
    /// returning.
    ///
    /// ## Errors
    ///
    /// - [`GeneratorError::RenderAssertion`] if `indent` is empty and the shape
    ///   is not a structure.
    /// - [`GeneratorError::Definition`] if a referenced shape does not exist.
    pub fn render(
        &self,
        shape_name: &'a str,
        indent: &str,
        stack: &mut Vec<&'a str>,
    ) -> Result<String, GeneratorError> {
        let shape = self.service.shape(shape_name)?;

        if stack.contains(&shape_name) {
            warn!(
                shape = shape_name,
                stack = %stack.join(" -> "),
                "recursive shape reference, rendering kind tag instead"
            );
            return Ok(shape.kind().to_string());
        }

        if indent.is_empty() && shape.as_structure().is_none() {
            return Err(GeneratorError::RenderAssertion {
                shape: shape_name.to_string(),
                kind: shape.kind().to_string(),
            });
        }

        stack.push(shape_name);
        let rendered = self.render_shape(shape, indent, stack);
        stack.pop();
        rendered
    }

    /// Renders the argument documentation block for an input structure.
    pub fn render_top_level(&self, shape_name: &'a str) -> Result<String, GeneratorError> {
        self.render(shape_name, "", &mut Vec::new())
    }

    fn render_shape(
        &self,
        shape: &'a Shape,
        indent: &str,
        stack: &mut Vec<&'a str>,
    ) -> Result<String, GeneratorError> {
        let text = match shape {
            Shape::Structure(s) if indent.is_empty() => self.render_arguments(s, stack)?,
            Shape::Structure(s) => self.render_nested_structure(s, indent, stack)?,
            Shape::List { member } => {
                format!("[{}, ...]", self.render(&member.shape, indent, stack)?)
            }
            Shape::Map => MAP_ANNOTATION.to_string(),
            Shape::String { enum_values } if !enum_values.is_empty() => {
                let quoted: Vec<String> = enum_values.iter().map(|v| format!("\"{v}\"")).collect();
                join_with_or(&quoted)
            }
            Shape::String { .. } => STRING_ANNOTATION.to_string(),
            Shape::Integer | Shape::Long => INT_ANNOTATION.to_string(),
            Shape::Boolean => BOOL_ANNOTATION.to_string(),
            Shape::Other(kind) => kind.clone(),
        };
        Ok(text)
    }

    /// Top-level structure: one documentation entry per member.
    fn render_arguments(
        &self,
        shape: &'a StructureShape,
        stack: &mut Vec<&'a str>,
    ) -> Result<String, GeneratorError> {
        let mut entries = Vec::with_capacity(shape.members.len());

        for (name, member) in &shape.members {
            let display = effective_member_name(self.service, name, member);
            let fragment = self.render(&member.shape, INDENT, stack)?;
            let multi_line = fragment.contains('\n');

            let mut entry = if multi_line {
                format!("## `{} = {}`", display, brief(&fragment))
            } else {
                format!("## `{} = {}`", display, fragment)
            };
            if shape.is_required(name) {
                entry.push_str(" -- *Required*");
            }
            if let Some(doc) = format_optional(self.docs, member.documentation.as_deref()) {
                entry.push('\n');
                entry.push_str(&doc);
            }
            if multi_line {
                entry.push_str(&format!("\n```\n {} = {}\n```", display, fragment));
            }
            entries.push(entry);
        }

        Ok(entries.join("\n\n"))
    }

    /// Nested structure: a literal associative expression.
    fn render_nested_structure(
        &self,
        shape: &'a StructureShape,
        indent: &str,
        stack: &mut Vec<&'a str>,
    ) -> Result<String, GeneratorError> {
        let inner = format!("{indent}{INDENT}");
        let mut entries = Vec::with_capacity(shape.members.len());

        for (name, member) in &shape.members {
            let display = effective_member_name(self.service, name, member);
            let value = self.render(&member.shape, &inner, stack)?;
            let marker = if shape.is_required(name) {
                format!("{REQUIRED_MARKER} ")
            } else {
                String::new()
            };
            entries.push(format!("\"{display}\" => {marker}{value}"));
        }

        match entries.as_slice() {
            [] => return Ok("[]".to_string()),
            [only] => return Ok(format!("[{only}]")),
            _ => {}
        }

        let closing = indent.strip_suffix(INDENT).unwrap_or("");
        Ok(format!(
            "[\n{indent}{}\n{closing}]",
            entries.join(&format!(",\n{indent}"))
        ))
    }
}

/// One-line summary of a multi-line fragment: its first and last non-blank
/// lines joined by an ellipsis.
///
/// ```
/// use sdkgen_gen::render::brief;
///
/// assert_eq!(brief("[[\n    \"A\" => ::Int,\n    \"B\" => ::Int\n], ...]"), "[[ ... ], ...]");
/// assert_eq!(brief("::Int"), "::Int");
/// ```
pub fn brief(fragment: &str) -> String {
    let mut lines = fragment.lines().map(str::trim).filter(|l| !l.is_empty());
    match (lines.next(), lines.next_back()) {
        (Some(first), Some(last)) => format!("{first}{BRIEF_ELLIPSIS}{last}"),
        (Some(only), None) => only.to_string(),
        _ => String::new(),
    }
}
