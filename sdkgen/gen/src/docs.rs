//! Formatting seam for free-text documentation fields.
//!
//! Service, operation and member documentation arrives as markup in whatever
//! dialect the description uses. Converting it to the target documentation
//! format is not the generator's job: callers inject a [`DocFormatter`], and
//! every documentation string passes through it before being embedded.

/// Converts raw documentation markup into the target documentation format.
///
/// Any `Fn(&str) -> String` is a formatter:
///
/// ```
/// use sdkgen_gen::docs::DocFormatter;
///
/// let upper = |markup: &str| markup.to_uppercase();
/// assert_eq!(upper.format("hello"), "HELLO");
/// ```
pub trait DocFormatter {
    fn format(&self, markup: &str) -> String;
}

/// Embeds documentation markup unchanged.
#[derive(Debug, Default, Clone, Copy)]
pub struct PassThrough;

impl DocFormatter for PassThrough {
    fn format(&self, markup: &str) -> String {
        markup.to_string()
    }
}

impl<F> DocFormatter for F
where
    F: Fn(&str) -> String,
{
    fn format(&self, markup: &str) -> String {
        self(markup)
    }
}

/// Formats optional markup, trimming surrounding whitespace; `None` and blank
/// input produce `None`.
pub(crate) fn format_optional(docs: &dyn DocFormatter, markup: Option<&str>) -> Option<String> {
    markup
        .map(|m| docs.format(m).trim().to_string())
        .filter(|s| !s.is_empty())
}
