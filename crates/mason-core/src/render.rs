//! Placeholder substitution for copied build descriptors.
//!
//! Templates carry `__NAME__`-style markers in their `CMakeLists.txt`; this
//! is the contract between mason and template authors. All variables are
//! fixed at construction, so [`RenderContext::render`] is a pure fold of
//! replacements.

use crate::options::ProjectOptions;

/// The placeholders a template may use.
///
/// | placeholder        | value                      |
/// |--------------------|----------------------------|
/// | `__NAME__`         | binary/library name        |
/// | `__DESCRIPTION__`  | project description        |
/// | `__VERSION__`      | project version            |
/// | `__PROJECT_NAME__` | project directory name     |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    variables: Vec<(&'static str, String)>,
}

impl RenderContext {
    /// Build the substitution set from resolved project options.
    pub fn from_options(options: &ProjectOptions) -> Self {
        Self {
            variables: vec![
                ("__NAME__", options.binary_name().to_owned()),
                ("__DESCRIPTION__", options.description().to_owned()),
                ("__VERSION__", options.version().to_owned()),
                ("__PROJECT_NAME__", options.project_name.clone()),
            ],
        }
    }

    /// Replace every occurrence of every placeholder in `input`.
    pub fn render(&self, input: &str) -> String {
        self.variables
            .iter()
            .fold(input.to_owned(), |text, (placeholder, value)| {
                text.replace(placeholder, value)
            })
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
