//! Line classification by prefix matching.
//!
//! No tokenizing happens here: every decision is made from the first
//! characters of the raw line and from its trimmed content.

use crate::config::{
    COMMENT_SIGIL, DECORATOR_SIGIL, DEFINITION_NAME_PATTERN, DEFINITION_START_PATTERN,
};

/// Kind of a raw input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// `@` at column 0.
    Decorator,

    /// `def` or `class` keyword token at column 0.
    Definition,

    /// Non-blank line starting with a space or tab.
    Continuation,

    /// Empty or whitespace-only line.
    Blank,

    /// Line whose trimmed content starts with `#`.
    Comment {
        /// Whether the comment starts with a space or tab.
        indented: bool,
    },

    /// Any other unindented line (module-level code, docstrings, ...).
    TopLevel,
}

impl LineKind {
    /// Whether a line of this kind closes an open definition body.
    #[must_use]
    pub fn ends_definition(self) -> bool {
        matches!(self, Self::Comment { indented: false } | Self::TopLevel)
    }
}

/// Classify a raw line (terminator included or not).
///
/// # Examples
/// ```
/// use code_split::classify::{classify, LineKind};
///
/// assert_eq!(classify("@dataclass\n"), LineKind::Decorator);
/// assert_eq!(classify("class MyData:\n"), LineKind::Definition);
/// assert_eq!(classify("    return 1\n"), LineKind::Continuation);
/// assert_eq!(classify("\n"), LineKind::Blank);
/// assert_eq!(classify("print('main')\n"), LineKind::TopLevel);
/// ```
#[must_use]
pub fn classify(line: &str) -> LineKind {
    if line.starts_with(DECORATOR_SIGIL) {
        return LineKind::Decorator;
    }
    if DEFINITION_START_PATTERN.is_match(line) {
        return LineKind::Definition;
    }

    let trimmed = line.trim();
    let indented = line.starts_with([' ', '\t']);
    if trimmed.is_empty() {
        LineKind::Blank
    } else if trimmed.starts_with(COMMENT_SIGIL) {
        LineKind::Comment { indented }
    } else if indented {
        LineKind::Continuation
    } else {
        LineKind::TopLevel
    }
}

/// Extract the identifier defined on a definition line.
///
/// Returns `None` when nothing word-like follows the keyword, e.g. `def (x):`.
///
/// # Examples
/// ```
/// use code_split::classify::definition_name;
///
/// assert_eq!(definition_name("def my_function(data) -> str:\n"), Some("my_function"));
/// assert_eq!(definition_name("class SampleClass:\n"), Some("SampleClass"));
/// assert_eq!(definition_name("def (x):\n"), None);
/// ```
#[must_use]
pub fn definition_name(line: &str) -> Option<&str> {
    DEFINITION_NAME_PATTERN
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decorator_wins_over_everything() {
        assert_eq!(classify("@dataclass\n"), LineKind::Decorator);
        assert_eq!(classify("@app.route('/')\r\n"), LineKind::Decorator);
        // Indented decorators belong to a method body
        assert_eq!(classify("    @property\n"), LineKind::Continuation);
    }

    #[test]
    fn test_definition_requires_keyword_token() {
        assert_eq!(classify("def f():\n"), LineKind::Definition);
        assert_eq!(classify("class A(Base):\n"), LineKind::Definition);
        assert_eq!(classify("class\tTabbed:\n"), LineKind::Definition);
        assert_eq!(classify("def (x):\n"), LineKind::Definition);
        assert_eq!(classify("define = 1\n"), LineKind::TopLevel);
        assert_eq!(classify("classes = []\n"), LineKind::TopLevel);
        assert_eq!(classify("class:\n"), LineKind::Definition);
        assert_eq!(classify("def(x):\n"), LineKind::Definition);
        assert_eq!(classify("def"), LineKind::Definition);
        assert_eq!(classify("class_registry = {}\n"), LineKind::TopLevel);
        assert_eq!(classify("    def method(self):\n"), LineKind::Continuation);
    }

    #[test]
    fn test_blank_lines() {
        assert_eq!(classify("\n"), LineKind::Blank);
        assert_eq!(classify("\r\n"), LineKind::Blank);
        assert_eq!(classify("    \t\n"), LineKind::Blank);
        assert_eq!(classify(""), LineKind::Blank);
    }

    #[test]
    fn test_comments() {
        assert_eq!(
            classify("# Interim comments\n"),
            LineKind::Comment { indented: false }
        );
        assert_eq!(
            classify("    # Sample comment\n"),
            LineKind::Comment { indented: true }
        );
        assert_eq!(
            classify("\t# tabbed\n"),
            LineKind::Comment { indented: true }
        );
    }

    #[test]
    fn test_ends_definition() {
        assert!(classify("# Main code starts here\n").ends_definition());
        assert!(classify("print(\"main\")\n").ends_definition());
        assert!(classify("\"\"\"Module docstring\"\"\"\n").ends_definition());
        assert!(!classify("    # inside\n").ends_definition());
        assert!(!classify("    return 1\n").ends_definition());
        assert!(!classify("\n").ends_definition());
        assert!(!classify("@decorator\n").ends_definition());
        assert!(!classify("def g():\n").ends_definition());
    }

    #[test]
    fn test_definition_name() {
        assert_eq!(definition_name("class MyData:\n"), Some("MyData"));
        assert_eq!(definition_name("def birthday(self):\n"), Some("birthday"));
        assert_eq!(definition_name("class Ünïcode:\n"), Some("Ünïcode"));
        assert_eq!(definition_name("def \n"), None);
        assert_eq!(definition_name("class :\n"), None);
        assert_eq!(definition_name("class:\n"), None);
        assert_eq!(definition_name("def(x):\n"), None);
        assert_eq!(definition_name("def"), None);
    }
}
