use std::borrow::Cow;

pub const DEFAULT_PACKAGE_NAME: &str = "resolver";
pub const DEFAULT_CONST_NAME: &str = "Schema";
pub const DEFAULT_DOC_COMMENT: &str = "Schema for api";

/// Describes the Go source file the assembled SDL is emitted into.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GoSchemaTarget {
    pub package_name: String,
    pub const_name: String,
    pub doc_comment: Option<String>,
}

impl GoSchemaTarget {
    pub fn new(package_name: impl Into<String>, const_name: impl Into<String>) -> Self {
        Self {
            package_name: package_name.into(),
            const_name: const_name.into(),
            doc_comment: None,
        }
    }

    pub fn with_doc_comment(mut self, doc_comment: impl Into<String>) -> Self {
        self.doc_comment = Some(doc_comment.into());
        self
    }

    /// Everything up to and including the opening backtick of the constant.
    pub(crate) fn preamble(&self) -> String {
        let mut preamble = format!("package {}\n\n", self.package_name);
        if let Some(doc_comment) = &self.doc_comment {
            for line in doc_comment.lines() {
                if line.is_empty() {
                    preamble.push_str("//\n");
                } else {
                    preamble.push_str(&format!("// {line}\n"));
                }
            }
        }
        preamble.push_str(&format!("const {} = `", self.const_name));
        preamble
    }

    pub(crate) fn closing_delimiter(&self) -> &'static str {
        "`\n"
    }

    /// Makes `text` safe to place inside a Go raw string literal.
    ///
    /// Raw literals cannot contain a backtick, so each one is emitted by
    /// closing the literal, concatenating an interpreted `"`"` string, and
    /// reopening the literal. The constant's value is unchanged.
    pub(crate) fn escape_raw<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if text.contains('`') {
            Cow::Owned(text.replace('`', "` + \"`\" + `"))
        } else {
            Cow::Borrowed(text)
        }
    }
}

impl std::default::Default for GoSchemaTarget {
    fn default() -> Self {
        Self::new(DEFAULT_PACKAGE_NAME, DEFAULT_CONST_NAME)
            .with_doc_comment(DEFAULT_DOC_COMMENT)
    }
}
