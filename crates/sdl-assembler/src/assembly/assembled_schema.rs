/// A fully assembled schema: the SDL document and the Go source file that
/// embeds it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AssembledSchema {
    pub(super) sdl: String,
    pub(super) source: String,
}

impl AssembledSchema {
    /// The SDL document, unescaped.
    ///
    /// The generated constant's value is this text preceded by `"\n\n"` and
    /// followed by `"\n"`, the blank lines separating it from the literal's
    /// delimiters.
    pub fn sdl(&self) -> &str {
        self.sdl.as_str()
    }

    /// The complete generated source file.
    pub fn source(&self) -> &str {
        self.source.as_str()
    }

    pub fn into_source(self) -> String {
        self.source
    }
}
