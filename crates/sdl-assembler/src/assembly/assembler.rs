use crate::assembly::AssembledSchema;
use crate::assembly::GoSchemaTarget;
use crate::fragment::FragmentSet;

const SCHEMA_ROOT: &str = "\
schema {
    query: Query
    mutation: Mutation
}

type Query {";

const BEFORE_MUTATIONS: &str = "\
}

type Mutation {";

const BEFORE_TYPES: &str = "}\n";

/// Composes a [`FragmentSet`] into one SDL document under a fixed skeleton:
///
/// ```graphql
/// schema {
///     query: Query
///     mutation: Mutation
/// }
///
/// type Query {
/// <every query segment>
/// }
///
/// type Mutation {
/// <every mutation segment>
/// }
///
/// <every type segment>
/// ```
///
/// Pieces are joined with newlines and segments are copied verbatim apart
/// from line endings, which are normalized to `\n`. No GraphQL syntax is
/// checked; malformed SDL passes straight through.
#[derive(Clone, Debug, Default)]
pub struct Assembler {
    target: GoSchemaTarget,
}

impl Assembler {
    pub fn new(target: GoSchemaTarget) -> Self {
        Self { target }
    }

    pub fn target(&self) -> &GoSchemaTarget {
        &self.target
    }

    pub fn assemble(&self, fragment_set: &FragmentSet) -> AssembledSchema {
        let sdl = Self::render_sdl(fragment_set);

        let mut source = self.target.preamble();
        source.push_str("\n\n");
        source.push_str(&self.target.escape_raw(&sdl));
        source.push('\n');
        source.push_str(self.target.closing_delimiter());

        log::debug!(
            "Assembled {} fragments into a {} byte SDL document.",
            fragment_set.len(),
            sdl.len(),
        );

        AssembledSchema { sdl, source }
    }

    fn render_sdl(fragment_set: &FragmentSet) -> String {
        let pieces = std::iter::once(SCHEMA_ROOT)
            .chain(fragment_set.query_segments().iter().map(String::as_str))
            .chain(std::iter::once(BEFORE_MUTATIONS))
            .chain(fragment_set.mutation_segments().iter().map(String::as_str))
            .chain(std::iter::once(BEFORE_TYPES))
            .chain(fragment_set.type_segments().iter().map(String::as_str));

        let sdl = pieces.collect::<Vec<_>>().join("\n");
        normalize_line_endings(sdl)
    }
}

// Go raw string literals discard `\r`, so CRLF and lone CR line endings are
// rewritten to `\n` to keep the constant's value identical to the SDL.
fn normalize_line_endings(sdl: String) -> String {
    if sdl.contains('\r') {
        sdl.replace("\r\n", "\n").replace('\r', "\n")
    } else {
        sdl
    }
}
