use crate::commands::GenerateCmd;

/// Assembles the GraphQL schema fragments in `./schema` into `./schema.go`.
#[derive(clap::Parser, Debug)]
#[command(name = "graphql-sdl-gen", version)]
pub(crate) struct Cli {
    #[command(flatten)]
    pub(crate) generate: GenerateCmd,

    #[arg(
        help="Enable verbose output.",
        long,
        short='v',
    )]
    pub verbose: bool,
}
