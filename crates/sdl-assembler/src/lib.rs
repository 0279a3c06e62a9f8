//! Assembles one GraphQL SDL document out of independently-authored schema
//! fragments and emits it as a string constant in a generated Go source file.
//!
//! Each fragment contributes up to three pieces of SDL text: root `Query`
//! fields, root `Mutation` fields, and standalone type/input declarations.
//! Fragment text is treated as opaque; nothing here parses or validates
//! GraphQL.
//!
//! ```
//! use sdl_assembler::assembly::Assembler;
//! use sdl_assembler::assembly::GoSchemaTarget;
//! use sdl_assembler::fragment::FragmentId;
//! use sdl_assembler::fragment::FragmentRegistry;
//! use sdl_assembler::fragment::FragmentSet;
//! use sdl_assembler::fragment::StaticFragment;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = FragmentRegistry::new()
//!     .with_fragment(
//!         FragmentId::new("post"),
//!         StaticFragment::new()
//!             .with_queries("post(id: String!): Post!")
//!             .with_types("type Post { id: String! }"),
//!     )?;
//!
//! let ids = registry.ids().cloned().collect::<Vec<_>>();
//! let fragment_set = FragmentSet::aggregate(&ids, &registry)?;
//! let schema = Assembler::new(GoSchemaTarget::default()).assemble(&fragment_set);
//!
//! assert!(schema.source().starts_with("package resolver\n"));
//! assert!(schema.sdl().contains("post(id: String!): Post!"));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod assembly;
pub mod file_reader;
pub mod fragment;
pub mod generator;

#[cfg(test)]
pub(crate) mod test;

pub use generator::GenerateError;
pub use generator::Generator;
pub use generator::GeneratorConfig;
