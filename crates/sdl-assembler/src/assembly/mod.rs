mod assembled_schema;
mod assembler;
mod go_schema_target;
mod schema_writer;

pub use assembled_schema::AssembledSchema;
pub use assembler::Assembler;
pub use go_schema_target::DEFAULT_CONST_NAME;
pub use go_schema_target::DEFAULT_DOC_COMMENT;
pub use go_schema_target::DEFAULT_PACKAGE_NAME;
pub use go_schema_target::GoSchemaTarget;
pub use schema_writer::write_schema;
pub use schema_writer::WriteError;
