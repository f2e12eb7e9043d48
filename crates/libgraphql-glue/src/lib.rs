//! Glues a directory tree of GraphQL schema fragments into one schema.
//!
//! Each fragment may contribute schema definitions, fields for the `Query`,
//! `Mutation` and `Subscription` root types, and resolvers keyed by type and
//! field name. [`glue()`] finds every fragment file under a directory, folds
//! them together in path order and returns a single [`GluedSchema`] that a
//! GraphQL server can be built from.

pub mod config;
pub mod discovery;
pub mod file_reader;
mod fragment;
mod fragment_loader;
mod glue;
mod glue_error;
mod root_operation_type;
mod schema_glue;

pub use config::ResolvedSchemaPath;
pub use config::SchemaPathSource;
pub use fragment::Fragment;
pub use fragment::ResolverMap;
pub use fragment_loader::FileFragmentLoader;
pub use fragment_loader::FragmentLoadError;
pub use fragment_loader::FragmentLoader;
pub use fragment_loader::SDL_FILE_EXTENSIONS;
pub use glue::glue;
pub use glue::glue_with;
pub use glue::GlueOptions;
pub use glue_error::GlueError;
pub use root_operation_type::RootOperationType;
pub use schema_glue::GluedSchema;
pub use schema_glue::SchemaGlue;

#[cfg(test)]
mod tests;
