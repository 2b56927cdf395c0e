//! Use cases - application business logic

mod resolve_templates;

pub use resolve_templates::{
    ResolveTemplates, ResolveTemplatesError, ResolveTemplatesInput, ResolveTemplatesOutput,
    Template,
};
