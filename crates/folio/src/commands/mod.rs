//! CLI command implementations.

pub(crate) mod posts;
pub(crate) mod render;
pub(crate) mod sections;

pub(crate) use posts::{PostArgs, list_posts};
pub(crate) use render::RenderArgs;
pub(crate) use sections::SectionsArgs;
