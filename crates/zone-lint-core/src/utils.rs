//! Utility functions for rule and plug-in implementations.

pub mod lines;
pub mod naming;

#[doc(inline)]
pub use lines::{line_span, matching_lines, CommentTracker};
#[doc(inline)]
pub use naming::{
    base_name, has_extension, in_directory, is_camel_case, is_kebab_case, is_pascal_case,
    is_screaming_snake_case,
};
