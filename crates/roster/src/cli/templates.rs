//! # CLI Templates
//!
//! Terminal output is rendered from minijinja templates kept in stand-alone files
//! under `templates/`, so they can be edited and diffed apart from the code. They are
//! embedded at compile time as string constants.
//!
//! Conventions:
//!
//! 1. Whitespace: the environment runs with `trim_blocks` and `lstrip_blocks`, so a
//!    line holding only a block tag produces no output. Every printed line is a line
//!    of the template.
//! 2. Layout stays in Rust: widths, padding and number formatting are computed before
//!    rendering. Templates only choose what is shown and which style it gets.
//! 3. Composition: shared pieces (the message list) are separate templates pulled in
//!    with `include`.

pub const VIEW_TEMPLATE: &str = include_str!("templates/view.jinja");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.jinja");
pub const SUMMARY_TEMPLATE: &str = include_str!("templates/summary.jinja");

/// Name and source of every template, for registration.
pub const TEMPLATES: [(&str, &str); 3] = [
    ("view.jinja", VIEW_TEMPLATE),
    ("messages.jinja", MESSAGES_TEMPLATE),
    ("summary.jinja", SUMMARY_TEMPLATE),
];
