//! Error types for ramus operations.

use thiserror::Error;

/// Errors that can occur while building or checking a tree.
///
/// Every variant is raised synchronously from a constructor, an extension
/// method, or an explicit [`check`](crate::Node::check) audit. Rendering
/// never fails.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("empty tag name")]
    EmptyTag,

    #[error("void tag <{0}> cannot have children")]
    VoidTagChildren(String),

    #[error("NaN is not a valid value for {0}")]
    NanValue(String),

    #[error("whitespace in attribute name: {0:?}")]
    WhitespaceInName(String),

    #[error("boolean attribute {0} requires a bool value")]
    NonBooleanValue(String),

    #[error("null or empty value for CSS property {0}")]
    EmptyCssValue(String),

    #[error("children of a style node must be style nodes, got {0}")]
    NonStyleChild(String),

    #[error("scoped style rules must be style nodes, got {0}")]
    NonStyleRule(String),

    #[error("no class override for style nodes")]
    ClassOnStyleNode,

    #[error("expected a markup node, got a style node <{0}>")]
    ContextMismatch(String),

    #[error("unknown tag: {0}")]
    UnknownTag(String),

    #[error("unknown attribute {attr} on <{tag}>")]
    UnknownAttr { tag: String, attr: String },
}

pub type Result<T> = std::result::Result<T, Error>;
