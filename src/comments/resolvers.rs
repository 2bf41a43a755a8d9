//! Resolvers
//!
//! Small pure helpers the parser calls once it has isolated a piece of syntax: the bracketed
//! direction annotation of a parameter command, and the attribute run of an HTML start tag.
//! They have no state and report problems through their return values, leaving it to the
//! parser to forward them to a diagnostic sink.

pub mod attributes;
pub mod direction;

pub use attributes::{resolve_attributes, AttributeResolution};
pub use direction::{resolve_direction, DirectionResolution};
