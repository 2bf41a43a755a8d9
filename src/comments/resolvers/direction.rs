//! Parameter direction annotations
//!
//! Grammar, matched case-insensitively:
//!
//!     annotation := '[' direction (',' direction)? ']'
//!     direction  := 'in' | 'out'
//!
//! Seeing both `in` and `out` gives `InOut`. An annotation that only matches once blanks are
//! removed (`[in, out]`) still resolves, but is flagged. Anything else resolves to `In` and is
//! flagged as invalid. A present annotation always makes the direction explicit.

use crate::comments::ast::ParamDirection;
use crate::comments::diagnostics::DiagnosticKind;
use chumsky::prelude::*;

/// Outcome of resolving a direction annotation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectionResolution {
    pub direction: ParamDirection,
    pub explicit: bool,
    /// Set when the annotation was accepted with a warning or rejected
    pub issue: Option<DiagnosticKind>,
}

impl DirectionResolution {
    /// No annotation written
    pub fn implicit() -> Self {
        DirectionResolution {
            direction: ParamDirection::In,
            explicit: false,
            issue: None,
        }
    }
}

fn annotation_parser() -> impl Parser<char, ParamDirection, Error = Simple<char>> {
    let direction = text::keyword("in")
        .to(ParamDirection::In)
        .or(text::keyword("out").to(ParamDirection::Out));

    direction
        .separated_by(just(','))
        .at_least(1)
        .at_most(2)
        .delimited_by(just('['), just(']'))
        .then_ignore(end())
        .map(|directions| {
            let input = directions.contains(&ParamDirection::In);
            let output = directions.contains(&ParamDirection::Out);
            match (input, output) {
                (true, true) => ParamDirection::InOut,
                (false, true) => ParamDirection::Out,
                _ => ParamDirection::In,
            }
        })
}

/// Resolve the text of a bracketed annotation, brackets included
pub fn resolve_direction(annotation: &str) -> DirectionResolution {
    let lowered = annotation.to_lowercase();
    let parser = annotation_parser();

    if let Ok(direction) = parser.parse(lowered.as_str()) {
        return DirectionResolution {
            direction,
            explicit: true,
            issue: None,
        };
    }

    let compact: String = lowered.chars().filter(|c| !c.is_whitespace()).collect();
    match parser.parse(compact.as_str()) {
        Ok(direction) => DirectionResolution {
            direction,
            explicit: true,
            issue: Some(DiagnosticKind::ParamDirectionSpaces),
        },
        Err(_) => DirectionResolution {
            direction: ParamDirection::In,
            explicit: true,
            issue: Some(DiagnosticKind::InvalidParamDirection),
        },
    }
}
