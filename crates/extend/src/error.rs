use std::{
    error::Error,
    fmt::{self, Display},
};

use codemap::{Span, SpanLoc};

use crate::extend::NodeKind;

pub type SassResult<T> = Result<T, Box<SassError>>;

/// `SassError`s can be either a structured error specific to `grass_extend` or
/// an internal error that indicates a broken invariant.
#[derive(Debug, Clone)]
pub struct SassError {
    kind: SassErrorKind,
}

impl SassError {
    pub(crate) fn raw(self) -> (String, Span) {
        match self.kind {
            SassErrorKind::Raw(string, span) => (string, span),
            e => unreachable!("unable to get raw of {:?}", e),
        }
    }

    pub(crate) fn from_loc(message: String, loc: SpanLoc, unicode: bool) -> Self {
        SassError {
            kind: SassErrorKind::ParseError {
                message,
                loc,
                unicode,
            },
        }
    }

    pub(crate) fn is_raw(&self) -> bool {
        matches!(self.kind, SassErrorKind::Raw(..))
    }

    /// Whether this error reports a broken invariant rather than invalid
    /// user input.
    pub fn is_internal(&self) -> bool {
        matches!(self.kind, SassErrorKind::Internal(..))
    }

    /// The invariant that was broken, if this is an internal error
    pub fn as_internal(&self) -> Option<&InternalError> {
        match &self.kind {
            SassErrorKind::Internal(e) => Some(e),
            _ => None,
        }
    }

    pub fn kind(self) -> PublicSassErrorKind {
        match self.kind {
            SassErrorKind::ParseError {
                message,
                loc,
                unicode,
            } => PublicSassErrorKind::ParseError {
                message,
                loc,
                unicode,
            },
            SassErrorKind::Internal(e) => PublicSassErrorKind::Internal(e),
            SassErrorKind::Raw(..) => unreachable!("raw errors should not be accessible by users"),
        }
    }
}

#[derive(Debug, Clone)]
pub enum PublicSassErrorKind {
    ParseError {
        /// The message attached to this error
        ///
        /// Example: "Expected identifier."
        message: String,

        /// The location in the source that triggered this error
        loc: SpanLoc,

        /// Whether or not the user allows unicode characters to be emitted in
        /// error messages.
        ///
        /// This is configurable with [`crate::Options::unicode_error_messages`]
        unicode: bool,
    },

    /// An operation was handed a node or chain it cannot accept.
    ///
    /// Such trees are never produced from parsed selectors, so this always
    /// indicates a bug in the caller.
    Internal(InternalError),
}

#[derive(Debug, Clone)]
enum SassErrorKind {
    /// A raw error with no additional metadata
    /// It contains only a `String` message and
    /// a span
    Raw(String, Span),
    ParseError {
        message: String,
        loc: SpanLoc,
        unicode: bool,
    },
    Internal(InternalError),
}

/// The ways a node or selector chain can fail to satisfy an operation's
/// requirements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InternalError {
    /// A non-collection operand was passed to a collection operation
    PreconditionViolation {
        operation: &'static str,
        found: NodeKind,
    },

    /// A tree that does not describe a flat, alternating selector chain
    MalformedChain(String),

    /// An absent selector was passed where one is required
    NullInput,
}

impl Display for InternalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PreconditionViolation { operation, found } => write!(
                f,
                "`{}` requires collection operands, found {}.",
                operation, found
            ),
            Self::MalformedChain(reason) => write!(f, "malformed selector chain: {}.", reason),
            Self::NullInput => f.write_str("expected a compound selector, found nothing."),
        }
    }
}

impl Display for SassError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (message, loc, unicode) = match &self.kind {
            SassErrorKind::ParseError {
                message,
                loc,
                unicode,
            } => (message, loc, *unicode),
            SassErrorKind::Internal(e) => return write!(f, "Internal error: {}", e),
            SassErrorKind::Raw(..) => unreachable!("raw errors should not be displayed"),
        };

        let first_bar = if unicode { '╷' } else { ',' };
        let middle_bar = if unicode { '│' } else { '|' };
        let last_bar = if unicode { '╵' } else { '\'' };

        let line = loc.begin.line + 1;
        let col = loc.begin.column + 1;
        writeln!(f, "Error: {}", message)?;
        let padding = " ".repeat(line.to_string().len() + 1);
        writeln!(f, "{}{}", padding, first_bar)?;
        writeln!(
            f,
            "{} {} {}",
            line,
            middle_bar,
            loc.file.source_line(loc.begin.line)
        )?;
        writeln!(
            f,
            "{}{} {}{}",
            padding,
            middle_bar,
            " ".repeat(loc.begin.column),
            "^".repeat(loc.end.column.saturating_sub(loc.begin.column).max(1))
        )?;
        writeln!(f, "{}{}", padding, last_bar)?;
        writeln!(f, "  {} {}:{}  root stylesheet", loc.file.name(), line, col)?;
        Ok(())
    }
}

impl From<InternalError> for Box<SassError> {
    #[inline]
    fn from(error: InternalError) -> Box<SassError> {
        Box::new(SassError {
            kind: SassErrorKind::Internal(error),
        })
    }
}

impl From<(&str, Span)> for Box<SassError> {
    #[inline]
    fn from(error: (&str, Span)) -> Box<SassError> {
        Box::new(SassError {
            kind: SassErrorKind::Raw(error.0.to_owned(), error.1),
        })
    }
}

impl From<(String, Span)> for Box<SassError> {
    #[inline]
    fn from(error: (String, Span)) -> Box<SassError> {
        Box::new(SassError {
            kind: SassErrorKind::Raw(error.0, error.1),
        })
    }
}

impl Error for SassError {
    #[inline]
    fn description(&self) -> &'static str {
        "Sass selector error"
    }
}
