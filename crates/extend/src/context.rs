use std::{cell::Cell, fmt};

use codemap::{CodeMap, Span, SpanLoc};

use crate::{
    error::{SassError, SassResult},
    lexer::Lexer,
    selector::{CompoundSelector, SelectorChain, SelectorParser},
    Options,
};

/// The allocation context of a single selector pass
///
/// Every compound selector copied into a node, or out of one, is allocated
/// through the context. The context also owns the source of every selector
/// it parsed, so that errors and log messages can point back into it.
///
/// A context only grows during a pass and is never shared across threads.
pub struct Context<'a> {
    options: &'a Options<'a>,
    map: CodeMap,
    allocations: Cell<usize>,
}

impl fmt::Debug for Context<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("options", &self.options)
            .field("allocations", &self.allocations.get())
            .finish_non_exhaustive()
    }
}

impl<'a> Context<'a> {
    pub fn new(options: &'a Options<'a>) -> Self {
        Self {
            options,
            map: CodeMap::new(),
            allocations: Cell::new(0),
        }
    }

    /// Parses a single complex selector, such as `a > .b ~ .c`
    ///
    /// Selector lists and parent selectors (`&`) are not accepted.
    pub fn parse_chain(&mut self, selector: &str) -> SassResult<SelectorChain> {
        let file = self.map.add_file("stdin".to_owned(), selector.to_owned());
        let lexer = Lexer::new_from_file(&file);

        SelectorParser::new(lexer, file.span)
            .parse()
            .map_err(|e| self.resolve(e))
    }

    /// Copies `compound` into a new allocation owned by the caller
    pub(crate) fn allocate(&self, compound: &CompoundSelector) -> CompoundSelector {
        self.allocations.set(self.allocations.get() + 1);
        compound.clone()
    }

    /// The number of compound selectors allocated through this context so far
    pub fn allocations(&self) -> usize {
        self.allocations.get()
    }

    pub fn look_up_span(&self, span: Span) -> SpanLoc {
        self.map.look_up_span(span)
    }

    /// Logs a conversion, if conversions are being traced
    pub(crate) fn trace(&self, span: Option<Span>, message: impl FnOnce() -> String) {
        if self.options.quiet || !self.options.trace_conversions {
            return;
        }

        let loc = span.map(|span| self.look_up_span(span));
        self.options.logger.debug(loc.as_ref(), &message());
    }

    /// Logs an internal error that is about to abort the pass
    pub(crate) fn report(&self, span: Option<Span>, error: Box<SassError>) -> Box<SassError> {
        if error.is_internal() && !self.options.quiet {
            let loc = span.map(|span| self.look_up_span(span));
            self.options.logger.warning(loc.as_ref(), &error.to_string());
        }

        error
    }

    fn resolve(&self, error: Box<SassError>) -> Box<SassError> {
        if !error.is_raw() {
            return error;
        }

        let (message, span) = error.raw();
        Box::new(SassError::from_loc(
            message,
            self.look_up_span(span),
            self.options.unicode_error_messages,
        ))
    }
}
