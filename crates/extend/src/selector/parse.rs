use codemap::Span;

use crate::{
    error::SassResult,
    interner::Identifier,
    lexer::{Lexer, Token},
    parse::BaseParser,
};

use super::{
    Attribute, AttributeOp, Combinator, CompoundSelector, Namespace, Pseudo, QualifiedName,
    SelectorChain, SimpleSelector,
};

/// Pseudo-elements that may be written with pseudo-class syntax
static FAKE_PSEUDO_ELEMENTS: phf::Set<&'static str> = phf::phf_set! {
    "after",
    "before",
    "first-line",
    "first-letter",
};

/// Parses a single complex selector into a [`SelectorChain`]
pub(crate) struct SelectorParser {
    pub toks: Lexer,
    span: Span,
}

impl BaseParser for SelectorParser {
    fn toks(&self) -> &Lexer {
        &self.toks
    }

    fn toks_mut(&mut self) -> &mut Lexer {
        &mut self.toks
    }
}

impl SelectorParser {
    pub fn new(toks: Lexer, span: Span) -> Self {
        Self { toks, span }
    }

    pub fn parse(mut self) -> SassResult<SelectorChain> {
        let chain = self.parse_complex_selector()?;
        if self.toks.peek().is_some() {
            return Err(("expected selector.", self.toks.current_span()).into());
        }
        Ok(chain.with_span(self.span))
    }

    fn parse_complex_selector(&mut self) -> SassResult<SelectorChain> {
        let mut links: Vec<(Option<CompoundSelector>, Combinator)> = Vec::new();
        let mut head: Option<CompoundSelector> = None;

        loop {
            self.whitespace();

            let combinator = match self.toks.peek() {
                Some(Token { kind: '+', .. }) => Combinator::NextSibling,
                Some(Token { kind: '>', .. }) => Combinator::Child,
                Some(Token { kind: '~', .. }) => Combinator::FollowingSibling,
                Some(Token { kind, .. })
                    if is_simple_selector_start(kind) || self.looking_at_identifier() =>
                {
                    if let Some(ancestor) = head.take() {
                        links.push((Some(ancestor), Combinator::Descendant));
                    }
                    head = Some(self.parse_compound_selector()?);
                    continue;
                }
                Some(..) | None => break,
            };

            if head.is_none() && !links.is_empty() {
                return Err(("expected selector.", self.toks.current_span()).into());
            }

            self.toks.next();
            links.push((head.take(), combinator));
        }

        match head {
            Some(last) => links.push((Some(last), Combinator::Descendant)),
            None if links.is_empty() => {
                return Err(("expected selector.", self.toks.current_span()).into())
            }
            None => {}
        }

        Ok(SelectorChain::from_links(links))
    }

    fn parse_compound_selector(&mut self) -> SassResult<CompoundSelector> {
        let mut components = vec![self.parse_simple_selector()?];

        while let Some(Token { kind, .. }) = self.toks.peek() {
            if !is_simple_selector_start(kind) {
                break;
            }

            components.push(self.parse_simple_selector()?);
        }

        Ok(CompoundSelector { components })
    }

    fn parse_simple_selector(&mut self) -> SassResult<SimpleSelector> {
        match self.toks.peek() {
            Some(Token { kind: '[', .. }) => self.parse_attribute_selector(),
            Some(Token { kind: '.', .. }) => {
                self.toks.next();
                Ok(SimpleSelector::Class(self.parse_name()?))
            }
            Some(Token { kind: '#', .. }) => {
                self.toks.next();
                Ok(SimpleSelector::Id(self.parse_name()?))
            }
            Some(Token { kind: '%', .. }) => {
                self.toks.next();
                Ok(SimpleSelector::Placeholder(self.parse_name()?))
            }
            Some(Token { kind: ':', .. }) => self.parse_pseudo_selector(),
            Some(Token { kind: '&', .. }) => Err((
                "Parent selectors must be resolved before extending.",
                self.toks.current_span(),
            )
                .into()),
            _ => self.parse_type_or_universal_selector(),
        }
    }

    fn parse_name(&mut self) -> SassResult<Identifier> {
        Ok(Identifier::new(self.parse_identifier()?))
    }

    fn parse_attribute_selector(&mut self) -> SassResult<SimpleSelector> {
        let start = self.toks.cursor();
        self.expect_char('[')?;
        self.whitespace();

        let attr = self.parse_attribute_name()?;
        self.whitespace();

        if self.scan_char(']') {
            return Ok(SimpleSelector::Attribute(Box::new(Attribute {
                attr,
                op: AttributeOp::Any,
                value: None,
                modifier: None,
            })));
        }

        let op = self.parse_attribute_op()?;
        self.whitespace();

        let value = match self.toks.peek() {
            Some(Token {
                kind: '\'' | '"', ..
            }) => self.parse_string()?,
            _ => self.parse_identifier()?,
        };
        self.whitespace();

        let modifier = match self.toks.peek() {
            Some(Token { kind, .. }) if kind.is_ascii_alphabetic() => {
                self.toks.next();
                self.whitespace();
                Some(kind)
            }
            _ => None,
        };

        if !self.scan_char(']') {
            return Err(("expected \"]\".", self.toks.span_from(start)).into());
        }

        Ok(SimpleSelector::Attribute(Box::new(Attribute {
            attr,
            op,
            value: Some(value.into_boxed_str()),
            modifier,
        })))
    }

    fn parse_attribute_name(&mut self) -> SassResult<QualifiedName> {
        if self.scan_char('*') {
            self.expect_char('|')?;
            return Ok(QualifiedName {
                ident: self.parse_name()?,
                namespace: Namespace::Asterisk,
            });
        }

        if self.scan_char('|') {
            return Ok(QualifiedName {
                ident: self.parse_name()?,
                namespace: Namespace::Empty,
            });
        }

        let name_or_namespace = self.parse_name()?;

        // `[a|=b]` is an operator, not a namespace
        if self.toks.next_char_is('|')
            && !matches!(self.toks.peek_n(1), Some(Token { kind: '=', .. }))
        {
            self.toks.next();
            return Ok(QualifiedName {
                ident: self.parse_name()?,
                namespace: Namespace::Other(name_or_namespace),
            });
        }

        Ok(QualifiedName {
            ident: name_or_namespace,
            namespace: Namespace::None,
        })
    }

    fn parse_attribute_op(&mut self) -> SassResult<AttributeOp> {
        let op = match self.toks.next() {
            Some(Token { kind: '=', .. }) => return Ok(AttributeOp::Equals),
            Some(Token { kind: '~', .. }) => AttributeOp::Include,
            Some(Token { kind: '|', .. }) => AttributeOp::Dash,
            Some(Token { kind: '^', .. }) => AttributeOp::Prefix,
            Some(Token { kind: '$', .. }) => AttributeOp::Suffix,
            Some(Token { kind: '*', .. }) => AttributeOp::Contains,
            Some(..) | None => return Err(("Expected \"]\".", self.toks.prev_span()).into()),
        };

        self.expect_char('=')?;

        Ok(op)
    }

    fn parse_pseudo_selector(&mut self) -> SassResult<SimpleSelector> {
        self.expect_char(':')?;
        let element = self.scan_char(':');
        let name = self.parse_identifier()?;

        let argument = if self.scan_char('(') {
            Some(self.parse_pseudo_argument()?.into_boxed_str())
        } else {
            None
        };

        Ok(SimpleSelector::Pseudo(Pseudo {
            is_class: !element && !is_fake_pseudo_element(&name),
            name: Identifier::new(name),
            is_syntactic_class: !element,
            argument,
        }))
    }

    /// Consumes everything up to the matching `)`, which is also consumed
    fn parse_pseudo_argument(&mut self) -> SassResult<String> {
        let start = self.toks.cursor();
        let mut buffer = String::new();
        let mut depth = 0_usize;

        while let Some(tok) = self.toks.next() {
            match tok.kind {
                '(' => depth += 1,
                ')' if depth == 0 => {
                    let argument = buffer.trim();
                    if argument.is_empty() {
                        return Err(("Expected expression.", self.toks.span_from(start)).into());
                    }
                    return Ok(argument.to_owned());
                }
                ')' => depth -= 1,
                _ => {}
            }
            buffer.push(tok.kind);
        }

        Err(("expected \")\".", self.toks.current_span()).into())
    }

    /// Consumes a type selector or a universal selector.
    ///
    /// These are combined because either one could start with `*`.
    fn parse_type_or_universal_selector(&mut self) -> SassResult<SimpleSelector> {
        match self.toks.peek() {
            Some(Token { kind: '*', .. }) => {
                self.toks.next();
                if !self.scan_char('|') {
                    return Ok(SimpleSelector::Universal(Namespace::None));
                }

                if self.scan_char('*') {
                    return Ok(SimpleSelector::Universal(Namespace::Asterisk));
                }

                return Ok(SimpleSelector::Type(QualifiedName {
                    ident: self.parse_name()?,
                    namespace: Namespace::Asterisk,
                }));
            }
            Some(Token { kind: '|', .. }) => {
                self.toks.next();
                if self.scan_char('*') {
                    return Ok(SimpleSelector::Universal(Namespace::Empty));
                }

                return Ok(SimpleSelector::Type(QualifiedName {
                    ident: self.parse_name()?,
                    namespace: Namespace::Empty,
                }));
            }
            _ => {}
        }

        let name_or_namespace = self.parse_name()?;

        if !self.scan_char('|') {
            return Ok(SimpleSelector::Type(QualifiedName {
                ident: name_or_namespace,
                namespace: Namespace::None,
            }));
        }

        if self.scan_char('*') {
            return Ok(SimpleSelector::Universal(Namespace::Other(name_or_namespace)));
        }

        Ok(SimpleSelector::Type(QualifiedName {
            ident: self.parse_name()?,
            namespace: Namespace::Other(name_or_namespace),
        }))
    }
}

/// Returns whether `c` can start a simple selector other than a type
/// selector.
fn is_simple_selector_start(c: char) -> bool {
    matches!(c, '*' | '[' | '.' | '#' | '%' | ':' | '|' | '&')
}

/// Returns whether `name` is the name of a pseudo-element that can be written
/// with pseudo-class syntax (`:before`, `:after`, `:first-line`, or
/// `:first-letter`)
fn is_fake_pseudo_element(name: &str) -> bool {
    FAKE_PSEUDO_ELEMENTS.contains(name.to_ascii_lowercase().as_str())
}
