use std::fmt::{self, Display, Write};

use codemap::Span;

use super::CompoundSelector;

#[derive(Clone, Debug, Eq, PartialEq, Copy, Hash)]
pub enum Combinator {
    /// Matches the right-hand selector if it's a descendant of the left-hand
    /// selector in the DOM tree.
    ///
    /// This is written as whitespace, and is also the combinator of a link
    /// with nothing after it.
    Descendant,

    /// Matches the right-hand selector if it's a direct child of the left-hand
    /// selector in the DOM tree.
    ///
    /// `'>'`
    Child,

    /// Matches the right-hand selector if it's immediately adjacent to the
    /// left-hand selector in the DOM tree.
    ///
    /// `'+'`
    NextSibling,

    /// Matches the right-hand selector if it comes after the left-hand selector
    /// in the DOM tree.
    ///
    /// `'~'`
    FollowingSibling,
}

impl Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char(match self {
            Self::Descendant => ' ',
            Self::NextSibling => '+',
            Self::Child => '>',
            Self::FollowingSibling => '~',
        })
    }
}

/// One link of a complex selector, owning every link after it.
///
/// A link reads as `head combinator tail`, so `.a > .b` is a link with head
/// `.a` and combinator `>` whose tail is a link with head `.b`. The last link
/// of a chain normally has a descendant combinator; any other combinator there
/// is a trailing combinator, as in `.a >`.
///
/// `head` is only `None` on the first link of a selector that begins with a
/// combinator, like `> .a`.
#[derive(Clone, Debug)]
pub struct SelectorChain {
    pub head: Option<CompoundSelector>,
    pub combinator: Combinator,
    pub tail: Option<Box<SelectorChain>>,

    /// Where this chain was parsed from, if it came from source text.
    ///
    /// Only ever set on the first link.
    pub(crate) span: Option<Span>,
}

impl PartialEq for SelectorChain {
    fn eq(&self, other: &Self) -> bool {
        self.links()
            .map(|link| (&link.head, link.combinator))
            .eq(other.links().map(|link| (&link.head, link.combinator)))
    }
}

impl Eq for SelectorChain {}

impl Display for SelectorChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for link in self.links() {
            if let Some(head) = &link.head {
                write!(f, "{}", head)?;
            }

            match (link.combinator, link.tail.is_some()) {
                (Combinator::Descendant, true) => f.write_char(' ')?,
                (Combinator::Descendant, false) => {}
                (combinator, has_tail) => {
                    if link.head.is_some() {
                        f.write_char(' ')?;
                    }
                    write!(f, "{}", combinator)?;
                    if has_tail {
                        f.write_char(' ')?;
                    }
                }
            }
        }

        Ok(())
    }
}

impl SelectorChain {
    pub fn new(
        head: Option<CompoundSelector>,
        combinator: Combinator,
        tail: Option<Box<SelectorChain>>,
    ) -> Self {
        Self {
            head,
            combinator,
            tail,
            span: None,
        }
    }

    /// A chain with no selectors and no combinators
    pub fn empty() -> Self {
        Self::new(None, Combinator::Descendant, None)
    }

    /// Builds a chain from `(head, combinator)` pairs, in order
    pub fn from_links(links: Vec<(Option<CompoundSelector>, Combinator)>) -> Self {
        let mut chain: Option<SelectorChain> = None;

        for (head, combinator) in links.into_iter().rev() {
            chain = Some(SelectorChain::new(head, combinator, chain.map(Box::new)));
        }

        chain.unwrap_or_else(SelectorChain::empty)
    }

    pub(crate) fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    pub fn span(&self) -> Option<Span> {
        self.span
    }

    /// Iterates over this link and every link after it
    pub fn links(&self) -> Links<'_> {
        Links { next: Some(self) }
    }

    /// The number of links in this chain, including this one
    pub fn len(&self) -> usize {
        self.links().count()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none() && self.tail.is_none() && self.combinator == Combinator::Descendant
    }

    pub fn last(&self) -> &SelectorChain {
        let mut link = self;
        while let Some(tail) = &link.tail {
            link = tail;
        }
        link
    }

    /// The combinator dangling off the end of this chain, as in `.a >`
    pub fn trailing_combinator(&self) -> Option<Combinator> {
        match self.last().combinator {
            Combinator::Descendant => None,
            combinator => Some(combinator),
        }
    }
}

/// Iterator over the links of a [`SelectorChain`]
#[derive(Debug, Clone)]
pub struct Links<'a> {
    next: Option<&'a SelectorChain>,
}

impl<'a> Iterator for Links<'a> {
    type Item = &'a SelectorChain;

    fn next(&mut self) -> Option<Self::Item> {
        let link = self.next?;
        self.next = link.tail.as_deref();
        Some(link)
    }
}
