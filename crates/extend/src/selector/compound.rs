use std::fmt::{self, Write};

use indexmap::IndexSet;

use super::SimpleSelector;

/// A compound selector is composed of several
/// simple selectors
#[derive(Clone, Debug, Eq, PartialEq, Hash, Default)]
pub struct CompoundSelector {
    pub components: Vec<SimpleSelector>,
}

impl fmt::Display for CompoundSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for simple in &self.components {
            write!(f, "{}", simple)?;
        }

        // An empty compound matches every element
        if self.components.is_empty() {
            f.write_char('*')?;
        }

        Ok(())
    }
}

impl FromIterator<SimpleSelector> for CompoundSelector {
    fn from_iter<I: IntoIterator<Item = SimpleSelector>>(iter: I) -> Self {
        Self {
            components: iter.into_iter().collect(),
        }
    }
}

impl CompoundSelector {
    pub fn new(components: Vec<SimpleSelector>) -> Self {
        Self { components }
    }

    /// Compares the simple selectors of `self` and `other` as sets, so `.a.b`
    /// is equivalent to `.b.a`.
    ///
    /// The order in which simple selectors are written does not change which
    /// elements a compound selector matches.
    pub fn is_equivalent(&self, other: &Self) -> bool {
        if self.components == other.components {
            return true;
        }

        let lhs: IndexSet<&SimpleSelector> = self.components.iter().collect();
        let rhs: IndexSet<&SimpleSelector> = other.components.iter().collect();

        lhs == rhs
    }
}
