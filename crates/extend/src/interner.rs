use lasso::{Rodeo, Spur};

use std::cell::RefCell;
use std::fmt::{self, Display};

thread_local!(static IDENTIFIERS: RefCell<Rodeo<Spur>> = RefCell::new(Rodeo::default()));

/// The name of a simple selector, interned for the lifetime of the thread
///
/// Copying a compound selector only copies these handles, so two selectors
/// with the same names compare equal without touching the strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Identifier(Spur);

impl Identifier {
    pub fn new<T: AsRef<str>>(s: T) -> Self {
        Self(IDENTIFIERS.with(|interner| interner.borrow_mut().get_or_intern(s)))
    }

    pub fn to_owned_string(self) -> String {
        IDENTIFIERS.with(|interner| interner.borrow().resolve(&self.0).to_owned())
    }

    pub fn is_empty(self) -> bool {
        IDENTIFIERS.with(|interner| interner.borrow().resolve(&self.0).is_empty())
    }
}

impl From<&str> for Identifier {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        IDENTIFIERS.with(|interner| f.write_str(interner.borrow().resolve(&self.0)))
    }
}

#[cfg(test)]
mod tests {
    use super::Identifier;

    #[test]
    fn same_name_same_identifier() {
        let a = Identifier::new("foo");
        let b = Identifier::from("foo");

        assert_eq!(a, b);
        assert_ne!(a, Identifier::new("bar"));
        assert_eq!(a.to_owned_string(), "foo");
        assert!(Identifier::new("").is_empty());
    }
}
