use std::fmt::{self, Write};

use crate::{interner::Identifier, utils::is_ident};

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum SimpleSelector {
    /// *
    Universal(Namespace),

    /// A pseudo-class or pseudo-element selector.
    ///
    /// Arguments are kept as written; selector arguments such as the one taken
    /// by `:not()` are not parsed.
    Pseudo(Pseudo),

    /// A type selector.
    ///
    /// This selects elements whose name equals the given name.
    Type(QualifiedName),

    /// A placeholder selector.
    ///
    /// This doesn't match any elements. It's intended to be extended using
    /// `@extend`. It's not a plain CSS selector, and it should be removed
    /// before emitting a CSS document.
    Placeholder(Identifier),

    Id(Identifier),

    /// A class selector.
    ///
    /// This selects elements whose `class` attribute contains an identifier with
    /// the given name.
    Class(Identifier),

    Attribute(Box<Attribute>),
}

impl fmt::Display for SimpleSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(name) => write!(f, "#{}", name),
            Self::Class(name) => write!(f, ".{}", name),
            Self::Placeholder(name) => write!(f, "%{}", name),
            Self::Universal(namespace) => write!(f, "{}*", namespace),
            Self::Pseudo(pseudo) => write!(f, "{}", pseudo),
            Self::Type(name) => write!(f, "{}", name),
            Self::Attribute(attr) => write!(f, "{}", attr),
        }
    }
}

impl SimpleSelector {
    pub fn class(name: &str) -> Self {
        Self::Class(Identifier::new(name))
    }

    pub fn id(name: &str) -> Self {
        Self::Id(Identifier::new(name))
    }

    pub fn placeholder(name: &str) -> Self {
        Self::Placeholder(Identifier::new(name))
    }

    /// An element selector with no namespace
    pub fn type_selector(name: &str) -> Self {
        Self::Type(QualifiedName {
            ident: Identifier::new(name),
            namespace: Namespace::None,
        })
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Pseudo {
    /// The name of this selector.
    pub name: Identifier,

    /// Whether this is a pseudo-class selector.
    ///
    /// If this is false, this is a pseudo-element selector
    pub is_class: bool,

    /// Whether this is syntactically a pseudo-class selector.
    ///
    /// This is the same as `is_class` unless this selector is a pseudo-element
    /// that was written syntactically as a pseudo-class (`:before`, `:after`,
    /// `:first-line`, or `:first-letter`).
    pub is_syntactic_class: bool,

    /// The argument passed to this selector, trimmed of surrounding whitespace
    pub argument: Option<Box<str>>,
}

impl fmt::Display for Pseudo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char(':')?;

        if !self.is_syntactic_class {
            f.write_char(':')?;
        }

        write!(f, "{}", self.name)?;

        if let Some(arg) = &self.argument {
            write!(f, "({})", arg)?;
        }

        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Namespace {
    /// No namespace was written
    None,

    /// `|`, matching elements without a namespace
    Empty,

    /// `*|`, matching elements in any namespace
    Asterisk,

    Other(Identifier),
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_char('|'),
            Self::Asterisk => f.write_str("*|"),
            Self::Other(namespace) => write!(f, "{}|", namespace),
            Self::None => Ok(()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct QualifiedName {
    pub ident: Identifier,
    pub namespace: Namespace,
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.namespace, self.ident)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Attribute {
    pub attr: QualifiedName,
    pub op: AttributeOp,

    /// The unquoted value to match against, if `op` is not `AttributeOp::Any`
    pub value: Option<Box<str>>,

    /// The case-sensitivity modifier, either `i` or `s`
    pub modifier: Option<char>,
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}{}", self.attr, self.op)?;

        if let Some(value) = &self.value {
            if is_ident(value) && !value.starts_with("--") {
                f.write_str(value)?;
            } else {
                write_quoted_string(f, value)?;
            }
        }

        if let Some(modifier) = self.modifier {
            write!(f, " {}", modifier)?;
        }

        f.write_char(']')
    }
}

/// Writes `value` as a quoted CSS string.
///
/// Double quotes are preferred. Single quotes are used if the value contains
/// a double quote but no single quote.
fn write_quoted_string(f: &mut fmt::Formatter<'_>, value: &str) -> fmt::Result {
    let quote = if value.contains('"') && !value.contains('\'') {
        '\''
    } else {
        '"'
    };

    f.write_char(quote)?;

    let mut chars = value.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => f.write_str("\\\\")?,
            '\n' => {
                f.write_str("\\a")?;
                let next = match chars.peek() {
                    Some(next) => *next,
                    None => continue,
                };

                if next.is_ascii_hexdigit() || next == ' ' || next == '\t' {
                    f.write_char(' ')?;
                }
            }
            c if c == quote => {
                f.write_char('\\')?;
                f.write_char(c)?;
            }
            c => f.write_char(c)?,
        }
    }

    f.write_char(quote)
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AttributeOp {
    /// \[attr\]
    ///
    /// Represents elements with an attribute name of `attr`
    Any,

    /// [attr=value]
    ///
    /// Represents elements with an attribute name of `attr`
    /// whose value is exactly `value`
    Equals,

    /// [attr~=value]
    ///
    /// Represents elements with an attribute name of `attr`
    /// whose value is a whitespace-separated list of words,
    /// one of which is exactly `value`
    Include,

    /// [attr|=value]
    ///
    /// Represents elements with an attribute name of `attr`
    /// whose value can be exactly value or can begin with
    /// `value` immediately followed by a hyphen (`-`)
    Dash,

    /// [attr^=value]
    Prefix,

    /// [attr$=value]
    Suffix,

    /// [attr*=value]
    Contains,
}

impl fmt::Display for AttributeOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Any => "",
            Self::Equals => "=",
            Self::Include => "~=",
            Self::Dash => "|=",
            Self::Prefix => "^=",
            Self::Suffix => "$=",
            Self::Contains => "*=",
        })
    }
}
