use crate::{
    error::SassResult,
    lexer::{Lexer, Token},
    utils::{is_name, is_name_start},
};

pub(crate) trait BaseParser {
    fn toks(&self) -> &Lexer;
    fn toks_mut(&mut self) -> &mut Lexer;

    /// Consumes whitespace, returning whether any was found
    fn whitespace(&mut self) -> bool {
        let mut found = false;
        while matches!(
            self.toks().peek(),
            Some(Token {
                kind: ' ' | '\t' | '\n',
                ..
            })
        ) {
            self.toks_mut().next();
            found = true;
        }
        found
    }

    fn scan_char(&mut self, c: char) -> bool {
        if self.toks().next_char_is(c) {
            self.toks_mut().next();
            return true;
        }

        false
    }

    fn expect_char(&mut self, c: char) -> SassResult<()> {
        match self.toks().peek() {
            Some(tok) if tok.kind == c => {
                self.toks_mut().next();
                Ok(())
            }
            Some(..) | None => {
                Err((format!("expected \"{}\".", c), self.toks().current_span()).into())
            }
        }
    }

    fn looking_at_identifier(&self) -> bool {
        match self.toks().peek() {
            Some(Token { kind, .. }) if is_name_start(kind) => true,
            Some(Token { kind: '-', .. }) => match self.toks().peek_n(1) {
                Some(Token { kind, .. }) => is_name_start(kind) || kind == '-',
                None => false,
            },
            Some(..) | None => false,
        }
    }

    fn parse_identifier(&mut self) -> SassResult<String> {
        let mut text = String::new();

        if self.scan_char('-') {
            text.push('-');

            if self.scan_char('-') {
                text.push('-');
                self.parse_identifier_body(&mut text)?;
                return Ok(text);
            }
        }

        match self.toks().peek() {
            Some(Token { kind, .. }) if is_name_start(kind) => {
                self.toks_mut().next();
                text.push(kind);
            }
            Some(Token { kind: '\\', .. }) => {
                return Err((
                    "Escapes are not supported in selectors.",
                    self.toks().current_span(),
                )
                    .into())
            }
            Some(..) | None => {
                return Err(("Expected identifier.", self.toks().current_span()).into())
            }
        }

        self.parse_identifier_body(&mut text)?;

        Ok(text)
    }

    fn parse_identifier_body(&mut self, buffer: &mut String) -> SassResult<()> {
        while let Some(tok) = self.toks().peek() {
            if is_name(tok.kind) {
                self.toks_mut().next();
                buffer.push(tok.kind);
            } else if tok.kind == '\\' {
                return Err((
                    "Escapes are not supported in selectors.",
                    self.toks().current_span(),
                )
                    .into());
            } else {
                break;
            }
        }

        Ok(())
    }

    fn parse_string(&mut self) -> SassResult<String> {
        let quote = match self.toks_mut().next() {
            Some(Token {
                kind: q @ ('\'' | '"'),
                ..
            }) => q,
            Some(..) | None => return Err(("Expected string.", self.toks().current_span()).into()),
        };

        let mut buffer = String::new();

        while let Some(next) = self.toks_mut().next() {
            if next.kind == quote {
                return Ok(buffer);
            } else if next.kind == '\n' {
                break;
            } else if next.kind == '\\' {
                return Err((
                    "Escapes are not supported in selectors.",
                    self.toks().prev_span(),
                )
                    .into());
            }
            buffer.push(next.kind);
        }

        Err((
            format!("Expected {quote}.", quote = quote),
            self.toks().current_span(),
        )
            .into())
    }
}
