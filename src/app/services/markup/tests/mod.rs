//! Test utilities for markup tokenization and row extraction

use super::tokenizer::{Token, TokenStream};
use crate::{Error, Result};

mod row_extractor_tests;

/// Drain a token stream into a vector
pub fn collect_tokens<S: TokenStream>(mut stream: S) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    while let Some(token) = stream.next_token()? {
        tokens.push(token);
    }
    Ok(tokens)
}

/// Token stream that yields a fixed prefix and then fails
pub struct FailingStream {
    tokens: std::vec::IntoIter<Token>,
}

impl FailingStream {
    pub fn after(tokens: Vec<Token>) -> Self {
        Self {
            tokens: tokens.into_iter(),
        }
    }
}

impl TokenStream for FailingStream {
    fn next_token(&mut self) -> Result<Option<Token>> {
        match self.tokens.next() {
            Some(token) => Ok(Some(token)),
            None => Err(Error::stream("connection reset while reading page")),
        }
    }
}
