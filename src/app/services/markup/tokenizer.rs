//! Markup token stream for the modem status page
//!
//! Tokenization is done by the html5ever tokenizer without a tree builder,
//! so no DOM is built. Its tag and character tokens are mapped onto
//! [`Token`]; comments and doctypes are dropped, adjacent character runs
//! are merged, and the bodies of raw-text elements (`script`, `style`) are
//! discarded.

use crate::Result;
use crate::constants::markers::RAW_TEXT_TAGS;
use html5ever::tendril::StrTendril;
use html5ever::tokenizer::states::RawKind;
use html5ever::tokenizer::{
    self as html, BufferQueue, TagKind, TokenSink, TokenSinkResult, Tokenizer, TokenizerOpts,
};
use std::collections::VecDeque;
use tracing::{debug, trace};

/// One markup token
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Opening tag with its lower-cased name
    StartTag { name: String, self_closing: bool },
    /// Closing tag with its lower-cased name
    EndTag { name: String },
    /// Decoded character data
    Text(String),
}

impl Token {
    /// Convenience constructor for an opening tag
    pub fn start(name: &str) -> Self {
        Token::StartTag {
            name: name.to_ascii_lowercase(),
            self_closing: false,
        }
    }

    /// Convenience constructor for a closing tag
    pub fn end(name: &str) -> Self {
        Token::EndTag {
            name: name.to_ascii_lowercase(),
        }
    }

    /// Convenience constructor for text
    pub fn text(data: impl Into<String>) -> Self {
        Token::Text(data.into())
    }
}

/// Source of markup tokens
///
/// `Ok(None)` marks the clean end of the document. Any `Err` is a stream
/// failure and aborts extraction.
pub trait TokenStream {
    fn next_token(&mut self) -> Result<Option<Token>>;
}

impl<T: TokenStream + ?Sized> TokenStream for &mut T {
    fn next_token(&mut self) -> Result<Option<Token>> {
        (**self).next_token()
    }
}

impl TokenStream for std::vec::IntoIter<Token> {
    fn next_token(&mut self) -> Result<Option<Token>> {
        Ok(self.next())
    }
}

/// Collects html5ever tokens as [`Token`]s
#[derive(Debug, Default)]
struct TokenCollector {
    tokens: VecDeque<Token>,
    text: String,
    in_raw_text: bool,
    parse_errors: usize,
}

impl TokenCollector {
    fn flush_text(&mut self) {
        if !self.text.is_empty() {
            self.tokens.push_back(Token::Text(std::mem::take(&mut self.text)));
        }
    }

    fn push_tag(&mut self, tag: html::Tag) -> TokenSinkResult<()> {
        self.flush_text();
        let name = tag.name.to_string();

        match tag.kind {
            TagKind::StartTag => {
                let raw_kind = match name.as_str() {
                    "script" => Some(RawKind::ScriptData),
                    other if RAW_TEXT_TAGS.contains(&other) => Some(RawKind::Rawtext),
                    _ => None,
                };
                let self_closing = tag.self_closing;
                self.tokens.push_back(Token::StartTag { name, self_closing });

                if let (Some(kind), false) = (raw_kind, self_closing) {
                    self.in_raw_text = true;
                    return TokenSinkResult::RawData(kind);
                }
            }
            TagKind::EndTag => {
                self.in_raw_text = false;
                self.tokens.push_back(Token::EndTag { name });
            }
        }
        TokenSinkResult::Continue
    }
}

impl TokenSink for TokenCollector {
    type Handle = ();

    fn process_token(&mut self, token: html::Token, line_number: u64) -> TokenSinkResult<()> {
        match token {
            html::Token::TagToken(tag) => return self.push_tag(tag),
            html::Token::CharacterTokens(text) => {
                if !self.in_raw_text {
                    self.text.push_str(&text);
                }
            }
            html::Token::ParseError(message) => {
                self.parse_errors += 1;
                trace!("markup parse error on line {}: {}", line_number, message);
            }
            html::Token::EOFToken => self.flush_text(),
            html::Token::NullCharacterToken
            | html::Token::CommentToken(_)
            | html::Token::DoctypeToken(_) => {}
        }
        TokenSinkResult::Continue
    }
}

/// Token stream over an in-memory HTML document
///
/// The whole document is tokenized up front; malformed markup is recovered
/// the way browsers recover it, so this stream never fails.
#[derive(Debug)]
pub struct HtmlTokenizer {
    tokens: VecDeque<Token>,
}

impl HtmlTokenizer {
    /// Tokenize `input`
    pub fn new(input: &str) -> Self {
        let mut tokenizer = Tokenizer::new(TokenCollector::default(), TokenizerOpts::default());
        let mut queue = BufferQueue::new();
        queue.push_back(StrTendril::from_slice(input));

        // The collector never asks for a script pause, so one feed consumes everything
        let _ = tokenizer.feed(&mut queue);
        tokenizer.end();

        let collector = tokenizer.sink;
        debug!(
            "Tokenized {} bytes into {} tokens ({} recovered parse errors)",
            input.len(),
            collector.tokens.len(),
            collector.parse_errors
        );
        Self {
            tokens: collector.tokens,
        }
    }
}

impl TokenStream for HtmlTokenizer {
    fn next_token(&mut self) -> Result<Option<Token>> {
        let token = self.tokens.pop_front();
        if let Some(token) = &token {
            trace!("token {:?}", token);
        }
        Ok(token)
    }
}
