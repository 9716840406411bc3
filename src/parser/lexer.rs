//! Indentation-aware lexer for dialogue scripts
//!
//! The input is processed one line at a time. Each line first yields its
//! structural tokens (INDENT, DEDENT, BLANK_LINE_START), decided by the
//! [`IndentTracker`], then its indentation, then its content. Content is
//! tokenized with logos; comment lines are a single LINE_COMMENT token.

use std::collections::VecDeque;
use std::rc::Rc;

use super::indent::{IndentCache, IndentContext, IndentTracker};
use super::syntax_kind::SyntaxKind;
use logos::Logos;
use rowan::{TextRange, TextSize};

/// A token with its kind, text, and position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: SyntaxKind,
    pub text: &'a str,
    pub offset: TextSize,
}

impl Token<'_> {
    pub fn range(&self) -> TextRange {
        TextRange::at(self.offset, TextSize::of(self.text))
    }
}

/// The indentation context a content line was tokenized under.
#[derive(Debug, Clone)]
pub struct LineContext {
    pub offset: TextSize,
    pub context: Rc<IndentContext>,
}

/// Line-oriented lexer producing structural and content tokens
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
    tracker: IndentTracker,
    pending: VecDeque<Token<'a>>,
    lines: Vec<LineContext>,
    finished: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self::with_tracker(input, IndentTracker::new())
    }

    /// Lex with frames interned in a cache carried over from earlier runs.
    pub fn with_cache(input: &'a str, cache: IndentCache) -> Self {
        Self::with_tracker(input, IndentTracker::with_cache(cache))
    }

    fn with_tracker(input: &'a str, tracker: IndentTracker) -> Self {
        Self {
            input,
            pos: 0,
            tracker,
            pending: VecDeque::new(),
            lines: Vec::new(),
            finished: false,
        }
    }

    /// The context currently on top of the indentation stack.
    pub fn context(&self) -> &Rc<IndentContext> {
        self.tracker.current()
    }

    /// Contexts of the content lines lexed so far, in document order.
    pub fn line_contexts(&self) -> &[LineContext] {
        &self.lines
    }

    pub fn into_cache(self) -> IndentCache {
        self.tracker.into_cache()
    }

    fn push(&mut self, kind: SyntaxKind, start: usize, end: usize) {
        self.pending.push_back(Token {
            kind,
            text: &self.input[start..end],
            offset: TextSize::new(start as u32),
        });
    }

    fn push_marker(&mut self, kind: SyntaxKind, at: usize) {
        self.push(kind, at, at);
    }

    fn lex_line(&mut self) {
        let input = self.input;
        let start = self.pos;
        let (content_end, line_end) = match input[start..].find('\n') {
            Some(nl) => {
                let nl = start + nl;
                let content_end = if input[..nl].ends_with('\r') { nl - 1 } else { nl };
                (content_end, nl + 1)
            }
            None => (input.len(), input.len()),
        };

        let indent_end = start
            + input[start..content_end]
                .bytes()
                .take_while(|b| matches!(b, b' ' | b'\t'))
                .count();
        let spaces = (indent_end - start) as u32;
        let rest = &input[indent_end..content_end];

        if rest.is_empty() || rest.starts_with('#') {
            self.push_marker(SyntaxKind::BLANK_LINE_START, start);
        } else {
            self.update_indentation(spaces, start);
            self.lines.push(LineContext {
                offset: TextSize::new(start as u32),
                context: Rc::clone(self.tracker.current()),
            });
        }

        if indent_end > start {
            self.push(SyntaxKind::WHITESPACE, start, indent_end);
        }

        if rest.starts_with('#') {
            self.push(SyntaxKind::LINE_COMMENT, indent_end, content_end);
        } else {
            self.lex_content(indent_end, content_end);
        }

        if line_end > content_end {
            self.push(SyntaxKind::NEWLINE, content_end, line_end);
        }
        self.pos = line_end;
    }

    fn update_indentation(&mut self, spaces: u32, at: usize) {
        let depth = self.tracker.depth();
        if spaces > depth {
            tracing::trace!(offset = at, from = depth, to = spaces, "indent");
            self.tracker.push(spaces);
            self.push_marker(SyntaxKind::INDENT, at);
        } else if spaces < depth {
            while self.tracker.depth() > spaces && self.tracker.pop() {
                self.push_marker(SyntaxKind::DEDENT, at);
            }
            tracing::trace!(offset = at, from = depth, to = spaces, "dedent");
            // Landed between two levels: the line opens a level of its own.
            if spaces > self.tracker.depth() {
                self.tracker.push(spaces);
                self.push_marker(SyntaxKind::INDENT, at);
            }
        }
    }

    fn lex_content(&mut self, start: usize, end: usize) {
        let mut inner = LogosToken::lexer(&self.input[start..end]);
        while let Some(token) = inner.next() {
            let span = inner.span();
            let kind = match token {
                Ok(t) => t.into(),
                Err(()) => SyntaxKind::WORD,
            };
            self.push(kind, start + span.start, start + span.end);
        }
    }

    fn finish(&mut self) {
        let end = self.input.len();
        while self.tracker.pop() {
            self.push_marker(SyntaxKind::DEDENT, end);
        }
        self.finished = true;
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Some(token);
            }
            if self.finished {
                return None;
            }
            if self.pos < self.input.len() {
                self.lex_line();
            } else {
                self.finish();
            }
        }
    }
}

/// Tokenize an entire string into a Vec
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).collect()
}

/// Logos token enum for the content part of a line - maps to SyntaxKind
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
pub enum LogosToken {
    #[regex(r"[ \t]+")]
    Whitespace,

    #[token("-")]
    Dash,

    #[token("/")]
    Slash,

    #[token("#")]
    Hash,

    #[token(":")]
    Colon,

    #[regex(r"[^ \t\n\-/#:]+")]
    Word,
}

impl From<LogosToken> for SyntaxKind {
    fn from(token: LogosToken) -> Self {
        match token {
            LogosToken::Whitespace => SyntaxKind::WHITESPACE,
            LogosToken::Dash => SyntaxKind::DASH,
            LogosToken::Slash => SyntaxKind::SLASH,
            LogosToken::Hash => SyntaxKind::HASH,
            LogosToken::Colon => SyntaxKind::COLON,
            LogosToken::Word => SyntaxKind::WORD,
        }
    }
}
