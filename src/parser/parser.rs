//! Recursive descent parser for dialogue scripts
//!
//! Builds a rowan GreenNode tree from the token stream. Structural tokens
//! (INDENT, DEDENT, BLANK_LINE_START) steer the parse but never enter the
//! tree, so the tree text is exactly the input. Nothing is ever rejected:
//! text the grammar cannot place ends up in an ERROR node and parsing
//! resumes on the next line.

use super::indent::IndentCache;
use super::lexer::{Lexer, Token};
use super::syntax_kind::SyntaxKind;
use rowan::{Checkpoint, GreenNode, GreenNodeBuilder, TextRange, TextSize};

/// Parse result containing the green tree and any errors
#[derive(Debug, Clone)]
pub struct Parse {
    pub green: GreenNode,
    pub errors: Vec<SyntaxError>,
}

impl Parse {
    /// Get the root syntax node
    pub fn syntax(&self) -> super::SyntaxNode {
        super::SyntaxNode::new_root(self.green.clone())
    }

    /// Typed view of the root
    pub fn document(&self) -> super::ast::Document {
        super::ast::Document::new(self.syntax())
    }

    pub fn errors(&self) -> &[SyntaxError] {
        &self.errors
    }

    /// Check if parsing succeeded without errors
    pub fn ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Indented dump of every node and token, for previews and debugging
    pub fn debug_tree(&self) -> String {
        format!("{:#?}", self.syntax())
    }
}

/// A syntax error with location and message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub message: String,
    pub range: TextRange,
}

impl SyntaxError {
    pub fn new(message: impl Into<String>, range: TextRange) -> Self {
        Self {
            message: message.into(),
            range,
        }
    }
}

/// Parse a dialogue script into a CST
pub fn parse(input: &str) -> Parse {
    DialogueParser::new().parse(input)
}

/// A reusable parser that keeps indentation frames alive between runs.
///
/// Editors reparse the whole document on every change; with a long-lived
/// `DialogueParser` the frames for unchanged indentation histories are
/// reused instead of rebuilt.
#[derive(Debug, Default)]
pub struct DialogueParser {
    cache: IndentCache,
}

impl DialogueParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parse(&mut self, input: &str) -> Parse {
        let cache = std::mem::take(&mut self.cache);
        let mut lexer = Lexer::with_cache(input, cache);
        let tokens: Vec<_> = lexer.by_ref().collect();
        self.cache = lexer.into_cache();

        let mut parser = Parser::new(input, &tokens);
        parser.parse_document();
        let parse = parser.finish();
        tracing::debug!(
            len = input.len(),
            tokens = tokens.len(),
            errors = parse.errors.len(),
            frames = self.cache.len(),
            "parsed dialogue"
        );
        parse
    }

    /// Number of indentation frames held for reuse.
    pub fn cached_frames(&self) -> usize {
        self.cache.len()
    }
}

/// The parser state
struct Parser<'t, 'a> {
    input: &'a str,
    tokens: &'t [Token<'a>],
    pos: usize,
    builder: GreenNodeBuilder<'static>,
    errors: Vec<SyntaxError>,
}

impl<'t, 'a> Parser<'t, 'a> {
    fn new(input: &'a str, tokens: &'t [Token<'a>]) -> Self {
        Self {
            input,
            tokens,
            pos: 0,
            builder: GreenNodeBuilder::new(),
            errors: Vec::new(),
        }
    }

    fn finish(self) -> Parse {
        Parse {
            green: self.builder.finish(),
            errors: self.errors,
        }
    }

    // =========================================================================
    // Token inspection
    // =========================================================================

    fn current(&self) -> Option<&'t Token<'a>> {
        self.tokens.get(self.pos)
    }

    fn current_kind(&self) -> Option<SyntaxKind> {
        self.nth(0)
    }

    /// Raw lookahead; unlike most parsers nothing is skipped, since
    /// whitespace is significant here.
    fn nth(&self, n: usize) -> Option<SyntaxKind> {
        self.tokens.get(self.pos + n).map(|t| t.kind)
    }

    fn at(&self, kind: SyntaxKind) -> bool {
        self.current_kind() == Some(kind)
    }

    fn at_any(&self, kinds: &[SyntaxKind]) -> bool {
        self.current_kind().is_some_and(|k| kinds.contains(&k))
    }

    /// End of the current line's content: a newline, the next line's
    /// markers, or the end of input.
    fn at_line_end(&self) -> bool {
        match self.current_kind() {
            None => true,
            Some(kind) => kind == SyntaxKind::NEWLINE || kind.is_structural(),
        }
    }

    fn offset(&self) -> TextSize {
        self.current()
            .map(|t| t.offset)
            .unwrap_or_else(|| TextSize::of(self.input))
    }

    fn prev_kind(&self) -> Option<SyntaxKind> {
        self.pos.checked_sub(1).map(|i| self.tokens[i].kind)
    }

    /// At a `#` that starts a label link: it must follow whitespace.
    fn at_link_start(&self) -> bool {
        self.at(SyntaxKind::HASH) && self.prev_kind() == Some(SyntaxKind::WHITESPACE)
    }

    /// At BLANK_LINE_START of a line holding a comment.
    fn at_comment_line(&self) -> bool {
        self.at(SyntaxKind::BLANK_LINE_START)
            && match self.nth(1) {
                Some(SyntaxKind::LINE_COMMENT) => true,
                Some(SyntaxKind::WHITESPACE) => self.nth(2) == Some(SyntaxKind::LINE_COMMENT),
                _ => false,
            }
    }

    fn at_blank_line(&self) -> bool {
        self.at(SyntaxKind::BLANK_LINE_START) && !self.at_comment_line()
    }

    /// Whether the next non-blank, non-comment line opens a deeper block.
    fn at_nested_block(&self) -> bool {
        self.tokens[self.pos..]
            .iter()
            .find(|t| t.kind != SyntaxKind::BLANK_LINE_START && !t.kind.is_trivia())
            .is_some_and(|t| t.kind == SyntaxKind::INDENT)
    }

    // =========================================================================
    // Token consumption
    // =========================================================================

    fn bump(&mut self) {
        if let Some(token) = self.current() {
            if !token.kind.is_structural() {
                self.builder.token(token.kind.into(), token.text);
            }
            self.pos += 1;
        }
    }

    fn eat(&mut self, kind: SyntaxKind) -> bool {
        if self.at(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn eat_while(&mut self, kinds: &[SyntaxKind]) {
        while self.at_any(kinds) {
            self.bump();
        }
    }

    /// Consume whole blank lines, keeping their whitespace and newlines.
    fn eat_blank_lines(&mut self) {
        while self.at_blank_line() {
            self.bump();
            self.eat(SyntaxKind::WHITESPACE);
            self.eat(SyntaxKind::NEWLINE);
        }
    }

    // =========================================================================
    // Error handling
    // =========================================================================

    fn error(&mut self, message: impl Into<String>, range: TextRange) {
        self.errors.push(SyntaxError::new(message, range));
    }

    /// A zero-width ERROR node marking something missing.
    fn error_missing(&mut self, message: impl Into<String>) {
        let at = self.offset();
        self.error(message, TextRange::empty(at));
        self.start_node(SyntaxKind::ERROR);
        self.finish_node();
    }

    /// Wrap the rest of the line in an ERROR node. Trailing whitespace is
    /// left outside so the node covers only the offending text.
    fn error_until_line_end(&mut self, message: impl Into<String>) {
        let mut end = self.pos;
        let mut content_end = self.pos;
        while end < self.tokens.len() {
            let kind = self.tokens[end].kind;
            if kind == SyntaxKind::NEWLINE || kind.is_structural() {
                break;
            }
            end += 1;
            if kind != SyntaxKind::WHITESPACE {
                content_end = end;
            }
        }
        if content_end == self.pos {
            self.eat_while(&[SyntaxKind::WHITESPACE]);
            return;
        }

        let start = self.offset();
        self.start_node(SyntaxKind::ERROR);
        while self.pos < content_end {
            self.bump();
        }
        self.finish_node();
        let range = TextRange::new(start, self.offset());
        self.error(message, range);
        self.eat_while(&[SyntaxKind::WHITESPACE]);
    }

    /// Whitespace, then anything left on the line as an error, then the newline.
    fn finish_line(&mut self, message: &str) {
        self.eat(SyntaxKind::WHITESPACE);
        if !self.at_line_end() {
            self.error_until_line_end(message);
        }
        self.eat(SyntaxKind::NEWLINE);
    }

    // =========================================================================
    // Node building helpers
    // =========================================================================

    fn start_node(&mut self, kind: SyntaxKind) {
        self.builder.start_node(kind.into());
    }

    fn start_node_at(&mut self, checkpoint: Checkpoint, kind: SyntaxKind) {
        self.builder.start_node_at(checkpoint, kind.into());
    }

    fn finish_node(&mut self) {
        self.builder.finish_node();
    }

    // =========================================================================
    // Document
    // =========================================================================

    /// Document := (Label | Comment)*
    ///
    /// Indentation at the top level carries no structure, so INDENT and
    /// DEDENT between items are dropped and indented labels are parsed in
    /// place (the linter reports their leading whitespace).
    fn parse_document(&mut self) {
        self.start_node(SyntaxKind::DOCUMENT);
        let mut checkpoint = self.builder.checkpoint();
        let mut item_start = self.offset();
        loop {
            self.eat_blank_lines();
            match self.current_kind() {
                None => {
                    // Blank lines with no item after them.
                    if self.offset() > item_start {
                        self.start_node_at(checkpoint, SyntaxKind::COMMENT);
                        self.finish_node();
                    }
                    break;
                }
                Some(SyntaxKind::INDENT | SyntaxKind::DEDENT) => {
                    self.bump();
                    continue;
                }
                Some(SyntaxKind::BLANK_LINE_START) => self.parse_comment(Some(checkpoint)),
                Some(_) if self.at_label_line() => self.parse_label(checkpoint),
                Some(_) => self.parse_error_line(checkpoint),
            }
            checkpoint = self.builder.checkpoint();
            item_start = self.offset();
        }
        self.finish_node();
    }

    fn at_label_line(&self) -> bool {
        let n = usize::from(self.at(SyntaxKind::WHITESPACE));
        self.nth(n) == Some(SyntaxKind::WORD)
    }

    /// Comment := WHITESPACE? LINE_COMMENT NEWLINE?
    ///
    /// At the top level (`checkpoint` given) the comment also takes the
    /// blank lines after it.
    fn parse_comment(&mut self, checkpoint: Option<Checkpoint>) {
        let top_level = checkpoint.is_some();
        match checkpoint {
            Some(checkpoint) => self.start_node_at(checkpoint, SyntaxKind::COMMENT),
            None => self.start_node(SyntaxKind::COMMENT),
        }
        self.eat(SyntaxKind::BLANK_LINE_START);
        self.eat(SyntaxKind::WHITESPACE);
        self.eat(SyntaxKind::LINE_COMMENT);
        self.eat(SyntaxKind::NEWLINE);
        if top_level {
            self.eat_blank_lines();
        }
        self.finish_node();
    }

    /// A top-level line that is neither a label nor a comment.
    fn parse_error_line(&mut self, checkpoint: Checkpoint) {
        let start = self.offset();
        self.start_node_at(checkpoint, SyntaxKind::ERROR);
        let mut content_end = start;
        while !self.at_line_end() {
            if let Some(token) = self.current() {
                if token.kind != SyntaxKind::WHITESPACE {
                    content_end = token.range().end();
                }
            }
            self.bump();
        }
        self.eat(SyntaxKind::NEWLINE);
        self.eat_blank_lines();
        self.finish_node();

        let first = start + TextSize::of(self.leading_ws(start));
        let range = TextRange::new(first.min(content_end), content_end);
        self.error("expected a label or a comment", range);
    }

    fn leading_ws(&self, at: TextSize) -> &'a str {
        let rest = &self.input[usize::from(at)..];
        let len = rest.len() - rest.trim_start_matches([' ', '\t']).len();
        &rest[..len]
    }

    // =========================================================================
    // Labels
    // =========================================================================

    /// Label := LabelIdentifier ":" NEWLINE ConversationState?
    fn parse_label(&mut self, checkpoint: Checkpoint) {
        self.start_node_at(checkpoint, SyntaxKind::LABEL);
        self.eat(SyntaxKind::WHITESPACE);

        self.start_node(SyntaxKind::LABEL_IDENTIFIER);
        self.eat_while(&[SyntaxKind::WORD, SyntaxKind::DASH]);
        self.finish_node();

        // "Name :" keeps its colon; the linter flags the gap on its own.
        if self.at(SyntaxKind::WHITESPACE) && self.nth(1) == Some(SyntaxKind::COLON) {
            self.bump();
        }
        self.eat(SyntaxKind::COLON);
        self.finish_line("unexpected text after label");

        if !self.parse_nested_block() {
            self.eat_blank_lines();
        }
        self.finish_node();
    }

    // =========================================================================
    // Conversation states
    // =========================================================================

    /// Parses the block of deeper-indented lines following the current
    /// line, if there is one. Comments and blank lines before the block's
    /// first line belong to the block.
    fn parse_nested_block(&mut self) -> bool {
        if !self.at_nested_block() {
            return false;
        }
        self.start_node(SyntaxKind::CONVERSATION_STATE);
        while !self.at(SyntaxKind::INDENT) {
            if self.at_comment_line() {
                self.parse_comment(None);
            } else {
                self.bump();
            }
        }
        self.bump();
        self.parse_block_items();
        self.finish_node();
        true
    }

    /// ConversationState := (NpcStatement | UserReply | Comment)*
    ///
    /// Runs until the DEDENT closing the block. A DEDENT directly followed
    /// by INDENT lands between two levels; the block carries on.
    fn parse_block_items(&mut self) {
        loop {
            match self.current_kind() {
                None => break,
                Some(SyntaxKind::DEDENT) => {
                    self.bump();
                    if self.at(SyntaxKind::INDENT) {
                        self.bump();
                        continue;
                    }
                    break;
                }
                Some(SyntaxKind::INDENT) => {
                    // Deeper lines with nothing to hang under.
                    let start = self.offset();
                    self.start_node(SyntaxKind::ERROR);
                    self.bump();
                    self.parse_block_items();
                    self.finish_node();
                    self.error("unexpected indentation", TextRange::new(start, self.offset()));
                }
                Some(SyntaxKind::BLANK_LINE_START) => {
                    if self.at_comment_line() {
                        self.parse_comment(None);
                    } else {
                        self.eat_blank_lines();
                    }
                }
                Some(SyntaxKind::WHITESPACE) => self.bump(),
                Some(_) => self.parse_dialogue_line(),
            }
        }
    }

    // =========================================================================
    // Statements and replies
    // =========================================================================

    /// NpcStatement := "- " Variations LabelLink? NEWLINE ConversationState?
    /// UserReply    := "- - " Variations LabelLink? NEWLINE ConversationState?
    ///
    /// Any content line in a block is one of the two: the number of dashes
    /// in the leading run of dashes and blanks decides which. A malformed
    /// prefix is kept as is.
    fn parse_dialogue_line(&mut self) {
        let dashes = self.tokens[self.pos..]
            .iter()
            .take_while(|t| matches!(t.kind, SyntaxKind::DASH | SyntaxKind::WHITESPACE))
            .filter(|t| t.kind == SyntaxKind::DASH)
            .count();
        let (kind, prefix) = if dashes >= 2 {
            (SyntaxKind::USER_REPLY, "- - ")
        } else {
            (SyntaxKind::NPC_STATEMENT, "- ")
        };

        self.start_node(kind);
        self.parse_prefix(prefix);
        self.parse_variations();
        if self.at_link_start() {
            self.parse_label_link();
        }
        self.finish_line("unexpected text after label link");
        self.parse_nested_block();
        self.finish_node();
    }

    /// Consumes the run of dashes and blanks, stopping early once exactly
    /// the expected prefix has been read so text like "- -_-" stays text.
    fn parse_prefix(&mut self, expected: &str) {
        let start = usize::from(self.offset());
        while self.at_any(&[SyntaxKind::DASH, SyntaxKind::WHITESPACE]) {
            self.bump();
            if &self.input[start..usize::from(self.offset())] == expected {
                break;
            }
        }
    }

    /// Variation ("/" Variation)*
    fn parse_variations(&mut self) {
        loop {
            self.eat(SyntaxKind::WHITESPACE);
            if self.at_line_end() || self.at(SyntaxKind::SLASH) || self.at_link_start() {
                self.error_missing("expected text");
            } else {
                self.parse_variation();
            }
            if !self.eat(SyntaxKind::SLASH) {
                break;
            }
        }
    }

    /// Text up to the next `/`, the link, or the end of the line, without
    /// surrounding whitespace.
    fn parse_variation(&mut self) {
        self.start_node(SyntaxKind::VARIATION);
        while !self.at_line_end() && !self.at(SyntaxKind::SLASH) {
            if self.at(SyntaxKind::WHITESPACE) {
                let next = self.nth(1);
                let ends = match next {
                    None => true,
                    Some(SyntaxKind::SLASH | SyntaxKind::HASH | SyntaxKind::NEWLINE) => true,
                    Some(kind) => kind.is_structural(),
                };
                if ends {
                    break;
                }
            }
            self.bump();
        }
        self.finish_node();
        self.eat(SyntaxKind::WHITESPACE);
    }

    /// LabelLink := "#" WHITESPACE? LabelLinkIdentifier
    fn parse_label_link(&mut self) {
        self.start_node(SyntaxKind::LABEL_LINK);
        self.bump();
        self.eat(SyntaxKind::WHITESPACE);
        if self.at_any(&[SyntaxKind::WORD, SyntaxKind::DASH]) {
            self.start_node(SyntaxKind::LABEL_LINK_IDENTIFIER);
            self.eat_while(&[SyntaxKind::WORD, SyntaxKind::DASH]);
            self.finish_node();
        } else {
            self.error_missing("expected a label name");
        }
        self.finish_node();
    }
}
