//! Syntax kinds for the Rowan-based CST
//!
//! This enum defines all possible node and token kinds in a dialogue
//! syntax tree.

/// All syntax kinds (tokens and nodes) of the dialogue language
///
/// Tokens are leaf nodes (words, punctuation, whitespace).
/// Nodes are composite (labels, statements, replies).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
#[allow(non_camel_case_types)]
pub enum SyntaxKind {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    WHITESPACE = 0,
    NEWLINE,
    LINE_COMMENT, // # until end of line, only at line start

    // =========================================================================
    // CONTENT
    // =========================================================================
    DASH,  // -
    SLASH, // /
    HASH,  // #
    COLON, // :
    WORD,  // any run of other non-blank characters

    // =========================================================================
    // STRUCTURAL (zero width, produced by the lexer, never stored in the tree)
    // =========================================================================
    INDENT,
    DEDENT,
    BLANK_LINE_START,

    // =========================================================================
    // NODES
    // =========================================================================
    DOCUMENT,
    LABEL,
    LABEL_IDENTIFIER,
    CONVERSATION_STATE,
    NPC_STATEMENT,
    USER_REPLY,
    VARIATION,
    LABEL_LINK,
    LABEL_LINK_IDENTIFIER,
    COMMENT,
    ERROR,

    #[doc(hidden)]
    __LAST,
}

impl SyntaxKind {
    /// Check if this is a trivia token (whitespace, newline or comment)
    pub fn is_trivia(self) -> bool {
        matches!(self, Self::WHITESPACE | Self::NEWLINE | Self::LINE_COMMENT)
    }

    /// Check if this is a synthesized indentation marker
    pub fn is_structural(self) -> bool {
        matches!(self, Self::INDENT | Self::DEDENT | Self::BLANK_LINE_START)
    }

    /// Statement-like nodes: one line of dialogue plus its nested block
    pub fn is_dialogue_line(self) -> bool {
        matches!(self, Self::NPC_STATEMENT | Self::USER_REPLY)
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

impl From<rowan::SyntaxKind> for SyntaxKind {
    fn from(raw: rowan::SyntaxKind) -> Self {
        assert!(raw.0 < SyntaxKind::__LAST as u16);
        // Safety: we control all syntax kinds and check bounds above
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }
}

/// Language definition for Rowan
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DialogueLanguage {}

impl rowan::Language for DialogueLanguage {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        raw.into()
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

pub type SyntaxNode = rowan::SyntaxNode<DialogueLanguage>;
pub type SyntaxToken = rowan::SyntaxToken<DialogueLanguage>;
pub type SyntaxElement = rowan::SyntaxElement<DialogueLanguage>;
