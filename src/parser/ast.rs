//! Typed AST wrappers over the untyped rowan CST.
//!
//! Each struct wraps a SyntaxNode and provides methods to access children.
//! The free functions at the bottom compute the layout annotations shared
//! by folding, the indentation linter and re-indent.

use smol_str::SmolStr;

use super::syntax_kind::SyntaxKind;
use super::{SyntaxNode, SyntaxToken};
use rowan::TextRange;

/// Trait for AST nodes that wrap a SyntaxNode
pub trait AstNode: Sized {
    fn can_cast(kind: SyntaxKind) -> bool;
    fn cast(node: SyntaxNode) -> Option<Self>;
    fn syntax(&self) -> &SyntaxNode;

    fn range(&self) -> TextRange {
        self.syntax().text_range()
    }

    /// Find all descendant nodes of a specific AST type
    fn descendants<T: AstNode>(&self) -> impl Iterator<Item = T> {
        self.syntax().descendants().filter_map(T::cast)
    }
}

// ============================================================================
// Helper macros
// ============================================================================

macro_rules! ast_node {
    ($name:ident, $kind:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(SyntaxNode);

        impl AstNode for $name {
            fn can_cast(kind: SyntaxKind) -> bool {
                kind == SyntaxKind::$kind
            }

            fn cast(node: SyntaxNode) -> Option<Self> {
                if Self::can_cast(node.kind()) {
                    Some(Self(node))
                } else {
                    None
                }
            }

            fn syntax(&self) -> &SyntaxNode {
                &self.0
            }
        }
    };
}

macro_rules! first_child_method {
    ($name:ident, $type:ident) => {
        #[doc = concat!("Get the first `", stringify!($type), "` child of this node.")]
        pub fn $name(&self) -> Option<$type> {
            self.0.children().find_map($type::cast)
        }
    };
}

macro_rules! children_method {
    ($name:ident, $type:ident) => {
        #[doc = concat!("Get all `", stringify!($type), "` children of this node.")]
        pub fn $name(&self) -> impl Iterator<Item = $type> + '_ {
            self.0.children().filter_map($type::cast)
        }
    };
}

fn first_token(node: &SyntaxNode, kind: SyntaxKind) -> Option<SyntaxToken> {
    node.children_with_tokens()
        .filter_map(|e| e.into_token())
        .find(|t| t.kind() == kind)
}

fn node_text(node: &SyntaxNode) -> SmolStr {
    SmolStr::from(node.text().to_string())
}

// ============================================================================
// Root
// ============================================================================

ast_node!(Document, DOCUMENT);

impl Document {
    /// Wraps the root of a parse; the parser always produces a DOCUMENT root.
    pub(crate) fn new(root: SyntaxNode) -> Self {
        debug_assert_eq!(root.kind(), SyntaxKind::DOCUMENT);
        Self(root)
    }

    children_method!(labels, Label);
    children_method!(comments, Comment);
    children_method!(items, Item);
}

/// Any top-level element of a document
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Item {
    Label(Label),
    Comment(Comment),
    Error(ErrorNode),
}

impl AstNode for Item {
    fn can_cast(kind: SyntaxKind) -> bool {
        matches!(
            kind,
            SyntaxKind::LABEL | SyntaxKind::COMMENT | SyntaxKind::ERROR
        )
    }

    fn cast(node: SyntaxNode) -> Option<Self> {
        match node.kind() {
            SyntaxKind::LABEL => Some(Self::Label(Label(node))),
            SyntaxKind::COMMENT => Some(Self::Comment(Comment(node))),
            SyntaxKind::ERROR => Some(Self::Error(ErrorNode(node))),
            _ => None,
        }
    }

    fn syntax(&self) -> &SyntaxNode {
        match self {
            Self::Label(n) => n.syntax(),
            Self::Comment(n) => n.syntax(),
            Self::Error(n) => n.syntax(),
        }
    }
}

// ============================================================================
// Labels
// ============================================================================

ast_node!(Label, LABEL);

impl Label {
    first_child_method!(identifier, LabelIdentifier);
    first_child_method!(body, ConversationState);

    pub fn name(&self) -> Option<SmolStr> {
        self.identifier().map(|ident| ident.name())
    }

    pub fn colon(&self) -> Option<SyntaxToken> {
        first_token(&self.0, SyntaxKind::COLON)
    }
}

ast_node!(LabelIdentifier, LABEL_IDENTIFIER);

impl LabelIdentifier {
    pub fn name(&self) -> SmolStr {
        node_text(&self.0)
    }

    pub fn label(&self) -> Option<Label> {
        self.0.parent().and_then(Label::cast)
    }
}

// ============================================================================
// Conversation states
// ============================================================================

ast_node!(ConversationState, CONVERSATION_STATE);

impl ConversationState {
    children_method!(lines, DialogueLine);
    children_method!(statements, NpcStatement);
    children_method!(replies, UserReply);
    children_method!(comments, Comment);

    /// The statement, reply or label this block hangs under
    pub fn owner(&self) -> Option<SyntaxNode> {
        self.0.parent()
    }

    pub fn has_lines(&self) -> bool {
        self.lines().next().is_some()
    }
}

// ============================================================================
// Statements and replies
// ============================================================================

ast_node!(NpcStatement, NPC_STATEMENT);
ast_node!(UserReply, USER_REPLY);

/// Either kind of dialogue line. Both share one shape: variations, an
/// optional link, an optional nested block.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DialogueLine {
    Statement(NpcStatement),
    Reply(UserReply),
}

impl AstNode for DialogueLine {
    fn can_cast(kind: SyntaxKind) -> bool {
        kind.is_dialogue_line()
    }

    fn cast(node: SyntaxNode) -> Option<Self> {
        match node.kind() {
            SyntaxKind::NPC_STATEMENT => Some(Self::Statement(NpcStatement(node))),
            SyntaxKind::USER_REPLY => Some(Self::Reply(UserReply(node))),
            _ => None,
        }
    }

    fn syntax(&self) -> &SyntaxNode {
        match self {
            Self::Statement(n) => n.syntax(),
            Self::Reply(n) => n.syntax(),
        }
    }
}

impl DialogueLine {
    pub fn is_reply(&self) -> bool {
        matches!(self, Self::Reply(_))
    }

    /// The literal every line of this kind must start with
    pub fn expected_prefix(&self) -> &'static str {
        match self {
            Self::Statement(_) => "- ",
            Self::Reply(_) => "- - ",
        }
    }

    pub fn variations(&self) -> impl Iterator<Item = Variation> + '_ {
        self.syntax().children().filter_map(Variation::cast)
    }

    pub fn link(&self) -> Option<LabelLink> {
        self.syntax().children().find_map(LabelLink::cast)
    }

    pub fn body(&self) -> Option<ConversationState> {
        self.syntax().children().find_map(ConversationState::cast)
    }
}

impl NpcStatement {
    children_method!(variations, Variation);
    first_child_method!(link, LabelLink);
    first_child_method!(body, ConversationState);
}

impl UserReply {
    children_method!(variations, Variation);
    first_child_method!(link, LabelLink);
    first_child_method!(body, ConversationState);
}

ast_node!(Variation, VARIATION);

impl Variation {
    pub fn text(&self) -> SmolStr {
        node_text(&self.0)
    }
}

// ============================================================================
// Label links
// ============================================================================

ast_node!(LabelLink, LABEL_LINK);

impl LabelLink {
    first_child_method!(identifier, LabelLinkIdentifier);

    pub fn name(&self) -> Option<SmolStr> {
        self.identifier().map(|ident| ident.name())
    }

    /// The statement or reply this link ends
    pub fn owner(&self) -> Option<DialogueLine> {
        self.0.parent().and_then(DialogueLine::cast)
    }
}

ast_node!(LabelLinkIdentifier, LABEL_LINK_IDENTIFIER);

impl LabelLinkIdentifier {
    pub fn name(&self) -> SmolStr {
        node_text(&self.0)
    }

    pub fn link(&self) -> Option<LabelLink> {
        self.0.parent().and_then(LabelLink::cast)
    }
}

// ============================================================================
// Comments and errors
// ============================================================================

ast_node!(Comment, COMMENT);

impl Comment {
    /// Comment text without the leading `#`
    pub fn text(&self) -> Option<SmolStr> {
        first_token(&self.0, SyntaxKind::LINE_COMMENT)
            .map(|t| SmolStr::from(t.text().trim_start_matches('#').trim()))
    }
}

ast_node!(ErrorNode, ERROR);

impl ErrorNode {
    /// Range of the offending text, without surrounding whitespace and
    /// newlines. Empty for zero-width markers of missing text.
    pub fn content_range(&self) -> TextRange {
        let mut tokens = self
            .0
            .descendants_with_tokens()
            .filter_map(|e| e.into_token())
            .filter(|t| !t.kind().is_trivia());
        match tokens.next() {
            Some(first) => {
                let last = tokens.last().unwrap_or_else(|| first.clone());
                TextRange::new(first.text_range().start(), last.text_range().end())
            }
            None => TextRange::empty(self.0.text_range().start()),
        }
    }
}

// ============================================================================
// Layout annotations
// ============================================================================

/// Foldable range of a node: from the end of its first child to the end
/// of its deepest last descendant, stepping back over trailing comments.
pub fn fold_range(node: &SyntaxNode) -> Option<TextRange> {
    let mut last = node.clone();
    while let Some(child) = last.last_child() {
        last = child;
        while last.kind() == SyntaxKind::COMMENT {
            match last.prev_sibling() {
                Some(prev) => last = prev,
                None => break,
            }
        }
    }
    let from = match node.first_child() {
        Some(first) => first.text_range().end(),
        None => node.text_range().start(),
    };
    let to = last.text_range().end();
    (from < to).then(|| TextRange::new(from, to))
}

/// Number of conversation states enclosing `node`.
pub fn nesting_depth(node: &SyntaxNode) -> usize {
    node.ancestors()
        .filter(|n| n.kind() == SyntaxKind::CONVERSATION_STATE)
        .count()
}

/// Indentation width expected for `node` given the document's unit.
pub fn expected_indent(node: &SyntaxNode, unit: usize) -> usize {
    unit * nesting_depth(node)
}
