//! Indentation contexts for the lexer.
//!
//! Contexts form a persistent linked list: every frame points at the frame
//! it was pushed on, and frames are never mutated. Together with the
//! [`IndentCache`] this means two lines with the same indentation history
//! are tokenized under the very same frame, wherever they occur in the
//! document and across reparses.

use std::hash::{Hash, Hasher};
use std::rc::Rc;

use rustc_hash::FxHashMap;

/// One level of the indentation stack.
#[derive(Debug)]
pub struct IndentContext {
    parent: Option<Rc<IndentContext>>,
    depth: u32,
    hash: u64,
}

impl IndentContext {
    fn new(parent: Option<Rc<IndentContext>>, depth: u32) -> Self {
        let hash = Self::combine(parent.as_deref(), depth);
        Self {
            parent,
            depth,
            hash,
        }
    }

    /// `(parent.hash + parent.hash) << 8 + depth + (depth << 4)`, wrapping.
    fn combine(parent: Option<&IndentContext>, depth: u32) -> u64 {
        let base = parent.map_or(0, |p| p.hash.wrapping_add(p.hash) << 8);
        let depth = u64::from(depth);
        base.wrapping_add(depth).wrapping_add(depth << 4)
    }

    /// Number of columns (spaces or tabs) this context is indented by.
    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn hash_value(&self) -> u64 {
        self.hash
    }

    pub fn parent(&self) -> Option<&Rc<IndentContext>> {
        self.parent.as_ref()
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// How many frames sit below this one.
    pub fn level(&self) -> usize {
        let mut level = 0;
        let mut current = self.parent.as_deref();
        while let Some(frame) = current {
            level += 1;
            current = frame.parent.as_deref();
        }
        level
    }

    /// Column depths from the root up to and including this frame.
    pub fn history(&self) -> Vec<u32> {
        let mut depths = vec![self.depth];
        let mut current = self.parent.as_deref();
        while let Some(frame) = current {
            depths.push(frame.depth);
            current = frame.parent.as_deref();
        }
        depths.reverse();
        depths
    }
}

impl PartialEq for IndentContext {
    fn eq(&self, other: &Self) -> bool {
        if std::ptr::eq(self, other) {
            return true;
        }
        self.hash == other.hash && self.depth == other.depth && self.parent == other.parent
    }
}

impl Eq for IndentContext {}

impl Hash for IndentContext {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.hash.hash(state);
    }
}

/// Interns indentation frames by hash.
///
/// Candidates sharing a hash are told apart by depth and by parent identity;
/// parents are interned too, so pointer equality on them is structural
/// equality.
#[derive(Debug)]
pub struct IndentCache {
    root: Rc<IndentContext>,
    frames: FxHashMap<u64, Vec<Rc<IndentContext>>>,
}

impl Default for IndentCache {
    fn default() -> Self {
        Self::new()
    }
}

impl IndentCache {
    pub fn new() -> Self {
        Self {
            root: Rc::new(IndentContext::new(None, 0)),
            frames: FxHashMap::default(),
        }
    }

    pub fn root(&self) -> &Rc<IndentContext> {
        &self.root
    }

    /// Returns the frame `{ parent, depth }`, creating it on first use.
    pub fn intern(&mut self, parent: &Rc<IndentContext>, depth: u32) -> Rc<IndentContext> {
        let hash = IndentContext::combine(Some(parent.as_ref()), depth);
        let bucket = self.frames.entry(hash).or_default();
        if let Some(frame) = bucket.iter().find(|frame| {
            frame.depth == depth && frame.parent.as_ref().is_some_and(|p| Rc::ptr_eq(p, parent))
        }) {
            return Rc::clone(frame);
        }

        let frame = Rc::new(IndentContext::new(Some(Rc::clone(parent)), depth));
        bucket.push(Rc::clone(&frame));
        frame
    }

    /// Number of interned frames, excluding the root.
    pub fn len(&self) -> usize {
        self.frames.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

/// The lexer's view of the indentation stack.
#[derive(Debug)]
pub struct IndentTracker {
    current: Rc<IndentContext>,
    cache: IndentCache,
}

impl Default for IndentTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl IndentTracker {
    pub fn new() -> Self {
        Self::with_cache(IndentCache::new())
    }

    pub fn with_cache(cache: IndentCache) -> Self {
        Self {
            current: Rc::clone(cache.root()),
            cache,
        }
    }

    pub fn current(&self) -> &Rc<IndentContext> {
        &self.current
    }

    pub fn depth(&self) -> u32 {
        self.current.depth
    }

    pub fn push(&mut self, depth: u32) {
        self.current = self.cache.intern(&self.current, depth);
    }

    /// Pops one frame. Returns `false` at the root.
    pub fn pop(&mut self) -> bool {
        match self.current.parent.clone() {
            Some(parent) => {
                self.current = parent;
                true
            }
            None => false,
        }
    }

    pub fn into_cache(self) -> IndentCache {
        self.cache
    }
}
