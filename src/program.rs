//! Backend-independent bookkeeping around shader programs: which one is live,
//! and what the editors looked like when the page loaded.

use std::fmt;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ShaderStage::Vertex => "vertex",
            ShaderStage::Fragment => "fragment",
        })
    }
}

/// Vertex and fragment source, compiled verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ShaderSources {
    pub vertex: String,
    pub fragment: String,
}

impl ShaderSources {
    pub fn new(vertex: impl Into<String>, fragment: impl Into<String>) -> Self {
        Self {
            vertex: vertex.into(),
            fragment: fragment.into(),
        }
    }
}

/// Editor contents captured once at start-up, handed back untouched on reset no
/// matter what was typed since.
#[derive(Debug, Clone)]
pub struct EditorBaseline {
    initial: ShaderSources,
}

impl EditorBaseline {
    pub fn capture(current: &ShaderSources) -> Self {
        Self {
            initial: current.clone(),
        }
    }

    pub fn initial(&self) -> &ShaderSources {
        &self.initial
    }
}

/// Holder for the program a render loop draws with.
///
/// A frame grabs an `Rc` clone via [`ProgramSlot::current`] and drops it when the
/// frame ends, so a replacement never leaves a frame looking at a half-built
/// program. The old program is released once its last clone goes away.
#[derive(Debug)]
pub struct ProgramSlot<P> {
    current: Option<Rc<P>>,
    generation: u64,
}

impl<P> Default for ProgramSlot<P> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<P> ProgramSlot<P> {
    pub fn empty() -> Self {
        Self {
            current: None,
            generation: 0,
        }
    }

    pub fn current(&self) -> Option<Rc<P>> {
        self.current.clone()
    }

    pub fn is_ready(&self) -> bool {
        self.current.is_some()
    }

    /// Number of successful swaps so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Build a new program and swap it in. On error the slot is left as it was.
    /// Returns the program that was replaced, if any.
    pub fn replace_with<E>(
        &mut self,
        build: impl FnOnce() -> Result<P, E>,
    ) -> Result<Option<Rc<P>>, E> {
        let next = Rc::new(build()?);
        self.generation += 1;
        Ok(self.current.replace(next))
    }
}
