//! Arena-backed error chain: one record per throwable, index back-references
//! for causes.

use crate::types::alloc_type::{String, Vec};
use crate::types::{CallFrame, FrameVec};
use core::fmt::{self, Display};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Index of an [`ErrorFrame`] inside its [`ErrorChain`] arena.
pub type FrameId = usize;

/// One throwable in an error chain: a type identity, an optional message,
/// its call stack, and index references to its cause and suppressed entries.
///
/// Frames never own each other; the arena owns all of them and links are
/// plain indices, so ownership cycles cannot occur even for cyclic input.
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorFrame {
    pub(crate) type_identity: String,
    pub(crate) message: Option<String>,
    pub(crate) frames: FrameVec,
    pub(crate) cause: Option<FrameId>,
    pub(crate) suppressed: SmallVec<[FrameId; 2]>,
}

impl ErrorFrame {
    /// Creates a frame for the given fully qualified type name, with no
    /// message, no call frames and no cause.
    #[inline]
    pub fn new(type_identity: impl Into<String>) -> Self {
        Self {
            type_identity: type_identity.into(),
            message: None,
            frames: FrameVec::new(),
            cause: None,
            suppressed: SmallVec::new(),
        }
    }

    /// Attaches the human-readable message. Messages are rendered but never
    /// hashed.
    #[inline]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Appends one call frame, throw site first.
    #[inline]
    pub fn with_frame(mut self, frame: CallFrame) -> Self {
        self.frames.push(frame);
        self
    }

    /// Appends call frames in order, throw site first.
    #[inline]
    pub fn with_frames<I>(mut self, frames: I) -> Self
    where
        I: IntoIterator<Item = CallFrame>,
    {
        self.frames.extend(frames);
        self
    }

    /// Fully qualified type name of the throwable.
    #[inline]
    pub fn type_identity(&self) -> &str {
        &self.type_identity
    }

    /// Optional human-readable message.
    #[inline]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Call frames in order, throw site (index 0) outward.
    #[inline]
    pub fn call_frames(&self) -> &[CallFrame] {
        &self.frames
    }

    /// Arena index of this frame's cause, if any.
    #[inline]
    pub fn cause(&self) -> Option<FrameId> {
        self.cause
    }

    /// Arena indices of suppressed entries attached to this frame.
    ///
    /// Suppressed entries are a rendering concept only; they never
    /// participate in hashing.
    #[inline]
    pub fn suppressed(&self) -> &[FrameId] {
        &self.suppressed
    }
}

impl Display for ErrorFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.type_identity)?;
        if let Some(message) = &self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}

/// A chain of [`ErrorFrame`]s, outermost error first.
///
/// The frame at index 0 is the root of the primary chain (the top-level
/// thrown error); every other frame is reachable from it through `cause`
/// or `suppressed` links. The fluent [`caused_by`](ErrorChain::caused_by)
/// builder covers the common linear chain; [`push`](ErrorChain::push),
/// [`set_cause`](ErrorChain::set_cause) and
/// [`add_suppressed`](ErrorChain::add_suppressed) allow arbitrary shapes,
/// including deliberately cyclic ones.
///
/// # Examples
///
/// ```
/// use stack_signature::{frame, ErrorChain, ErrorFrame};
///
/// let chain = ErrorChain::new(
///     ErrorFrame::new("com.xyz.MyClientException")
///         .with_message("error getting the things")
///         .with_frame(frame!("com.xyz.MyClient", "getTheThings", "MyApp.java", 26)),
/// )
/// .caused_by(
///     ErrorFrame::new("java.net.SocketTimeoutException")
///         .with_message("read timed out")
///         .with_frame(frame!("com.xyz.HttpStack", "get", "MyApp.java", 38)),
/// );
///
/// assert_eq!(chain.depth(), 2);
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ErrorChain {
    pub(crate) frames: Vec<ErrorFrame>,
}

impl ErrorChain {
    /// Creates a chain with the given outermost error as its root.
    #[inline]
    pub fn new(root: ErrorFrame) -> Self {
        let mut frames = Vec::with_capacity(2);
        frames.push(root);
        Self { frames }
    }

    /// Appends `frame` as the cause of the current innermost primary level
    /// and returns the chain.
    ///
    /// On an empty chain the frame simply becomes the root.
    pub fn caused_by(mut self, frame: ErrorFrame) -> Self {
        let tail = self.primary_ids().last().copied();
        let id = self.push(frame);
        if let Some(tail) = tail {
            self.frames[tail].cause = Some(id);
        }
        self
    }

    /// Adds a frame to the arena without linking it, returning its id.
    #[inline]
    pub fn push(&mut self, frame: ErrorFrame) -> FrameId {
        let id = self.frames.len();
        self.frames.push(frame);
        id
    }

    /// Links `cause` as the cause of `frame`. Out-of-range `frame` ids are
    /// ignored; `cause` may point anywhere, including at `frame` itself
    /// (the traversal guards against cycles).
    #[inline]
    pub fn set_cause(&mut self, frame: FrameId, cause: FrameId) {
        if let Some(f) = self.frames.get_mut(frame) {
            f.cause = Some(cause);
        }
    }

    /// Attaches `suppressed` as a suppressed entry of `frame`.
    #[inline]
    pub fn add_suppressed(&mut self, frame: FrameId, suppressed: FrameId) {
        if let Some(f) = self.frames.get_mut(frame) {
            f.suppressed.push(suppressed);
        }
    }

    /// Returns the frame at `id`, if it exists.
    #[inline]
    pub fn get(&self, id: FrameId) -> Option<&ErrorFrame> {
        self.frames.get(id)
    }

    /// Returns the outermost error, if the chain is non-empty.
    #[inline]
    pub fn root(&self) -> Option<&ErrorFrame> {
        self.frames.first()
    }

    /// Total number of frames in the arena, suppressed entries included.
    #[inline]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether the arena holds no frames at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Number of primary-chain levels (root plus each reachable cause).
    #[inline]
    pub fn depth(&self) -> usize {
        self.primary_ids().len()
    }

    /// Iterates the primary chain, outermost error first.
    ///
    /// The walk follows `cause` links from the root and terminates
    /// defensively on self-referential causes, revisited frames and
    /// dangling indices. Suppressed entries are never yielded.
    #[inline]
    pub fn primary_levels(&self) -> PrimaryLevels<'_> {
        PrimaryLevels {
            chain: self,
            ids: self.primary_ids().into_iter(),
        }
    }

    /// Collects the primary-chain ids starting at the root.
    pub(crate) fn primary_ids(&self) -> Vec<FrameId> {
        self.primary_ids_from(0)
    }

    /// Collects the primary-chain ids starting at `start`, applying the
    /// cycle guard: a cause that points at its own frame, at an already
    /// visited frame, or outside the arena terminates the walk.
    pub(crate) fn primary_ids_from(&self, start: FrameId) -> Vec<FrameId> {
        let mut ids = Vec::new();
        let mut visited = Vec::new();
        visited.resize(self.frames.len(), false);

        let mut next = Some(start);
        while let Some(id) = next {
            let Some(frame) = self.frames.get(id) else {
                break;
            };
            if visited[id] {
                break;
            }
            visited[id] = true;
            ids.push(id);
            next = frame.cause.filter(|&cause| cause != id);
        }
        ids
    }
}

/// Iterator over the primary chain of an [`ErrorChain`], outermost first.
///
/// Created by [`ErrorChain::primary_levels`].
#[derive(Debug, Clone)]
pub struct PrimaryLevels<'a> {
    chain: &'a ErrorChain,
    ids: crate::types::alloc_type::VecIntoIter<FrameId>,
}

impl<'a> Iterator for PrimaryLevels<'a> {
    type Item = &'a ErrorFrame;

    fn next(&mut self) -> Option<Self::Item> {
        self.ids.next().and_then(|id| self.chain.frames.get(id))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.ids.size_hint()
    }
}

impl ExactSizeIterator for PrimaryLevels<'_> {}
