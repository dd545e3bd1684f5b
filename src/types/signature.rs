//! The ordered sequence of per-level signature hashes.

use crate::types::alloc_type::{String, VecDeque, VecDequeIntoIter};

/// Ordered sequence of hexadecimal signature strings, one per primary-chain
/// level, outermost error first.
///
/// The sequence is produced once per hashing call and consumed destructively
/// from the front by a single renderer: each rendered primary level pops one
/// hash. Popping past the end yields `None`, never a panic, so a consumer
/// that visits more levels than were hashed simply renders without a prefix.
///
/// # Examples
///
/// ```
/// use stack_signature::{frame, hex_hashes, ErrorChain, ErrorFrame};
///
/// let chain = ErrorChain::new(
///     ErrorFrame::new("A").with_frame(frame!("A", "m1", "A.java", 10)),
/// )
/// .caused_by(ErrorFrame::new("B").with_frame(frame!("B", "m2", "B.java", 20)));
///
/// let mut hashes = hex_hashes(&chain).unwrap();
/// assert_eq!(hashes.len(), 2);
/// let outer = hashes.pop().unwrap();
/// let inner = hashes.pop().unwrap();
/// assert_ne!(outer, inner);
/// assert_eq!(hashes.pop(), None);
/// ```
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SignatureSequence {
    hashes: VecDeque<String>,
}

impl SignatureSequence {
    #[inline]
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            hashes: VecDeque::with_capacity(capacity),
        }
    }

    #[inline]
    pub(crate) fn push_front(&mut self, hash: String) {
        self.hashes.push_front(hash);
    }

    /// Removes and returns the outermost remaining hash.
    #[inline]
    pub fn pop(&mut self) -> Option<String> {
        self.hashes.pop_front()
    }

    /// Returns the outermost remaining hash without consuming it.
    #[inline]
    pub fn peek(&self) -> Option<&str> {
        self.hashes.front().map(String::as_str)
    }

    /// Number of hashes not yet consumed.
    #[inline]
    pub fn len(&self) -> usize {
        self.hashes.len()
    }

    /// Whether every hash has been consumed (or none was produced).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.hashes.is_empty()
    }

    /// Iterates the remaining hashes, outermost first, without consuming.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.hashes.iter().map(String::as_str)
    }
}

impl IntoIterator for SignatureSequence {
    type Item = String;
    type IntoIter = VecDequeIntoIter<String>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.hashes.into_iter()
    }
}
