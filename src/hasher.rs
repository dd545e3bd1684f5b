//! Signature hashing over an error's cause chain.
//!
//! Each primary-chain level gets a 32-bit hash that folds together the
//! recursively computed hash of its cause, the level's type identity, and
//! every source-backed call frame (class, method, line; file name is
//! deliberately excluded). Two occurrences of the same error at the same
//! throw site through the same call path therefore hash identically, no
//! matter how messages, timestamps or thread identities differ.
//!
//! This is a fast, stable fingerprint, not a cryptographic digest;
//! collisions are tolerated by design.
//!
//! # Examples
//!
//! ```
//! use stack_signature::{frame, hex_hash, hex_hashes, ErrorChain, ErrorFrame};
//!
//! let chain = ErrorChain::new(
//!     ErrorFrame::new("com.xyz.MyClientException")
//!         .with_message("error getting the things")
//!         .with_frame(frame!("com.xyz.MyClient", "getTheThings", "MyApp.java", 26))
//!         .with_frame(frame!("sun.reflect.NativeMethodAccessorImpl", "invoke0")),
//! )
//! .caused_by(
//!     ErrorFrame::new("java.net.SocketTimeoutException")
//!         .with_message("read timed out")
//!         .with_frame(frame!("com.xyz.HttpStack", "get", "MyApp.java", 38)),
//! );
//!
//! let hashes = hex_hashes(&chain).unwrap();
//! assert_eq!(hashes.len(), 2);
//! assert_eq!(hex_hash(&chain).unwrap(), hashes.peek().unwrap());
//! ```

use crate::types::alloc_type::{String, Vec, VecIntoIter};
use crate::types::{CallFrame, ErrorChain, ErrorFrame, SignatureSequence};
use core::fmt::{self, Display, Write};
use core::iter::Zip;

/// Error conditions of the hashing operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum SignatureError {
    /// The chain holds no error at all. Call sites are expected to invoke
    /// the hasher only when an error is present, so this fails fast instead
    /// of returning an empty sequence.
    EmptyChain,
}

impl Display for SignatureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignatureError::EmptyChain => f.write_str("cannot hash an empty error chain"),
        }
    }
}

impl core::error::Error for SignatureError {}

/// Computes the signature sequence for the whole chain, one 8-character
/// uppercase hexadecimal hash per primary level, outermost error first.
///
/// The computation runs innermost-first (each level's hash seeds its
/// wrapping level) but the returned sequence is ordered for consumption
/// from the outermost end. Cyclic or dangling cause links terminate the
/// chain defensively and never fail; only an empty chain is an error.
pub fn hex_hashes(chain: &ErrorChain) -> Result<SignatureSequence, SignatureError> {
    let levels = primary_levels_checked(chain)?;
    let mut hashes = SignatureSequence::with_capacity(levels.len());
    let mut hash: i32 = 0;
    for frame in levels.iter().rev() {
        hash = level_hash(hash, frame);
        hashes.push_front(hex_render(hash));
    }
    Ok(hashes)
}

/// Computes only the outermost error's signature.
///
/// Equivalent to the front of [`hex_hashes`] without materializing the
/// full sequence, for callers that need one summary hash per log event.
pub fn hex_hash(chain: &ErrorChain) -> Result<String, SignatureError> {
    let levels = primary_levels_checked(chain)?;
    let mut hash: i32 = 0;
    for frame in levels.iter().rev() {
        hash = level_hash(hash, frame);
    }
    Ok(hex_render(hash))
}

/// Pairs each primary-chain level with its signature explicitly,
/// outermost first.
///
/// This avoids the lockstep coupling of two independent traversals: a
/// consumer formatting the chain gets the frame and its hash together
/// instead of popping from a separate sequence.
///
/// # Examples
///
/// ```
/// use stack_signature::{frame, hashed_levels, ErrorChain, ErrorFrame};
///
/// let chain = ErrorChain::new(ErrorFrame::new("A"))
///     .caused_by(ErrorFrame::new("B"));
///
/// let types: Vec<&str> = hashed_levels(&chain)
///     .unwrap()
///     .map(|(frame, _hash)| frame.type_identity())
///     .collect();
/// assert_eq!(types, ["A", "B"]);
/// ```
pub fn hashed_levels(chain: &ErrorChain) -> Result<HashedLevels<'_>, SignatureError> {
    let levels = primary_levels_checked(chain)?;
    let mut hexes = Vec::with_capacity(levels.len());
    let mut hash: i32 = 0;
    for frame in levels.iter().rev() {
        hash = level_hash(hash, frame);
        hexes.push(hex_render(hash));
    }
    hexes.reverse();
    Ok(HashedLevels {
        inner: levels.into_iter().zip(hexes),
    })
}

/// Iterator yielding `(&ErrorFrame, hex hash)` pairs, outermost first.
///
/// Created by [`hashed_levels`].
#[derive(Debug)]
pub struct HashedLevels<'a> {
    inner: Zip<VecIntoIter<&'a ErrorFrame>, VecIntoIter<String>>,
}

impl<'a> Iterator for HashedLevels<'a> {
    type Item = (&'a ErrorFrame, String);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for HashedLevels<'_> {}

fn primary_levels_checked(chain: &ErrorChain) -> Result<Vec<&ErrorFrame>, SignatureError> {
    let levels: Vec<&ErrorFrame> = chain.primary_levels().collect();
    if levels.is_empty() {
        return Err(SignatureError::EmptyChain);
    }
    Ok(levels)
}

/// Folds one chain level into the running hash: the cause's hash seeds the
/// accumulator, then the type identity, then every hashable call frame in
/// stack order.
fn level_hash(seed: i32, frame: &ErrorFrame) -> i32 {
    let mut hash = seed
        .wrapping_mul(31)
        .wrapping_add(stable_hash(frame.type_identity()));
    for call_frame in frame.call_frames().iter().filter(|f| f.is_hashable()) {
        hash = hash
            .wrapping_mul(31)
            .wrapping_add(call_frame_hash(call_frame));
    }
    hash
}

/// Hash of one call frame: class, method, line. The file name is excluded
/// on purpose so that moving a file without touching the code keeps the
/// signature stable.
fn call_frame_hash(frame: &CallFrame) -> i32 {
    let mut hash = stable_hash(&frame.class_name);
    hash = hash.wrapping_mul(31).wrapping_add(stable_hash(&frame.method_name));
    hash.wrapping_mul(31).wrapping_add(frame.line_number)
}

/// Deterministic polynomial string hash (multiplier 31, seed 0) over the
/// string's scalar values, with wrapping 32-bit arithmetic. Identical
/// across runs and processes for the same input; never derived from
/// object identity.
fn stable_hash(s: &str) -> i32 {
    let mut hash: i32 = 0;
    for ch in s.chars() {
        hash = hash.wrapping_mul(31).wrapping_add(ch as i32);
    }
    hash
}

/// Renders the low 32 bits of the signed hash as 8 uppercase hex digits,
/// zero-padded (two's-complement bit pattern, not the decimal value).
fn hex_render(hash: i32) -> String {
    let mut out = String::with_capacity(8);
    let _ = write!(out, "{:08X}", hash as u32);
    out
}
