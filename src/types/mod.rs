//! Data model for error chains and their signature sequences.
//!
//! An [`ErrorChain`] is an arena of [`ErrorFrame`] records linked by index
//! back-references; each frame carries its [`CallFrame`] stack. Hashing a
//! chain yields a [`SignatureSequence`] with one hexadecimal signature per
//! primary-chain level.
//!
//! # Examples
//!
//! ```
//! use stack_signature::{frame, ErrorChain, ErrorFrame};
//!
//! let chain = ErrorChain::new(
//!     ErrorFrame::new("com.xyz.AppError")
//!         .with_message("request failed")
//!         .with_frame(frame!("com.xyz.App", "handle", "App.java", 42)),
//! );
//!
//! assert_eq!(chain.depth(), 1);
//! assert_eq!(chain.root().unwrap().type_identity(), "com.xyz.AppError");
//! ```
use smallvec::SmallVec;

pub mod alloc_type;
pub mod call_frame;
pub mod error_chain;
pub mod signature;

pub use call_frame::*;
pub use error_chain::*;
pub use signature::*;

/// SmallVec-backed collection holding an error's call frames.
///
/// Uses inline storage for up to 8 frames, which covers most captured
/// stacks without a heap allocation.
pub type FrameVec = SmallVec<[CallFrame; 8]>;
