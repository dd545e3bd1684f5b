//! Convenience re-exports for common usage patterns.
//!
//! Import everything with:
//!
//! ```
//! use stack_signature::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`frame!`]
//! - **Types**: [`CallFrame`], [`ErrorChain`], [`ErrorFrame`],
//!   [`SignatureSequence`], [`RenderConfig`]
//! - **Operations**: [`hex_hash`], [`hex_hashes`], [`hashed_levels`],
//!   [`render_trace`], [`signature_or_default`]
//!
//! # Examples
//!
//! ```
//! use stack_signature::prelude::*;
//!
//! let chain = ErrorChain::new(
//!     ErrorFrame::new("com.xyz.AppError")
//!         .with_frame(frame!("com.xyz.App", "run", "App.java", 7)),
//! );
//!
//! let signature = hex_hash(&chain).unwrap();
//! assert_eq!(signature.len(), 8);
//! ```

pub use crate::frame;

pub use crate::hasher::{hashed_levels, hex_hash, hex_hashes, HashedLevels, SignatureError};
pub use crate::render::{
    render_trace, render_trace_with, signature_or_default, RenderConfig,
};
pub use crate::types::{
    CallFrame, ErrorChain, ErrorFrame, FrameId, FrameVec, SignatureSequence,
};
