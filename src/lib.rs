//! Stable signature hashes for error cause chains.
//!
//! Two occurrences of "the same" error (same throw site, same call path)
//! get the same short signature even though messages or timestamps differ,
//! so a log-aggregation backend can deduplicate, count and correlate faults
//! without diffing full stack traces. One 8-character uppercase hex hash is
//! produced per cause-chain level, outermost error first, and a reference
//! renderer prepends each one to its level's header line.
//!
//! # Examples
//!
//! ## Hashing a chain
//!
//! ```
//! use stack_signature::{frame, hex_hashes, ErrorChain, ErrorFrame};
//!
//! let chain = ErrorChain::new(
//!     ErrorFrame::new("com.xyz.MyClientException")
//!         .with_message("error getting the things")
//!         .with_frame(frame!("com.xyz.MyClient", "getTheThings", "MyApp.java", 26)),
//! )
//! .caused_by(
//!     ErrorFrame::new("java.net.SocketTimeoutException")
//!         .with_message("read timed out")
//!         .with_frame(frame!("com.xyz.HttpStack", "get", "MyApp.java", 38)),
//! );
//!
//! let mut hashes = hex_hashes(&chain).unwrap();
//! assert_eq!(hashes.len(), 2);
//!
//! let outer = hashes.pop().unwrap();
//! assert_eq!(outer.len(), 8);
//! assert!(outer.chars().all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c)));
//! ```
//!
//! ## Rendering with inline signatures
//!
//! ```
//! use stack_signature::{frame, render_trace, ErrorChain, ErrorFrame, RenderConfig};
//!
//! let chain = ErrorChain::new(
//!     ErrorFrame::new("com.xyz.AppError")
//!         .with_message("boom")
//!         .with_frame(frame!("com.xyz.App", "run", "App.java", 7)),
//! );
//!
//! let trace = render_trace(&chain, &RenderConfig::default()).unwrap();
//! assert!(trace.starts_with("#"));
//! assert!(trace.contains("com.xyz.AppError: boom"));
//! assert!(trace.contains("at com.xyz.App.run(App.java:7)"));
//! ```
//!
//! ## Signature with a fallback for events without an error
//!
//! ```
//! use stack_signature::{signature_or_default, RenderConfig};
//!
//! let config = RenderConfig {
//!     default_value: "-".into(),
//!     ..RenderConfig::default()
//! };
//! assert_eq!(signature_or_default(None, &config), "-");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Signature hashing over cause chains
pub mod hasher;
/// The `frame!` call-frame construction macro
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Reference trace renderer consuming signature sequences
pub mod render;
/// Error chain, call frame and signature sequence types
pub mod types;

/// Tracing integration (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

pub use hasher::{hashed_levels, hex_hash, hex_hashes, HashedLevels, SignatureError};
pub use render::{render_trace, render_trace_with, signature_or_default, RenderConfig};
pub use types::{
    CallFrame, ErrorChain, ErrorFrame, FrameId, FrameVec, PrimaryLevels, SignatureSequence,
};
