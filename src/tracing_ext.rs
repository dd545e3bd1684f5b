//! Tracing integration for stack-signature.
//!
//! Emits error events that carry the chain's signature as a `stack_hash`
//! field next to the rendered trace, so a log-aggregation backend can
//! group occurrences of the same fault without diffing stack traces.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! stack-signature = { version = "0.1", features = ["tracing"] }
//! ```

use crate::hasher::hex_hashes;
use crate::render::{render_trace_with, RenderConfig};
use crate::types::ErrorChain;

/// Emits a `tracing` error event for the chain with its outermost
/// signature attached as the `stack_hash` field.
///
/// An empty chain degrades to a plain event without the field; it never
/// panics at a log site.
pub fn emit_error(chain: &ErrorChain, message: &str) {
    emit_error_with(chain, message, &RenderConfig::default());
}

/// Like [`emit_error`] but with explicit rendering options.
pub fn emit_error_with(chain: &ErrorChain, message: &str, config: &RenderConfig) {
    match hex_hashes(chain) {
        Ok(hashes) => {
            let stack_hash = hashes.peek().unwrap_or_default().to_string();
            let trace = render_trace_with(chain, hashes, config);
            tracing::error!(stack_hash = %stack_hash, "{}\n{}", message, trace);
        }
        Err(_) => tracing::error!("{}", message),
    }
}
