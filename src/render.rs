//! Reference trace renderer consuming signature sequences.
//!
//! Walks the chain in the same order the hasher produced it: each primary
//! level pops exactly one hash off the front of the sequence and prepends it
//! to that level's header line as `#<hash>> `. Suppressed branches are
//! rendered recursively but never consume a hash, and an exhausted sequence
//! only omits the prefix, it never fails.
//!
//! # Examples
//!
//! ```
//! use stack_signature::{frame, render_trace, ErrorChain, ErrorFrame, RenderConfig};
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
//! let trace = render_trace(&chain, &RenderConfig::default()).unwrap();
//! assert!(trace.starts_with("#"));
//! assert!(trace.contains("Caused by: #"));
//! ```

use crate::hasher::{hex_hash, hex_hashes, SignatureError};
use crate::types::alloc_type::String;
use crate::types::{CallFrame, ErrorChain, ErrorFrame, SignatureSequence};
use core::fmt::Write;

const CAUSED_BY: &str = "Caused by: ";
const SUPPRESSED: &str = "Suppressed: ";

/// Nesting bound for suppressed sub-chains, so adversarial arenas cannot
/// recurse without limit.
const MAX_BRANCH_DEPTH: usize = 32;

/// Rendering options, including the pass-through default string emitted
/// when a log event carries no error at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Rendered by [`signature_or_default`] when no error is present.
    pub default_value: String,
    /// One indentation step for stack lines and nested branches.
    pub indent: String,
    /// Upper bound on rendered stack lines per level; `None` renders all.
    pub max_frames: Option<usize>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            default_value: String::new(),
            indent: "  ".into(),
            max_frames: None,
        }
    }
}

impl RenderConfig {
    /// Preset that keeps traces short: at most five stack lines per level.
    #[inline]
    pub fn compact() -> Self {
        Self {
            max_frames: Some(5),
            ..Self::default()
        }
    }
}

/// Hashes the chain and renders the full trace with per-level signature
/// prefixes. Fails only when the chain is empty.
pub fn render_trace(chain: &ErrorChain, config: &RenderConfig) -> Result<String, SignatureError> {
    let hashes = hex_hashes(chain)?;
    Ok(render_trace_with(chain, hashes, config))
}

/// Renders the trace consuming a caller-supplied signature sequence.
///
/// One hash is popped per primary level; once the sequence runs dry the
/// remaining levels render without the `#<hash>> ` prefix.
pub fn render_trace_with(
    chain: &ErrorChain,
    mut hashes: SignatureSequence,
    config: &RenderConfig,
) -> String {
    let mut out = String::new();
    let mut enclosing: Option<&ErrorFrame> = None;
    for id in chain.primary_ids() {
        let Some(frame) = chain.get(id) else { break };
        let label = enclosing.is_some().then_some(CAUSED_BY);
        let hash = hashes.pop();
        append_level(&mut out, frame, enclosing, label, hash.as_deref(), 0, config);
        for &suppressed in frame.suppressed() {
            append_branch(&mut out, chain, suppressed, Some(frame), 1, 0, config);
        }
        enclosing = Some(frame);
    }
    out
}

/// Single-hash form with the configured fallback: the outermost signature
/// when an error is present, `config.default_value` otherwise.
pub fn signature_or_default(chain: Option<&ErrorChain>, config: &RenderConfig) -> String {
    match chain {
        Some(chain) => hex_hash(chain).unwrap_or_else(|_| config.default_value.clone()),
        None => config.default_value.clone(),
    }
}

/// Renders a suppressed sub-chain. Its levels never pop a hash, including
/// any nested causes and further suppressed branches.
fn append_branch(
    out: &mut String,
    chain: &ErrorChain,
    start: usize,
    parent: Option<&ErrorFrame>,
    indent: usize,
    depth: usize,
    config: &RenderConfig,
) {
    if depth >= MAX_BRANCH_DEPTH {
        return;
    }
    let mut enclosing = parent;
    let mut first = true;
    for id in chain.primary_ids_from(start) {
        let Some(frame) = chain.get(id) else { break };
        let label = if first { SUPPRESSED } else { CAUSED_BY };
        append_level(out, frame, enclosing, Some(label), None, indent, config);
        for &suppressed in frame.suppressed() {
            append_branch(out, chain, suppressed, Some(frame), indent + 1, depth + 1, config);
        }
        enclosing = Some(frame);
        first = false;
    }
}

fn append_level(
    out: &mut String,
    frame: &ErrorFrame,
    enclosing: Option<&ErrorFrame>,
    label: Option<&str>,
    hash: Option<&str>,
    indent: usize,
    config: &RenderConfig,
) {
    push_indent(out, indent, config);
    if let Some(label) = label {
        out.push_str(label);
    }
    if let Some(hash) = hash {
        let _ = write!(out, "#{}> ", hash);
    }
    let _ = writeln!(out, "{}", frame);
    append_stack_lines(out, frame, enclosing, indent, config);
}

fn append_stack_lines(
    out: &mut String,
    frame: &ErrorFrame,
    enclosing: Option<&ErrorFrame>,
    indent: usize,
    config: &RenderConfig,
) {
    let frames = frame.call_frames();
    let common = enclosing.map_or(0, |e| common_frame_count(frames, e.call_frames()));
    let mut shown = frames.len() - common;
    let mut truncated = 0;
    if let Some(max) = config.max_frames {
        if shown > max {
            truncated = shown - max;
            shown = max;
        }
    }
    for call_frame in &frames[..shown] {
        push_indent(out, indent + 1, config);
        let _ = writeln!(out, "at {}", call_frame);
    }
    if truncated > 0 {
        push_indent(out, indent + 1, config);
        let _ = writeln!(out, "... {} more", truncated);
    }
    if common > 0 {
        push_indent(out, indent + 1, config);
        let _ = writeln!(out, "... {} common frames omitted", common);
    }
}

/// Trailing frames a nested level shares with its wrapping level; those
/// lines are elided as "common frames omitted".
fn common_frame_count(frames: &[CallFrame], enclosing: &[CallFrame]) -> usize {
    frames
        .iter()
        .rev()
        .zip(enclosing.iter().rev())
        .take_while(|(a, b)| a == b)
        .count()
}

fn push_indent(out: &mut String, indent: usize, config: &RenderConfig) {
    for _ in 0..indent {
        out.push_str(&config.indent);
    }
}
