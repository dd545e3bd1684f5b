//! Single stack entry of an error's call stack.

use crate::types::alloc_type::String;
use core::fmt::{self, Display};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One call-site entry in an error's stack, from the throw site outward.
///
/// A frame carries a class/method pair identifying the call site, an optional
/// source file and a line number. A missing file or a negative line number
/// marks the frame as synthetic (reflection, proxies, native code) and
/// excludes it from signature hashing.
///
/// # Examples
///
/// ```
/// use stack_signature::CallFrame;
///
/// let frame = CallFrame::new("com.xyz.MyClient", "getTheThings", "MyApp.java", 26);
/// assert!(frame.is_hashable());
/// assert_eq!(frame.to_string(), "com.xyz.MyClient.getTheThings(MyApp.java:26)");
///
/// let synthetic = CallFrame::synthetic("sun.reflect.NativeMethodAccessorImpl", "invoke0");
/// assert!(!synthetic.is_hashable());
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CallFrame {
    pub class_name: String,
    pub method_name: String,
    pub file_name: Option<String>,
    pub line_number: i32,
}

impl CallFrame {
    /// Creates a source-backed frame.
    #[inline]
    pub fn new(
        class_name: impl Into<String>,
        method_name: impl Into<String>,
        file_name: impl Into<String>,
        line_number: i32,
    ) -> Self {
        Self {
            class_name: class_name.into(),
            method_name: method_name.into(),
            file_name: Some(file_name.into()),
            line_number,
        }
    }

    /// Creates a synthetic frame with no source file and a negative line
    /// number, so it never participates in hashing.
    #[inline]
    pub fn synthetic(class_name: impl Into<String>, method_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            method_name: method_name.into(),
            file_name: None,
            line_number: -1,
        }
    }

    /// Whether this frame participates in signature hashing.
    ///
    /// Frames without a source file or with a negative line number are
    /// considered non-deterministic noise across runs and environments
    /// and are skipped by the hasher.
    #[inline]
    pub fn is_hashable(&self) -> bool {
        self.file_name.is_some() && self.line_number >= 0
    }
}

impl Display for CallFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.class_name, self.method_name)?;
        if self.line_number < 0 {
            f.write_str("(Native Method)")
        } else {
            match &self.file_name {
                Some(file) => write!(f, "({}:{})", file, self.line_number),
                None => f.write_str("(Unknown Source)"),
            }
        }
    }
}
