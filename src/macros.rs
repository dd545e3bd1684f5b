/// Builds a [`CallFrame`](crate::CallFrame).
///
/// The four-argument form builds a source-backed frame; the two-argument
/// form builds a synthetic frame (no file, negative line) that the hasher
/// skips.
///
/// # Examples
///
/// ```
/// use stack_signature::frame;
///
/// let real = frame!("com.xyz.App", "run", "App.java", 12);
/// assert!(real.is_hashable());
///
/// let synthetic = frame!("java.lang.reflect.Method", "invoke");
/// assert!(!synthetic.is_hashable());
/// ```
#[macro_export]
macro_rules! frame {
    ($class:expr, $method:expr) => {
        $crate::types::CallFrame::synthetic($class, $method)
    };
    ($class:expr, $method:expr, $file:expr, $line:expr) => {
        $crate::types::CallFrame::new($class, $method, $file, $line)
    };
}
