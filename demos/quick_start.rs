//! Build a cause chain, hash it, and print the trace with inline
//! signatures.
//!
//! Run with: `cargo run --example quick_start`

use stack_signature::{
    frame, hashed_levels, hex_hash, render_trace, ErrorChain, ErrorFrame, RenderConfig,
};

fn main() {
    let chain = ErrorChain::new(
        ErrorFrame::new("com.xyz.MyClientException")
            .with_message("an error occurred while getting the things")
            .with_frame(frame!("com.xyz.MyClient", "getTheThings", "MyApp.java", 26))
            .with_frame(frame!("com.xyz.MyApp", "test_logging", "MyApp.java", 16))
            .with_frame(frame!("sun.reflect.NativeMethodAccessorImpl", "invoke0")),
    )
    .caused_by(
        ErrorFrame::new("com.xyz.HttpError")
            .with_message("I/O error on GET request for http://dummy/things")
            .with_frame(frame!("com.xyz.HttpStack", "get", "MyApp.java", 40))
            .with_frame(frame!("com.xyz.MyClient", "getTheThings", "MyApp.java", 24)),
    )
    .caused_by(
        ErrorFrame::new("java.net.SocketTimeoutException")
            .with_message("read timed out")
            .with_frame(frame!("com.xyz.HttpStack", "get", "MyApp.java", 38)),
    );

    let summary = hex_hash(&chain).expect("chain is non-empty");
    println!("summary signature: #{summary}");
    println!();

    println!("per-level signatures:");
    for (error, hash) in hashed_levels(&chain).expect("chain is non-empty") {
        println!("  #{hash}  {}", error.type_identity());
    }
    println!();

    let trace = render_trace(&chain, &RenderConfig::default()).expect("chain is non-empty");
    print!("{trace}");
}
