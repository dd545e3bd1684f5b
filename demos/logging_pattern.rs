//! Emit a tracing event carrying the error's stack hash, the way a
//! log-aggregation pipeline would consume it.
//!
//! Run with: `cargo run --example logging_pattern --features tracing`

use stack_signature::tracing_ext::emit_error;
use stack_signature::{frame, ErrorChain, ErrorFrame};

fn main() {
    tracing_subscriber::fmt().with_target(false).init();

    let chain = ErrorChain::new(
        ErrorFrame::new("com.xyz.MyClientException")
            .with_message("an error occurred while getting the things")
            .with_frame(frame!("com.xyz.MyClient", "getTheThings", "MyApp.java", 26)),
    )
    .caused_by(
        ErrorFrame::new("java.net.SocketTimeoutException")
            .with_message("read timed out")
            .with_frame(frame!("com.xyz.HttpStack", "get", "MyApp.java", 38)),
    );

    emit_error(&chain, "request failed");
}
