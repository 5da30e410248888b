use fanlog::config::LogConfig;
use fanlog::console::ConsoleSink;
use fanlog::interceptor::Interceptor;
use fanlog::level::{Level, LevelFilter};
use std::sync::Arc;

fn main() {
    let config = LogConfig::builder()
        .min_level(LevelFilter::AtLeast(Level::Debug))
        .tag("DEMO")
        .thread_info(true)
        .border(true)
        .interceptor(Interceptor::deny_messages(["heartbeat"]))
        .build();
    fanlog::init(config, vec![Arc::new(ConsoleSink::new())]);

    fanlog::d("starting up");
    fanlog::i("heartbeat tick"); // filtered out by the blacklist
    fanlog::logger().with_tag("NET").w("connection is flaky");

    let err = std::io::Error::other("payload too large");
    fanlog::log_err(Level::Error, "upload failed", &err);
}
