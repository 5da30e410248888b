mod common;

use common::SpySink;
use fanlog::config::LogConfig;
use fanlog::level::{Level, LevelFilter};

// One test function: the global slot is process-wide state, so the
// init / re-init sequence has to run in a fixed order.
#[test]
fn init_installs_and_reinit_replaces_with_a_warning_only() {
    assert!(!fanlog::is_initialized());

    let first = SpySink::new();
    fanlog::init(LogConfig::builder().tag("FIRST").build(), vec![first.clone()]);
    assert!(fanlog::is_initialized());

    fanlog::i("goes to the first logger");
    assert_eq!(first.len(), 1);

    // Double initialization is not a hard failure: the new configuration
    // and sinks take effect, last init wins.
    let second = SpySink::new();
    fanlog::init(
        LogConfig::builder()
            .tag("SECOND")
            .min_level(LevelFilter::AtLeast(Level::Warn))
            .build(),
        vec![second.clone()],
    );

    fanlog::w("goes to the second logger");
    fanlog::i("gated by the second config");

    assert_eq!(first.len(), 1, "replaced logger must receive nothing more");
    let records = second.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].1, "SECOND");
    assert!(records[0].2.contains("goes to the second logger"));

    fanlog::flush();
}
