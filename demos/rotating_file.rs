use fanlog::backup::BackupPolicy;
use fanlog::clean::CleanPolicy;
use fanlog::config::LogConfig;
use fanlog::file_sink::FileSink;
use fanlog::naming::NamingPolicy;
use std::sync::Arc;
use std::time::Duration;

fn main() {
    let dir = std::env::temp_dir().join("fanlog-demo");
    let sink = FileSink::builder(&dir)
        .naming(NamingPolicy::changeless("app.log"))
        .backup(BackupPolicy::file_size(512, 3))
        .clean(CleanPolicy::max_age(Duration::from_secs(7 * 24 * 3600)))
        .header(|| format!("fanlog demo, pid {}", std::process::id()))
        .build();
    fanlog::init(LogConfig::builder().tag("FILE").build(), vec![Arc::new(sink)]);

    for index in 0..100 {
        fanlog::i(format!("record number {index:03}"));
    }
    fanlog::flush();

    println!("wrote logs under {}", dir.display());
    let mut names: Vec<String> = std::fs::read_dir(&dir)
        .expect("read demo directory")
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    for name in names {
        println!("  {name}");
    }
}
