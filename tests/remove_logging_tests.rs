//! Tests for the diagnostic output of `log_remove_first`.
//!
//! A capturing `log::Log` is installed as the global logger, so this file holds
//! a single test to keep the recorded output deterministic.

use log::{Level, LevelFilter, Log, Metadata, Record};
use rstest::rstest;
use slc::remove::log_remove_first;
use std::sync::Mutex;

struct CaptureLogger {
    records: Mutex<Vec<String>>,
}

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        let line = format!("{}|{}|{}", record.level(), record.target(), record.args());
        self.records
            .lock()
            .expect("capture logger poisoned")
            .push(line);
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger {
    records: Mutex::new(Vec::new()),
};

#[rstest]
fn test_log_remove_first_emits_trimmed_sequence_at_info() {
    log::set_logger(&LOGGER).expect("logger already installed");
    log::set_max_level(LevelFilter::Trace);

    let sequence = vec![1, 2, 3];
    log_remove_first(&sequence);
    log_remove_first(&Vec::<i32>::new());
    log_remove_first(&["only"]);
    log_remove_first(&[String::from("a"), String::from("b")]);

    let records = LOGGER
        .records
        .lock()
        .expect("capture logger poisoned")
        .clone();
    assert_eq!(
        records,
        vec![
            format!("{}|slc::remove|[2, 3]", Level::Info),
            format!("{}|slc::remove|[]", Level::Info),
            format!("{}|slc::remove|[]", Level::Info),
            format!("{}|slc::remove|[\"b\"]", Level::Info),
        ]
    );
    assert_eq!(sequence, vec![1, 2, 3]);
}
