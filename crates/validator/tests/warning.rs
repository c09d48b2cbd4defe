//! Warning channel contract.

use std::io;
use std::sync::Arc;

use parking_lot::Mutex;
use pretty_assertions::assert_eq;
use prop_types::warning::{self, RecordingSink, WarningChannel, WarningError, warning};
use rstest::rstest;

#[rstest]
#[case::too_short("too short")]
#[case::placeholders_only("%s%s%s%s%s%s")]
#[case::punctuation_only("----------!")]
fn rejects_non_descriptive_formats_even_when_passing(#[case] format: &str) {
    assert_eq!(
        warning(true, format, &[]),
        Err(WarningError::NonDescriptiveFormat {
            format: format.to_owned()
        })
    );
}

#[test]
fn requires_a_format() {
    let err = warning(false, None::<&str>, &[]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "`warning(condition, format, ...args)` requires a warning message argument"
    );
}

#[test]
fn non_descriptive_error_quotes_the_format() {
    let err = warning(true, "%s: %s", &[]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "The warning format should be able to uniquely identify this warning. Please, use a \
         more descriptive format than: %s: %s"
    );
}

#[test]
fn macro_forwards_arguments() {
    assert_eq!(
        prop_types::warning!(true, "Component %s received %s", "Card", 3),
        Ok(())
    );
}

#[test]
fn closure_sinks_receive_formatted_lines() {
    let lines = Arc::new(Mutex::new(Vec::new()));
    let captured = Arc::clone(&lines);
    let channel = WarningChannel::new(move |line: &str| captured.lock().push(line.to_owned()));

    channel
        .warn(false, "Expected %s to be positive, got %s", &[&"count", &-1])
        .unwrap();
    assert_eq!(*lines.lock(), ["Warning: Expected count to be positive, got -1"]);
}

#[test]
fn custom_ignored_prefix() {
    let sink = Arc::new(RecordingSink::new());
    let channel = WarningChannel::strict()
        .with_sink(sink.clone())
        .ignoring_prefix("Deprecated: ");

    channel.warn(false, "Deprecated: use `shape` instead", &[]).unwrap();
    channel.warn(false, "Failed Composite propType: kept", &[]).unwrap();
    assert_eq!(sink.messages(), ["Warning: Failed Composite propType: kept"]);

    let channel = channel.without_ignored_prefix();
    channel.warn(false, "Deprecated: use `shape` instead", &[]).unwrap();
    assert_eq!(sink.len(), 2);
}

#[test]
fn legacy_prefix_constant_matches_channel() {
    assert_eq!(
        WarningChannel::legacy().ignored_prefix(),
        Some(warning::LEGACY_COMPOSITE_PREFIX)
    );
    assert_eq!(WarningChannel::strict().ignored_prefix(), None);
}

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn default_sink_logs_through_tracing() {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        WarningChannel::strict()
            .warn(false, "Tracing sink received %s", &[&"this line"])
            .unwrap();
    });

    let output = String::from_utf8(captured.0.lock().clone()).unwrap();
    assert!(output.contains("WARN"));
    assert!(output.contains("prop_types"));
    assert!(output.contains("Warning: Tracing sink received this line"));
}
