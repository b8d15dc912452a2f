//! Allocation instrumentation under the `tracing` feature.
//!
//! Run with `cargo test -p stride-guard-arena --features tracing`.

#![cfg(feature = "tracing")]

use std::fmt::{self, Write as _};
use std::sync::{Arc, Mutex};

use stride_guard_arena::{GuardConfig, GuardedVec};
use stride_guard_core::Increment;
use tracing::field::{Field, Visit};
use tracing::span::{Attributes, Id, Record};
use tracing::{Event, Metadata, Subscriber};

/// Records every span and event as `"<kind> <name> key=value ..."`.
#[derive(Clone, Default)]
struct Capture {
    log: Arc<Mutex<Vec<String>>>,
}

struct Line(String);

impl Visit for Line {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        let _ = write!(self.0, " {}={value:?}", field.name());
    }
}

impl Subscriber for Capture {
    fn enabled(&self, _: &Metadata<'_>) -> bool {
        true
    }

    fn new_span(&self, span: &Attributes<'_>) -> Id {
        let mut line = Line(format!("span {}", span.metadata().name()));
        span.record(&mut line);
        let mut log = self.log.lock().unwrap();
        log.push(line.0);
        Id::from_u64(log.len() as u64)
    }

    fn record(&self, _: &Id, _: &Record<'_>) {}

    fn record_follows_from(&self, _: &Id, _: &Id) {}

    fn event(&self, event: &Event<'_>) {
        let mut line = Line(format!("event {}", event.metadata().level()));
        event.record(&mut line);
        self.log.lock().unwrap().push(line.0);
    }

    fn enter(&self, _: &Id) {}

    fn exit(&self, _: &Id) {}
}

fn captured<R>(f: impl FnOnce() -> R) -> (R, Vec<String>) {
    let capture = Capture::default();
    let log = Arc::clone(&capture.log);
    let out = tracing::subscriber::with_default(capture, f);
    let lines = log.lock().unwrap().clone();
    (out, lines)
}

#[test]
fn allocation_emits_span_and_event() {
    let (g, lines) = captured(|| GuardedVec::new(&[1.0f64, 2.0], -3));
    assert_eq!(g.guard_len(), 6);
    assert_eq!(lines.len(), 2, "{lines:?}");

    let span = &lines[0];
    assert!(span.starts_with("span with_config"), "{span}");
    for field in ["len=2", "inc=-3", "guard_factor=2"] {
        assert!(span.contains(field), "{span} missing {field}");
    }

    let event = &lines[1];
    assert!(event.starts_with("event TRACE"), "{event}");
    for field in [
        "message=allocated guarded vector",
        "guard=6",
        "footprint=4",
        "total=16",
    ] {
        assert!(event.contains(field), "{event} missing {field}");
    }
}

#[test]
fn rejected_config_emits_no_event() {
    let inc = Increment::new(2).unwrap();
    let (built, lines) =
        captured(|| GuardedVec::<f32>::with_config(&[1.0], inc, &GuardConfig::new(0)));
    assert!(built.is_err());
    assert_eq!(lines.len(), 1, "{lines:?}");
    assert!(lines[0].contains("guard_factor=0"), "{}", lines[0]);
}
