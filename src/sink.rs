//! Ready-made [`ChangeSink`] implementations.

use crate::event::{ChangeSink, InputChange};
use std::io::Write;

/// Logs every change through the `log` facade at debug level.
pub struct LogSink;

impl ChangeSink for LogSink {
    fn on_change(&mut self, change: &InputChange) {
        log::debug!(
            "input change: port={} kind={:?} index={} id={} state={}",
            change.port,
            change.kind,
            change.index,
            change.id,
            change.state
        );
    }
}

/// Writes each change as one JSON object per line.
///
/// Write errors are logged and dropped; a change feed is best-effort and must
/// never stall the frame path.
pub struct JsonLineSink<W: Write + Send> {
    out: W,
}

impl<W: Write + Send> JsonLineSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consumes the sink and returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + Send> ChangeSink for JsonLineSink<W> {
    fn on_change(&mut self, change: &InputChange) {
        let wrote = serde_json::to_writer(&mut self.out, change)
            .map_err(std::io::Error::from)
            .and_then(|_| self.out.write_all(b"\n"));
        if let Err(err) = wrote {
            log::warn!("dropping input change, sink write failed: {err}");
        }
    }
}

/// Wraps a sink and forwards only changes matching a predicate.
pub struct FilteredSink {
    predicate: Box<dyn Fn(&InputChange) -> bool + Send + Sync>,
    inner: Box<dyn ChangeSink>,
}

impl FilteredSink {
    pub fn new(
        predicate: impl Fn(&InputChange) -> bool + Send + Sync + 'static,
        inner: Box<dyn ChangeSink>,
    ) -> Self {
        Self {
            predicate: Box::new(predicate),
            inner,
        }
    }
}

impl ChangeSink for FilteredSink {
    fn on_change(&mut self, change: &InputChange) {
        if (self.predicate)(change) {
            self.inner.on_change(change);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::DeviceKind;
    use std::sync::{Arc, Mutex};

    fn change(id: u32, state: u16) -> InputChange {
        InputChange {
            port: 0,
            kind: DeviceKind::Joypad,
            index: 0,
            id,
            state,
        }
    }

    #[derive(Clone, Default)]
    struct Recorder(Arc<Mutex<Vec<InputChange>>>);

    impl ChangeSink for Recorder {
        fn on_change(&mut self, change: &InputChange) {
            self.0.lock().unwrap().push(*change);
        }
    }

    #[test]
    fn json_sink_writes_one_line_per_change() {
        let mut sink = JsonLineSink::new(Vec::new());
        sink.on_change(&change(0, 1));
        sink.on_change(&change(0, 0));

        let out = sink.into_inner();
        let lines: Vec<&str> = std::str::from_utf8(&out).unwrap().lines().collect();
        assert_eq!(lines.len(), 2);

        let parsed: InputChange = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(parsed, change(0, 1));
    }

    #[test]
    fn filtered_sink_applies_predicate() {
        let recorder = Recorder::default();
        let seen = recorder.clone();
        let mut sink = FilteredSink::new(|c: &InputChange| c.state != 0, Box::new(recorder));

        sink.on_change(&change(3, 1));
        sink.on_change(&change(3, 0));

        let seen = seen.0.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].id, 3);
    }
}
