//! Serialized status sink
//!
//! All tasks that print share one sink. A line is written inside a
//! critical-section mutex scope, so lines never interleave. The scope is
//! released on every path: when no writer is installed, or the writer is
//! already borrowed by a re-entrant call, the line is dropped and counted
//! instead of being written unsynchronized.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;
use portable_atomic::{AtomicU32, Ordering};

use crate::state::Snapshot;
use crate::traits::StatusWriter;

use super::line::render;

/// Sink setup errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SinkError {
    /// A writer was already installed
    AlreadyInstalled,
}

/// Mutually exclusive status output
///
/// Starts without a writer; until [`StatusSink::install`] succeeds every
/// line is dropped.
pub struct StatusSink<W> {
    writer: Mutex<CriticalSectionRawMutex, RefCell<Option<W>>>,
    dropped: AtomicU32,
}

impl<W: StatusWriter> Default for StatusSink<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: StatusWriter> StatusSink<W> {
    /// Create a sink with no writer installed
    pub const fn new() -> Self {
        Self {
            writer: Mutex::new(RefCell::new(None)),
            dropped: AtomicU32::new(0),
        }
    }

    /// Install the output writer (once)
    pub fn install(&self, writer: W) -> Result<(), SinkError> {
        self.writer.lock(|cell| {
            let mut slot = cell.try_borrow_mut().map_err(|_| SinkError::AlreadyInstalled)?;
            if slot.is_some() {
                return Err(SinkError::AlreadyInstalled);
            }
            *slot = Some(writer);
            Ok(())
        })
    }

    /// Write one line, returning whether it reached the writer
    pub fn write_line(&self, line: &str) -> bool {
        let written = self.writer.lock(|cell| match cell.try_borrow_mut() {
            Ok(mut slot) => match slot.as_mut() {
                Some(writer) => {
                    writer.write_line(line);
                    true
                }
                None => false,
            },
            Err(_) => false,
        });

        if !written {
            self.dropped.fetch_add(1, Ordering::Relaxed);
        }
        written
    }

    /// Render and write a status line for `snapshot`
    pub fn publish(&self, snapshot: &Snapshot) -> bool {
        self.write_line(&render(snapshot))
    }

    /// Lines dropped so far
    pub fn dropped(&self) -> u32 {
        self.dropped.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::string::{String, ToString};
    use std::sync::{Arc, Mutex as StdMutex};
    use std::vec::Vec;

    /// Writer whose lines stay readable after it is installed
    #[derive(Clone, Default)]
    struct Lines(Arc<StdMutex<Vec<String>>>);

    impl Lines {
        fn taken(&self) -> Vec<String> {
            self.0.lock().unwrap().clone()
        }
    }

    impl StatusWriter for Lines {
        fn write_line(&mut self, line: &str) {
            self.0.lock().unwrap().push(line.to_string());
        }
    }

    /// Writer that tries to print through its own sink while printing
    struct Reentrant(&'static StatusSink<Reentrant>);

    impl StatusWriter for Reentrant {
        fn write_line(&mut self, _line: &str) {
            assert!(!self.0.write_line("nested"));
        }
    }

    #[test]
    fn test_drops_until_installed() {
        let sink: StatusSink<Lines> = StatusSink::new();
        assert!(!sink.write_line("lost"));
        assert_eq!(sink.dropped(), 1);

        let lines = Lines::default();
        sink.install(lines.clone()).unwrap();
        assert!(sink.write_line("kept"));

        assert_eq!(lines.taken(), vec!["kept".to_string()]);
        assert_eq!(sink.dropped(), 1);
    }

    #[test]
    fn test_install_twice_fails() {
        let sink: StatusSink<Lines> = StatusSink::new();
        sink.install(Lines::default()).unwrap();
        assert_eq!(sink.install(Lines::default()), Err(SinkError::AlreadyInstalled));
    }

    #[test]
    fn test_publish_renders_snapshot() {
        let sink: StatusSink<Lines> = StatusSink::new();
        let lines = Lines::default();
        sink.install(lines.clone()).unwrap();

        let snapshot = Snapshot {
            emergency_latched: true,
            ..Snapshot::default()
        };
        assert!(sink.publish(&snapshot));

        assert_eq!(
            lines.taken()[0],
            "Motor: medido=0 | alvo=0 | motor=0 | pegos=0 | emergency=1"
        );
    }

    #[test]
    fn test_reentrant_write_is_dropped() {
        static SINK: StatusSink<Reentrant> = StatusSink::new();
        SINK.install(Reentrant(&SINK)).ok();

        assert!(SINK.write_line("outer"));
        assert_eq!(SINK.dropped(), 1);
    }

    #[test]
    fn test_concurrent_writers_do_not_interleave() {
        use std::thread;

        let sink: Arc<StatusSink<Lines>> = Arc::new(StatusSink::new());
        let lines = Lines::default();
        sink.install(lines.clone()).unwrap();

        let handles: Vec<_> = (0..4)
            .map(|t| {
                let sink = Arc::clone(&sink);
                thread::spawn(move || {
                    for i in 0..50 {
                        sink.write_line(&format!("task{} line{}", t, i));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let lines = lines.taken();
        assert_eq!(lines.len(), 200);
        assert!(lines.iter().all(|l| l.starts_with("task") && l.contains(" line")));
        assert_eq!(sink.dropped(), 0);
    }
}
