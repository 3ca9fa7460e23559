use std::io::{BufRead, Write};
use std::time::{Duration, Instant};
use crate::cache::Cache;
use crate::config::CacheConfig;
use crate::stats::Summary;
use crate::trace::{parse_record, AccessKind, AnnotatedRecord};

/// Replays memory traces against a cache and collects the results
///
/// It supports calling replay multiple times, and will update the time taken
/// to simulate and the running summary accordingly
pub struct Simulator {
    cache: Cache,
    simulation_time: Duration,
}

impl Simulator {
    /// Creates a new simulator for a given cache geometry
    pub fn new(config: &CacheConfig) -> Self {
        Self {
            cache: Cache::new(config),
            simulation_time: Duration::new(0, 0),
        }
    }

    /// Replays every access record in a trace against the cache
    ///
    /// Lines that are not access records (instruction fetches, blank lines,
    /// noise) are skipped silently, as is any line that isn't UTF-8. A modify
    /// is serviced as a load followed by a store to the same address, so its
    /// second access always hits
    ///
    /// Note that reads from the trace are *guaranteed to be sequential*. This
    /// means that when the reader is backed by something like mmap, one can
    /// advise the operating system that sequential reads will be used, which
    /// can increase read performance
    ///
    /// # Arguments
    ///
    /// * `reader`: The trace input, consumed line by line
    /// * `echo`: An optional sink that receives each serviced record with its
    ///   outcomes appended, one line per record
    ///
    /// returns: Result<&Summary, String>
    pub fn replay<R: BufRead>(
        &mut self,
        mut reader: R,
        mut echo: Option<&mut dyn Write>,
    ) -> Result<&Summary, String> {
        let start = Instant::now();
        // One line buffer reused across the whole trace
        let mut line = Vec::new();
        loop {
            line.clear();
            let read = reader
                .read_until(b'\n', &mut line)
                .map_err(|e| format!("Couldn't read the trace file: {e}"))?;
            if read == 0 {
                break;
            }
            let record = match std::str::from_utf8(&line).ok().and_then(parse_record) {
                Some(record) => record,
                None => continue,
            };
            let first = self.cache.access(record.address);
            let second = if record.kind == AccessKind::Modify {
                Some(self.cache.access(record.address))
            } else {
                None
            };
            if let Some(echo) = echo.as_mut() {
                let annotated = AnnotatedRecord {
                    record,
                    first,
                    second,
                };
                writeln!(echo, "{annotated}")
                    .map_err(|e| format!("Couldn't write the verbose echo: {e}"))?;
            }
        }
        let end = Instant::now();
        self.simulation_time += end - start;
        Ok(self.cache.get_summary())
    }

    /// Gets the totals accumulated so far
    pub fn get_summary(&self) -> &Summary {
        self.cache.get_summary()
    }

    /// Gets the wall-clock execution time for replaying
    pub fn get_execution_time(&self) -> &Duration {
        &self.simulation_time
    }
}
