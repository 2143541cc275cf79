use crate::core::actions::render::events::RenderEvent;
use crate::core::actions::render::ports::render_event_sink::RenderEventSink;
use log::{debug, info, trace};
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

/// Reports render progress through the `log` facade.
///
/// Rows are logged at trace level, every quarter of the image at debug level,
/// and the finished render at info level.
#[derive(Debug)]
pub struct ProgressLogger {
    rows_per_render: u32,
    rows_done: Mutex<HashMap<u64, u32>>,
}

impl ProgressLogger {
    /// `rows_per_render` is the image size used to turn row counts into
    /// percentages.
    pub fn new(rows_per_render: u32) -> Self {
        Self {
            rows_per_render,
            rows_done: Mutex::new(HashMap::new()),
        }
    }

    /// Rows seen so far for `generation`; zero once it has completed.
    pub fn rows_done(&self, generation: u64) -> u32 {
        self.rows_done
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&generation)
            .copied()
            .unwrap_or(0)
    }

    fn quarter(&self, rows: u32) -> u32 {
        if self.rows_per_render == 0 {
            return 0;
        }

        (u64::from(rows) * 4 / u64::from(self.rows_per_render)) as u32
    }
}

impl RenderEventSink for ProgressLogger {
    fn present(&self, event: RenderEvent) {
        match event {
            RenderEvent::RowCompleted { generation, y } => {
                let done = {
                    let mut rows_done = self.rows_done.lock().unwrap_or_else(PoisonError::into_inner);
                    let done = rows_done.entry(generation).or_insert(0);
                    *done += 1;
                    *done
                };

                trace!("render {}: row {} done", generation, y);

                if self.quarter(done) > self.quarter(done - 1) {
                    debug!(
                        "render {}: {}/{} rows ({}%)",
                        generation,
                        done,
                        self.rows_per_render,
                        u64::from(done) * 100 / u64::from(self.rows_per_render.max(1))
                    );
                }
            }
            RenderEvent::Completed(summary) => {
                self.rows_done
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .remove(&summary.generation);

                info!(
                    "render {} complete: {}x{} in {:?}",
                    summary.generation, summary.size, summary.size, summary.duration
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::render::events::RenderSummary;
    use std::time::Duration;

    #[test]
    fn test_counts_rows_per_generation() {
        let logger = ProgressLogger::new(4);

        logger.present(RenderEvent::RowCompleted { generation: 1, y: 3 });
        logger.present(RenderEvent::RowCompleted { generation: 1, y: 0 });
        logger.present(RenderEvent::RowCompleted { generation: 2, y: 1 });

        assert_eq!(logger.rows_done(1), 2);
        assert_eq!(logger.rows_done(2), 1);
        assert_eq!(logger.rows_done(3), 0);
    }

    #[test]
    fn test_completion_forgets_generation() {
        let logger = ProgressLogger::new(2);
        logger.present(RenderEvent::RowCompleted { generation: 5, y: 0 });

        logger.present(RenderEvent::Completed(RenderSummary {
            generation: 5,
            size: 2,
            duration: Duration::from_millis(3),
        }));

        assert_eq!(logger.rows_done(5), 0);
    }

    #[test]
    fn test_quarters() {
        let logger = ProgressLogger::new(8);

        assert_eq!(logger.quarter(1), 0);
        assert_eq!(logger.quarter(2), 1);
        assert_eq!(logger.quarter(8), 4);
        assert_eq!(ProgressLogger::new(0).quarter(3), 0);
    }
}
