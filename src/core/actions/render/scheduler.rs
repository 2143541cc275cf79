use crate::core::actions::render::errors::{RenderError, RowError};
use crate::core::actions::render::events::{RenderEvent, RenderSummary};
use crate::core::actions::render::handle::{RenderHandle, RenderState};
use crate::core::actions::render::ports::render_event_sink::RenderEventSink;
use crate::core::actions::render::render_job::RenderJob;
use crate::core::actions::render::row::compute_row;
use crate::core::colour_maps::hue_cycle::HueCycleColourMap;
use crate::core::data::render_target::RenderTarget;
use log::{debug, error, info, trace, warn};
use rayon::{ThreadPool, ThreadPoolBuilder};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Drives full-frame renders, one pool task per image row.
///
/// Row tasks never wait on each other. Each one computes its row, writes it
/// into the target and decrements the render's completion counter; the task
/// that takes the counter to zero releases the target and reports
/// [`RenderEvent::Completed`].
pub struct RenderScheduler {
    pool: Arc<ThreadPool>,
    next_generation: AtomicU64,
}

impl RenderScheduler {
    /// `threads: None` lets rayon pick (one per available core).
    pub fn new(threads: Option<usize>) -> Result<Self, RenderError> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(threads.unwrap_or(0))
            .thread_name(|index| format!("render-row-{index}"))
            .build()?;

        Ok(Self {
            pool: Arc::new(pool),
            next_generation: AtomicU64::new(0),
        })
    }

    #[must_use]
    pub fn thread_count(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Starts rendering `job` into `target` and returns immediately.
    ///
    /// Fails with [`RenderError::RenderInProgress`] if a previous render on the
    /// same target has not finished; the running render is left untouched.
    pub fn render(
        &self,
        job: RenderJob,
        target: Arc<RenderTarget>,
        sink: Arc<dyn RenderEventSink>,
    ) -> Result<RenderHandle, RenderError> {
        if !target.try_begin() {
            warn!("rejected {} render: target still busy", job.fractal.kind());
            return Err(RenderError::RenderInProgress);
        }

        let generation = self.next_generation.fetch_add(1, Ordering::Relaxed) + 1;
        let size = target.size();
        let state = Arc::new(RenderState::new(generation, size));

        debug!(
            "render {}: {} {}x{} over {:?}, {} threads",
            generation,
            job.fractal.kind(),
            size,
            size,
            job.viewport,
            self.thread_count()
        );

        let rows = Arc::new(RowTasks {
            job,
            target,
            sink,
            colour_map: HueCycleColourMap::new(),
            state: Arc::clone(&state),
        });

        for y in 0..size {
            let rows = Arc::clone(&rows);
            self.pool.spawn(move || rows.run(y));
        }

        Ok(RenderHandle { state })
    }

    /// Renders and blocks until every row is written.
    pub fn render_blocking(
        &self,
        job: RenderJob,
        target: Arc<RenderTarget>,
        sink: Arc<dyn RenderEventSink>,
    ) -> Result<RenderSummary, RenderError> {
        self.render(job, target, sink)?.wait()
    }
}

struct RowTasks {
    job: RenderJob,
    target: Arc<RenderTarget>,
    sink: Arc<dyn RenderEventSink>,
    colour_map: HueCycleColourMap,
    state: Arc<RenderState>,
}

impl RowTasks {
    fn run(&self, y: u32) {
        let generation = self.state.generation;

        let result = compute_row(
            &self.job.fractal,
            &self.colour_map,
            self.job.viewport,
            self.state.size,
            y,
        )
        .map_err(RowError::from)
        .and_then(|row| self.target.write_row(y, &row).map_err(RowError::from));

        match result {
            Ok(()) => {
                trace!("render {}: row {} written", generation, y);
                self.sink.present(RenderEvent::RowCompleted { generation, y });
            }
            Err(source) => {
                error!("render {}: row {} failed: {}", generation, y, source);
                self.state.record_failure(RenderError::Row { y, source });
            }
        }

        if self.state.counter.row_done() {
            self.finish();
        }
    }

    fn finish(&self) {
        let summary = RenderSummary {
            generation: self.state.generation,
            size: self.state.size,
            duration: self.state.started.elapsed(),
        };

        self.target.finish();

        info!(
            "render {}: {} finished in {:?}",
            summary.generation,
            self.job.fractal.kind(),
            summary.duration
        );

        self.sink.present(RenderEvent::Completed(summary));
        self.state.complete(summary);
    }
}
