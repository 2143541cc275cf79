use std::time::Duration;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RenderSummary {
    pub generation: u64,
    pub size: u32,
    pub duration: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderEvent {
    /// Row `y` of render `generation` has been written to the target.
    RowCompleted { generation: u64, y: u32 },
    /// Every row has been written. Sent once per render, after the target has
    /// been released for the next render.
    Completed(RenderSummary),
}

impl RenderEvent {
    #[must_use]
    pub fn generation(&self) -> u64 {
        match self {
            Self::RowCompleted { generation, .. } => *generation,
            Self::Completed(summary) => summary.generation,
        }
    }
}
