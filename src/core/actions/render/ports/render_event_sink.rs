use crate::core::actions::render::events::RenderEvent;

/// Receives progress from row tasks. Called from render worker threads.
pub trait RenderEventSink: Send + Sync {
    fn present(&self, event: RenderEvent);
}

/// A sink for callers that only care about the render handle.
#[derive(Debug, Clone, Copy, Default)]
pub struct IgnoreEvents;

impl RenderEventSink for IgnoreEvents {
    #[inline]
    fn present(&self, _event: RenderEvent) {}
}
