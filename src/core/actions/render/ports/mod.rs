//! Interfaces between the render scheduler and what it drives or reports to.

pub mod colour_map;
pub mod fractal_algorithm;
pub mod render_event_sink;
