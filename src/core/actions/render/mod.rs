pub mod completion;
pub mod errors;
pub mod events;
pub mod handle;
pub mod ports;
pub mod render_job;
pub mod row;
pub mod scheduler;
