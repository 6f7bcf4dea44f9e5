pub mod task;

pub use task::{format_relative_time, Task, TaskCounts, TaskStatus, TaskUpdate};
