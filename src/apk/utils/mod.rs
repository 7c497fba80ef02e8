//! Small helpers shared by the pipeline stages.

pub mod fs;
