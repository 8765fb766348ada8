mod build;
mod check;
mod clean;
mod common;

pub use build::{execute_build_pipeline, BuildOptions};
pub use check::execute_check_pipeline;
pub use clean::execute_clean_pipeline;
