//! CLI command implementations

pub mod generate;
pub mod infer;

pub use generate::{GenerateArgs, handle_generate};
pub use infer::{InferArgs, handle_infer};
