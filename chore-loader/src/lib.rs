//! # chore-loader
//!
//! Discovery and load-once evaluation of task-definition files.
//!
//! Build a [`Session`] at process start, ask [`discovery`] for the candidate
//! files, then feed them through [`Session::load_all`] with an [`Evaluator`].
//! Per-file failures become [`LoadWarning`]s and never abort the batch.

pub mod discovery;
pub mod evaluator;
pub mod namespace;
pub mod session;

pub use evaluator::{EvalError, Evaluator};
pub use namespace::{Namespace, TaskDef};
pub use session::{LoadOutcome, LoadWarning, Session};
