//! # Introduction
//!
//! algoscope records how classic algorithms work on a structure and plays the
//! recording back step by step. Every algorithm run produces an immutable
//! [`trace::Trace`]: one snapshot per observable moment (a comparison, a
//! swap, a node being visited). A [`playback::PlaybackCursor`] then walks the
//! trace forward and backward, either on a timer or by hand, and a terminal
//! UI built with [ratatui](https://docs.rs/ratatui) draws the current step.
//!
//! ## Pipeline
//!
//! ```text
//! Generator → Structure → Algorithm::trace → Trace → PlaybackCursor → TUI
//! ```
//!
//! 1. [`structures`]: arrays, undirected graphs and binary search trees,
//!    plus seeded random generators for each.
//! 2. [`algorithm`]: the algorithm catalogue, its static metadata and the
//!    dispatch from an algorithm name to its trace recorder.
//! 3. [`trace`]: step types, the budgeted [`trace::StepLog`] sink and the
//!    sorting, graph and tree recorders.
//! 4. [`playback`]: the idle/playing/paused cursor and its tick timer.
//! 5. [`config`], [`errors`], [`logging`]: defaults and validation, error
//!    enums and `tracing` subscriber setup.
//! 6. [`ui`]: ratatui-based TUI; not part of the stable library API.
//!
//! ## Algorithms
//!
//! Sorting: bubble, quick (Lomuto), merge.
//! Graph: breadth-first and depth-first search.
//! Tree: in-order, pre-order, post-order and level-order traversal.

pub mod algorithm;
pub mod config;
pub mod errors;
pub mod logging;
pub mod playback;
pub mod structures;
pub mod trace;
pub mod ui;
