//! TUI pane rendering modules
//!
//! Every pane is a stateless `render_*` function that draws one part of the
//! screen from borrowed core data.
//!
//! # Pane Modules
//!
//! - [`array`]: Bar chart of the array being sorted
//! - [`graph`]: Canvas drawing of the graph with traversal colors
//! - [`tree`]: Canvas drawing of the binary tree with traversal colors
//! - [`info`]: Algorithm metadata, work list, visit order and legend
//! - [`status`]: Status bar with keybindings and playback state
//! - `utils`: Shared block styling and canvas bounds

mod utils;

pub mod array;
pub mod graph;
pub mod info;
pub mod status;
pub mod tree;

// Re-export render functions for convenience
pub use array::render_array_pane;
pub use graph::render_graph_pane;
pub use info::{render_info_pane, InfoRenderData};
pub use status::{render_status_bar, StatusRenderData};
pub use tree::render_tree_pane;
