//! Algorithm catalogue and dispatch
//!
//! [`Algorithm`] names the nine supported runs. Each carries static metadata
//! ([`AlgorithmInfo`]) for display, and [`Algorithm::trace`] runs it against
//! a [`Structure`] to produce a [`Trace`].

use crate::errors::TraceError;
use crate::structures::{NodeId, Structure};
use crate::trace::tree::DepthOrder;
use crate::trace::{graph, sorting, tree, StepLog, Trace};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use tracing::debug;

/// Structure family an algorithm operates on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    Sorting,
    Graph,
    Tree,
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Family::Sorting => write!(f, "array"),
            Family::Graph => write!(f, "graph"),
            Family::Tree => write!(f, "tree"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bubble,
    Quick,
    Merge,
    GraphBfs,
    GraphDfs,
    InOrder,
    PreOrder,
    PostOrder,
    TreeBfs,
}

/// Static display metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlgorithmInfo {
    pub name: &'static str,
    pub complexity: &'static str,
    pub description: &'static str,
}

/// Where a traversal begins; ignored by the sorts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StartParams {
    pub start: Option<NodeId>,
}

impl StartParams {
    pub fn from_node(id: NodeId) -> Self {
        StartParams { start: Some(id) }
    }
}

impl Algorithm {
    pub const ALL: [Algorithm; 9] = [
        Algorithm::Bubble,
        Algorithm::Quick,
        Algorithm::Merge,
        Algorithm::GraphBfs,
        Algorithm::GraphDfs,
        Algorithm::InOrder,
        Algorithm::PreOrder,
        Algorithm::PostOrder,
        Algorithm::TreeBfs,
    ];

    /// Short machine name, as accepted by [`FromStr`]
    pub fn key(self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble",
            Algorithm::Quick => "quick",
            Algorithm::Merge => "merge",
            Algorithm::GraphBfs => "bfs-graph",
            Algorithm::GraphDfs => "dfs-graph",
            Algorithm::InOrder => "inorder",
            Algorithm::PreOrder => "preorder",
            Algorithm::PostOrder => "postorder",
            Algorithm::TreeBfs => "bfs-tree",
        }
    }

    pub fn family(self) -> Family {
        match self {
            Algorithm::Bubble | Algorithm::Quick | Algorithm::Merge => Family::Sorting,
            Algorithm::GraphBfs | Algorithm::GraphDfs => Family::Graph,
            Algorithm::InOrder | Algorithm::PreOrder | Algorithm::PostOrder | Algorithm::TreeBfs => {
                Family::Tree
            }
        }
    }

    pub fn info(self) -> AlgorithmInfo {
        match self {
            Algorithm::Bubble => AlgorithmInfo {
                name: "Bubble Sort",
                complexity: "O(n²)",
                description: "Compares adjacent elements and swaps them if they are in wrong order",
            },
            Algorithm::Quick => AlgorithmInfo {
                name: "Quick Sort",
                complexity: "O(n log n) avg",
                description: "Divides array using a pivot and recursively sorts partitions",
            },
            Algorithm::Merge => AlgorithmInfo {
                name: "Merge Sort",
                complexity: "O(n log n)",
                description: "Divides array into halves and merges them in sorted order",
            },
            Algorithm::GraphBfs => AlgorithmInfo {
                name: "Breadth-First Search",
                complexity: "O(V + E)",
                description: "Explores neighbors level by level using a queue",
            },
            Algorithm::GraphDfs => AlgorithmInfo {
                name: "Depth-First Search",
                complexity: "O(V + E)",
                description: "Explores as far as possible along each branch using a stack",
            },
            Algorithm::InOrder => AlgorithmInfo {
                name: "In-order Traversal",
                complexity: "O(n)",
                description: "Left subtree, node, right subtree; yields sorted output for a BST",
            },
            Algorithm::PreOrder => AlgorithmInfo {
                name: "Pre-order Traversal",
                complexity: "O(n)",
                description: "Node first, then left subtree, then right subtree",
            },
            Algorithm::PostOrder => AlgorithmInfo {
                name: "Post-order Traversal",
                complexity: "O(n)",
                description: "Left subtree, right subtree, then the node itself",
            },
            Algorithm::TreeBfs => AlgorithmInfo {
                name: "Level-order Traversal",
                complexity: "O(n)",
                description: "Visits nodes level by level using a queue",
            },
        }
    }

    /// Playback delay used when the caller has no preference
    pub fn default_delay(self) -> Duration {
        match self.family() {
            Family::Sorting => Duration::from_millis(51),
            Family::Graph => Duration::from_millis(1000),
            Family::Tree => Duration::from_millis(800),
        }
    }

    /// Next algorithm in catalogue order, wrapping around
    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|&a| a == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    /// Previous algorithm in catalogue order, wrapping around
    pub fn prev(self) -> Self {
        let index = Self::ALL.iter().position(|&a| a == self).unwrap_or(0);
        Self::ALL[(index + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Run the algorithm and record its step sequence.
    ///
    /// Fails without producing steps if the structure belongs to another
    /// family or the start node does not exist.
    pub fn trace(
        self,
        structure: &Structure,
        params: StartParams,
        step_limit: usize,
    ) -> Result<Trace, TraceError> {
        let mut log = StepLog::new(step_limit);

        match (self, structure) {
            (Algorithm::Bubble, Structure::Array(values)) => sorting::bubble_sort(values, &mut log)?,
            (Algorithm::Quick, Structure::Array(values)) => sorting::quick_sort(values, &mut log)?,
            (Algorithm::Merge, Structure::Array(values)) => sorting::merge_sort(values, &mut log)?,
            (Algorithm::GraphBfs | Algorithm::GraphDfs, Structure::Graph(g)) => {
                let start = match params.start {
                    Some(id) => id,
                    None => match g.nodes().first() {
                        Some(node) => node.id,
                        None => return Ok(log.finish(self)),
                    },
                };
                if self == Algorithm::GraphBfs {
                    graph::bfs(g, start, &mut log)?;
                } else {
                    graph::dfs(g, start, &mut log)?;
                }
            }
            (Algorithm::InOrder, Structure::Tree(t)) => {
                tree::depth_first(t, DepthOrder::InOrder, params.start, &mut log)?
            }
            (Algorithm::PreOrder, Structure::Tree(t)) => {
                tree::depth_first(t, DepthOrder::PreOrder, params.start, &mut log)?
            }
            (Algorithm::PostOrder, Structure::Tree(t)) => {
                tree::depth_first(t, DepthOrder::PostOrder, params.start, &mut log)?
            }
            (Algorithm::TreeBfs, Structure::Tree(t)) => tree::level_order(t, params.start, &mut log)?,
            (algorithm, structure) => {
                return Err(TraceError::StructureMismatch {
                    algorithm,
                    expected: algorithm.family(),
                    got: structure.family(),
                })
            }
        }

        debug!(
            algorithm = self.key(),
            steps = log.len(),
            bytes = log.memory_usage(),
            "trace recorded"
        );
        Ok(log.finish(self))
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for Algorithm {
    type Err = TraceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Algorithm::ALL
            .iter()
            .copied()
            .find(|a| a.key() == wanted)
            .ok_or_else(|| TraceError::UnknownAlgorithm {
                name: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::Tree;
    use crate::trace::DEFAULT_STEP_LIMIT;

    #[test]
    fn test_parse_names() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.key().parse::<Algorithm>(), Ok(algorithm));
        }
        assert_eq!(" Bubble ".parse::<Algorithm>(), Ok(Algorithm::Bubble));
        assert!(matches!(
            "heap".parse::<Algorithm>(),
            Err(TraceError::UnknownAlgorithm { .. })
        ));
    }

    #[test]
    fn test_cycle_wraps() {
        assert_eq!(Algorithm::TreeBfs.next(), Algorithm::Bubble);
        assert_eq!(Algorithm::Bubble.prev(), Algorithm::TreeBfs);
        assert_eq!(Algorithm::Merge.next(), Algorithm::GraphBfs);
    }

    #[test]
    fn test_family_mismatch() {
        let structure = Structure::Tree(Tree::from_values(&[1]));
        let err = Algorithm::Quick
            .trace(&structure, StartParams::default(), DEFAULT_STEP_LIMIT)
            .unwrap_err();
        assert_eq!(
            err,
            TraceError::StructureMismatch {
                algorithm: Algorithm::Quick,
                expected: Family::Sorting,
                got: Family::Tree,
            }
        );
    }

    #[test]
    fn test_default_delays() {
        assert_eq!(Algorithm::Merge.default_delay(), Duration::from_millis(51));
        assert_eq!(Algorithm::GraphDfs.default_delay(), Duration::from_millis(1000));
        assert_eq!(Algorithm::PostOrder.default_delay(), Duration::from_millis(800));
    }
}
