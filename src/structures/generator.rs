//! Seeded source of fresh structures

use super::array::generate_array;
use super::graph::generate_graph;
use super::tree::generate_tree;
use super::Structure;
use crate::algorithm::Family;
use crate::config::Config;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

/// Owns the random number generator shared by all structure generators.
///
/// With a seed, the sequence of generated structures is fully reproducible.
pub struct Generator {
    rng: StdRng,
}

impl Generator {
    pub fn seeded(seed: u64) -> Self {
        Generator {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Generator {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Generator::seeded(seed),
            None => Generator::from_entropy(),
        }
    }

    /// Generate a new structure of the given family using `config`
    pub fn structure(&mut self, family: Family, config: &Config) -> Structure {
        let structure = match family {
            Family::Sorting => Structure::Array(generate_array(
                &mut self.rng,
                config.array.size,
                config.array.min,
                config.array.max,
            )),
            Family::Graph => Structure::Graph(generate_graph(
                &mut self.rng,
                config.graph.node_count,
                &config.graph.layout,
            )),
            Family::Tree => Structure::Tree(generate_tree(
                &mut self.rng,
                config.tree.value_count,
                config.tree.min,
                config.tree.max,
                &config.tree.layout,
            )),
        };
        debug!(%family, "generated structure");
        structure
    }
}
