//! Run configuration with the application defaults
//!
//! Defaults: 20-element arrays with values in `[10, 309]`, 8-node graphs,
//! 15-value trees with values in `[1, 100]`, sorting speed 50 (51 ms per
//! step), 1 s per graph step and 800 ms per tree step.

use crate::algorithm::{Algorithm, Family};
use crate::errors::ConfigError;
use crate::structures::{GraphLayout, TreeLayout};
use crate::trace::DEFAULT_STEP_LIMIT;
use std::time::Duration;

pub const MAX_ARRAY_SIZE: usize = 200;
/// Array sizes reachable with the in-app size keys
pub const MIN_INTERACTIVE_ARRAY_SIZE: usize = 5;
pub const MAX_INTERACTIVE_ARRAY_SIZE: usize = 50;
pub const MAX_NODE_COUNT: usize = 64;
pub const MIN_SPEED: u8 = 1;
pub const MAX_SPEED: u8 = 100;

#[derive(Debug, Clone, PartialEq)]
pub struct ArrayConfig {
    pub size: usize,
    pub min: i32,
    pub max: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GraphConfig {
    pub node_count: usize,
    pub layout: GraphLayout,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TreeConfig {
    pub value_count: usize,
    pub min: i32,
    pub max: i32,
    pub layout: TreeLayout,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackConfig {
    /// Sorting speed; the per-step delay is `101 - speed` milliseconds
    pub speed: u8,
    pub graph_delay: Duration,
    pub tree_delay: Duration,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub array: ArrayConfig,
    pub graph: GraphConfig,
    pub tree: TreeConfig,
    pub playback: PlaybackConfig,
    /// Seed for reproducible structures; `None` draws from the OS
    pub seed: Option<u64>,
    /// Step log budget in bytes
    pub step_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            array: ArrayConfig {
                size: 20,
                min: 10,
                max: 309,
            },
            graph: GraphConfig {
                node_count: 8,
                layout: GraphLayout::default(),
            },
            tree: TreeConfig {
                value_count: 15,
                min: 1,
                max: 100,
                layout: TreeLayout::default(),
            },
            playback: PlaybackConfig {
                speed: 50,
                graph_delay: Duration::from_millis(1000),
                tree_delay: Duration::from_millis(800),
            },
            seed: None,
            step_limit: DEFAULT_STEP_LIMIT,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_count("array size", self.array.size, MAX_ARRAY_SIZE)?;
        check_count("graph node count", self.graph.node_count, MAX_NODE_COUNT)?;
        check_count("tree value count", self.tree.value_count, MAX_NODE_COUNT)?;
        check_bounds("array values", self.array.min, self.array.max)?;
        check_bounds("tree values", self.tree.min, self.tree.max)?;

        let speed = self.playback.speed;
        if !(MIN_SPEED..=MAX_SPEED).contains(&speed) {
            return Err(ConfigError::InvalidRange {
                field: "speed",
                value: i64::from(speed),
                min: i64::from(MIN_SPEED),
                max: i64::from(MAX_SPEED),
            });
        }
        if self.step_limit == 0 {
            return Err(ConfigError::Zero {
                field: "step limit",
            });
        }
        Ok(())
    }

    /// Sorting delay derived from the speed setting
    pub fn sort_delay(&self) -> Duration {
        let speed = self.playback.speed.clamp(MIN_SPEED, MAX_SPEED);
        Duration::from_millis(101 - u64::from(speed))
    }

    /// Playback delay for a run of `algorithm`
    pub fn delay_for(&self, algorithm: Algorithm) -> Duration {
        match algorithm.family() {
            Family::Sorting => self.sort_delay(),
            Family::Graph => self.playback.graph_delay,
            Family::Tree => self.playback.tree_delay,
        }
    }

    /// Raise or lower the sorting speed, staying within bounds
    pub fn adjust_speed(&mut self, delta: i16) {
        let speed = (i16::from(self.playback.speed) + delta)
            .clamp(i16::from(MIN_SPEED), i16::from(MAX_SPEED));
        self.playback.speed = u8::try_from(speed).unwrap_or(MAX_SPEED);
    }

    /// Grow or shrink the array size within the interactive range.
    ///
    /// A size set outside that range on the command line is pulled back
    /// into it on the first adjustment.
    pub fn adjust_array_size(&mut self, delta: isize) {
        self.array.size = self
            .array
            .size
            .saturating_add_signed(delta)
            .clamp(MIN_INTERACTIVE_ARRAY_SIZE, MAX_INTERACTIVE_ARRAY_SIZE);
    }
}

fn check_count(field: &'static str, value: usize, max: usize) -> Result<(), ConfigError> {
    if value == 0 {
        return Err(ConfigError::Zero { field });
    }
    if value > max {
        return Err(ConfigError::InvalidRange {
            field,
            value: i64::try_from(value).unwrap_or(i64::MAX),
            min: 1,
            max: i64::try_from(max).unwrap_or(i64::MAX),
        });
    }
    Ok(())
}

fn check_bounds(field: &'static str, min: i32, max: i32) -> Result<(), ConfigError> {
    if min > max {
        return Err(ConfigError::InvertedRange { field, min, max });
    }
    Ok(())
}
