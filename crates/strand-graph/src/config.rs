//! Graph configuration parameters.

use strand_array::ArrayConfig;

/// Configuration for a [`Graph`](crate::Graph).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GraphConfig {
    /// Maximum number of node slots the arena may hold.
    ///
    /// Released slots are reused, so this bounds live nodes plus any
    /// slots not yet recycled. Default: [`Self::DEFAULT_MAX_NODES`].
    pub max_nodes: u32,

    /// Config handed to every node's link array.
    pub links: ArrayConfig,
}

impl GraphConfig {
    /// Every index a `NodeId` can express.
    pub const DEFAULT_MAX_NODES: u32 = u32::MAX;

    /// Create a config with the given node limit and default link storage.
    pub fn new(max_nodes: u32) -> Self {
        Self {
            max_nodes,
            links: ArrayConfig::default(),
        }
    }

    /// Replace the link storage config.
    pub fn with_links(mut self, links: ArrayConfig) -> Self {
        self.links = links;
        self
    }
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_NODES)
    }
}
