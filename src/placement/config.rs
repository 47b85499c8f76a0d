/// Which earlier placements a new feature must try to avoid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlapScope {
    /// Avoid every feature placed so far in the request.
    #[default]
    Request,
    /// Avoid only features of the same category.
    Category,
}

/// Configuration for the placement pass.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacementConfig {
    /// Clusters per category. Drawn as 1–2 when unset.
    pub clusters: Option<u32>,
    /// Base features per cluster. A query `count` hint takes precedence; drawn as 4–7
    /// when both are unset. Each cluster adds 0–1 on top.
    pub features_per_cluster: Option<u32>,
    /// Placement attempts per feature before the last candidate is taken as-is.
    pub max_attempts: u32,
    /// Failed attempts after which a candidate is accepted even if it overlaps.
    pub forced_accept_after: u32,
    /// Full width of the cluster-center jitter box around the category center, degrees.
    pub cluster_spread_deg: f64,
    /// Full width of the feature jitter box around its cluster center, degrees.
    pub feature_jitter_deg: f64,
    /// Water bodies get an island hole when a draw exceeds this.
    pub hole_threshold: f64,
    /// Any feature gets a second part when a draw exceeds this.
    pub multipart_threshold: f64,
    /// Base radius of an island hole, degrees.
    pub hole_radius_deg: f64,
    /// Base radius of a second part, degrees.
    pub part_radius_deg: f64,
    pub overlap_scope: OverlapScope,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            clusters: None,
            features_per_cluster: None,
            max_attempts: 8,
            forced_accept_after: 5,
            cluster_spread_deg: 0.8,
            feature_jitter_deg: 0.22,
            hole_threshold: 0.6,
            multipart_threshold: 0.85,
            hole_radius_deg: 0.2,
            part_radius_deg: 0.36,
            overlap_scope: OverlapScope::Request,
        }
    }
}
