//! Service configuration.

/// Default page size when the caller supplies none.
pub const DEFAULT_LIMIT: u32 = 20;

/// Hard ceiling on page size; larger requests are clamped, not rejected.
pub const MAX_LIMIT: u32 = 100;

/// Which zones a location check may match.
///
/// The upstream designation data carries expired zones, and whether they
/// should count as matches is a policy decision, not an accident of the
/// data. The default matches every zone in the snapshot regardless of
/// status, mirroring the behavior of the original lookup route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchFilter {
    /// Match all zones in the snapshot regardless of status.
    #[default]
    All,
    /// Match only zones that are active and unexpired at check time.
    ActiveOnly,
}

/// Configuration for [`LookupService`](super::LookupService).
#[derive(Debug, Clone)]
pub struct ServiceSettings {
    default_limit: u32,
    max_limit: u32,
    match_filter: MatchFilter,
}

impl ServiceSettings {
    /// Settings with the standard defaults.
    pub fn new() -> Self {
        Self {
            default_limit: DEFAULT_LIMIT,
            max_limit: MAX_LIMIT,
            match_filter: MatchFilter::default(),
        }
    }

    /// Override the default page size.
    pub fn with_default_limit(mut self, limit: u32) -> Self {
        self.default_limit = limit.max(1);
        self
    }

    /// Override the page size ceiling.
    pub fn with_max_limit(mut self, limit: u32) -> Self {
        self.max_limit = limit.max(1);
        self
    }

    /// Set the location-check match policy.
    pub fn with_match_filter(mut self, filter: MatchFilter) -> Self {
        self.match_filter = filter;
        self
    }

    /// Default page size.
    pub fn default_limit(&self) -> u32 {
        self.default_limit
    }

    /// Page size ceiling.
    pub fn max_limit(&self) -> u32 {
        self.max_limit
    }

    /// Location-check match policy.
    pub fn match_filter(&self) -> MatchFilter {
        self.match_filter
    }

    /// Clamp a requested page size into `1..=max_limit`, falling back to
    /// the default when absent or zero.
    pub fn resolve_limit(&self, requested: Option<u32>) -> u32 {
        match requested {
            None | Some(0) => self.default_limit.min(self.max_limit),
            Some(limit) => limit.min(self.max_limit),
        }
    }
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self::new()
    }
}
