//! Codec configuration

/// How deserialization treats records that are not in column-major,
/// row-ascending order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderPolicy {
    /// Fail with `UnsortedRecords`
    #[default]
    Reject,
    /// Sort records by `(column, row)`; duplicates still fail
    Sort,
}

/// Configuration for reading serialized matrices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecConfig {
    /// Record ordering policy
    pub order_policy: OrderPolicy,
    /// Upper bound on entries reserved from the header before any record
    /// has been read
    pub preallocation_limit: usize,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            order_policy: OrderPolicy::Reject,
            preallocation_limit: 1 << 20,
        }
    }
}

impl CodecConfig {
    /// Default configuration: unordered records are rejected
    pub fn strict() -> Self {
        Self::default()
    }

    /// Accept records in any order
    pub fn lenient() -> Self {
        Self::default().with_order_policy(OrderPolicy::Sort)
    }

    pub fn with_order_policy(mut self, order_policy: OrderPolicy) -> Self {
        self.order_policy = order_policy;
        self
    }

    pub fn with_preallocation_limit(mut self, limit: usize) -> Self {
        self.preallocation_limit = limit;
        self
    }
}
