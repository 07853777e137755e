//! Product record attached to a campaign by the selector.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a product eligible for campaign assignment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for ProductId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ProductId {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

/// A product as held inside a campaign.
///
/// Produced by the selector, which may annotate each record with ranking
/// metadata. The registry itself only ever inspects the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    /// Historical-performance score attached by the selector, when available.
    pub score: Option<f64>,
    /// 1-based position in the selector's ranking, when available.
    pub rank: Option<u32>,
}

impl Product {
    /// Creates a bare product record without ranking metadata.
    pub fn new(id: ProductId) -> Self {
        Self {
            id,
            score: None,
            rank: None,
        }
    }

    pub fn with_score(mut self, score: f64) -> Self {
        self.score = Some(score);
        self
    }

    pub fn with_rank(mut self, rank: u32) -> Self {
        self.rank = Some(rank);
        self
    }
}
