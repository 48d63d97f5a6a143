pub mod hasher;
pub mod normalize;

pub use self::hasher::hash;
pub use self::normalize::normalize;

use crate::consts::BUCKETS;
use crate::core_types::ParameterVector;
use serde::Serialize;
use std::fmt;

struct Node {
    word: String,
    next: Option<Box<Node>>,
}

/// Snapshot of how evenly a `HashWordSet` spreads its words.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DistributionMetrics {
    pub size: usize,
    pub min_length: usize,
    /// `size / BUCKETS` with integer truncation.
    pub avg_length: usize,
    pub max_length: usize,
    /// Mean squared deviation of chain lengths from `avg_length`. Lower is flatter.
    pub efficiency_factor: f64,
}

impl fmt::Display for DistributionMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "size = {}", self.size)?;
        writeln!(f, "minLength = {}", self.min_length)?;
        writeln!(f, "avgLength = {}", self.avg_length)?;
        writeln!(f, "maxLength = {}", self.max_length)?;
        write!(f, "efficiencyFactor = {}", self.efficiency_factor)
    }
}

/// A set of normalized words stored in a fixed table of 53 separate chains.
///
/// Buckets are chosen by [`hash`] under the set's own weights. There is no
/// resizing and no removal.
pub struct HashWordSet {
    buckets: Vec<Option<Box<Node>>>,
    size: usize,
    weights: ParameterVector,
}

impl HashWordSet {
    /// A set using the default hand-tuned weights.
    pub fn new() -> Self {
        Self::with_weights(ParameterVector::default())
    }

    pub fn with_weights(weights: ParameterVector) -> Self {
        let mut buckets = Vec::with_capacity(BUCKETS);
        buckets.resize_with(BUCKETS, || None);
        Self {
            buckets,
            size: 0,
            weights,
        }
    }

    pub fn weights(&self) -> &ParameterVector {
        &self.weights
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    #[inline]
    fn bucket_of(&self, word: &str) -> usize {
        hash(word, &self.weights, BUCKETS)
    }

    /// Exact lookup of an already-normalized word.
    pub fn contains(&self, word: &str) -> bool {
        self.chain(self.bucket_of(word)).any(|w| w == word)
    }

    /// Normalizes `word` and inserts it at the head of its chain unless present.
    pub fn add(&mut self, word: &str) {
        let norm = normalize(word);
        if self.contains(&norm) {
            return;
        }
        let idx = self.bucket_of(&norm);
        let head = self.buckets[idx].take();
        self.buckets[idx] = Some(Box::new(Node {
            word: norm,
            next: head,
        }));
        self.size += 1;
    }

    /// Words in `bucket`, most recently added first.
    pub fn chain(&self, bucket: usize) -> impl Iterator<Item = &str> + '_ {
        let mut cursor = self.buckets.get(bucket).and_then(|b| b.as_deref());
        std::iter::from_fn(move || {
            let node = cursor?;
            cursor = node.next.as_deref();
            Some(node.word.as_str())
        })
    }

    pub fn chain_lengths(&self) -> Vec<usize> {
        (0..BUCKETS).map(|b| self.chain(b).count()).collect()
    }

    pub fn efficiency_factor(&self) -> DistributionMetrics {
        let avg_length = self.size / BUCKETS;
        let mut min_length = usize::MAX;
        let mut max_length = 0;
        let mut sum_sq = 0.0;

        for len in self.chain_lengths() {
            min_length = min_length.min(len);
            max_length = max_length.max(len);
            let dev = len as f64 - avg_length as f64;
            sum_sq += dev * dev;
        }

        DistributionMetrics {
            size: self.size,
            min_length,
            avg_length,
            max_length,
            efficiency_factor: sum_sq / BUCKETS as f64,
        }
    }
}

impl Default for HashWordSet {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for HashWordSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.efficiency_factor().fmt(f)
    }
}

// Unlink iteratively; the default recursive drop can overflow on long chains.
impl Drop for HashWordSet {
    fn drop(&mut self) {
        for bucket in &mut self.buckets {
            let mut cur = bucket.take();
            while let Some(mut node) = cur {
                cur = node.next.take();
            }
        }
    }
}
