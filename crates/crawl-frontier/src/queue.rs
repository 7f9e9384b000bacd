use std::cmp::Ordering;
use std::collections::BinaryHeap;

use serde::{Deserialize, Serialize};

use crate::CrawlRequest;

/// Order in which pending requests are served.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CrawlStrategy {
    /// Shallowest request first.
    #[default]
    BreadthFirst,
    /// Deepest request first.
    DepthFirst,
}

#[derive(Debug)]
struct QueuedRequest {
    /// Lower ranks are served first.
    rank: u32,
    sequence: u64,
    request: CrawlRequest,
}

// `BinaryHeap` is a max-heap, so the request that must be served next compares greatest.
impl Ord for QueuedRequest {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .rank
            .cmp(&self.rank)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for QueuedRequest {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for QueuedRequest {
    fn eq(&self, other: &Self) -> bool {
        self.sequence == other.sequence
    }
}

impl Eq for QueuedRequest {}

/// Priority queue over admitted requests keyed by `(rank, admission sequence)`, where the
/// rank is derived from `crawl_depth` and the strategy at push time.
///
/// Requests of equal depth are served first-in, first-out.
#[derive(Debug, Default)]
pub struct RequestQueue {
    strategy: CrawlStrategy,
    heap: BinaryHeap<QueuedRequest>,
    next_sequence: u64,
}

impl RequestQueue {
    pub fn new(strategy: CrawlStrategy) -> Self {
        Self {
            strategy,
            heap: BinaryHeap::new(),
            next_sequence: 0,
        }
    }

    pub fn strategy(&self) -> CrawlStrategy {
        self.strategy
    }

    pub fn push(&mut self, request: CrawlRequest) {
        let rank = match self.strategy {
            CrawlStrategy::BreadthFirst => request.crawl_depth(),
            CrawlStrategy::DepthFirst => u32::MAX - request.crawl_depth(),
        };
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.heap.push(QueuedRequest {
            rank,
            sequence,
            request,
        });
    }

    pub fn pop(&mut self) -> Option<CrawlRequest> {
        self.heap.pop().map(|queued| queued.request)
    }

    pub fn has_pending(&self) -> bool {
        !self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
