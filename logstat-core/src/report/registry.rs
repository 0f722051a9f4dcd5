use crate::report::endpoint_stats::EndpointStats;
use ahash::AHashMap;

/// Endpoint key -> statistics table for one run.
///
/// Iteration follows the order in which keys were first recorded.
#[derive(Debug, Default)]
pub struct StatsRegistry {
    index: AHashMap<String, usize>,
    stats: Vec<EndpointStats>,
}

impl StatsRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one request of `response_time` seconds against `key`,
    /// creating the entry on first sight.
    pub fn record(&mut self, key: &str, response_time: f64) {
        let slot = match self.index.get(key) {
            Some(&slot) => slot,
            None => {
                self.stats.push(EndpointStats::new(key));
                self.index.insert(key.to_string(), self.stats.len() - 1);
                self.stats.len() - 1
            }
        };

        let stats = &mut self.stats[slot];
        stats.add_request();
        stats.add_response_time(response_time);
    }

    pub fn values(&self) -> impl Iterator<Item = &EndpointStats> {
        self.stats.iter()
    }

    pub fn get(&self, key: &str) -> Option<&EndpointStats> {
        self.index.get(key).map(|&slot| &self.stats[slot])
    }

    pub fn len(&self) -> usize {
        self.stats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }

    /// Total requests across every endpoint.
    pub fn total_requests(&self) -> u64 {
        self.stats.iter().map(EndpointStats::total_requests).sum()
    }

    pub fn clear(&mut self) {
        self.index.clear();
        self.stats.clear();
    }
}
