//! Batch executor.

use crate::client::ApiClient;
use crate::types::{AudioPayload, SpeechRequest};
use crate::Error;
use futures::stream::{self, StreamExt};
use std::time::{Duration, Instant};
use tracing::{info, warn};

#[derive(Debug)]
pub struct BatchResult<T> {
    /// Successful items keyed by their input index, in ascending index order.
    pub successes: Vec<(usize, T)>,
    pub failures: Vec<(usize, Error)>,
    pub execution_time: Duration,
    pub total_processed: usize,
}

impl<T> BatchResult<T> {
    pub fn new() -> Self {
        Self {
            successes: Vec::new(),
            failures: Vec::new(),
            execution_time: Duration::ZERO,
            total_processed: 0,
        }
    }
    pub fn add_success(&mut self, i: usize, r: T) {
        self.successes.push((i, r));
        self.total_processed += 1;
    }
    pub fn add_failure(&mut self, i: usize, e: Error) {
        self.failures.push((i, e));
        self.total_processed += 1;
    }
    pub fn all_succeeded(&self) -> bool {
        self.failures.is_empty()
    }
    pub fn success_count(&self) -> usize {
        self.successes.len()
    }
    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }
    pub fn success_rate(&self) -> f64 {
        if self.total_processed == 0 {
            0.0
        } else {
            self.successes.len() as f64 / self.total_processed as f64
        }
    }
}

impl<T> Default for BatchResult<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchStrategy {
    Sequential,
    Concurrent { max_concurrency: usize },
}

impl BatchStrategy {
    fn width(&self) -> usize {
        match self {
            BatchStrategy::Sequential => 1,
            BatchStrategy::Concurrent { max_concurrency } => (*max_concurrency).max(1),
        }
    }
}

impl Default for BatchStrategy {
    fn default() -> Self {
        BatchStrategy::Concurrent { max_concurrency: 4 }
    }
}

#[derive(Debug, Clone)]
pub struct BatchConfig {
    pub strategy: BatchStrategy,
    /// When false, no new chunk is started after the first failure and
    /// chunks still in flight are dropped.
    pub continue_on_error: bool,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            strategy: BatchStrategy::default(),
            continue_on_error: true,
        }
    }
}

impl BatchConfig {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn with_strategy(mut self, s: BatchStrategy) -> Self {
        self.strategy = s;
        self
    }
    pub fn with_continue_on_error(mut self, c: bool) -> Self {
        self.continue_on_error = c;
        self
    }
}

impl ApiClient {
    /// Synthesize every chunk with the voice settings of `template`.
    ///
    /// Each chunk is an independent `synthesize_chunk` call; `template.text`
    /// is ignored. Results carry the index of the chunk they belong to.
    pub async fn synthesize_chunks(
        &self,
        template: &SpeechRequest,
        chunks: &[String],
        config: &BatchConfig,
    ) -> BatchResult<AudioPayload> {
        let start = Instant::now();
        let mut result = BatchResult::new();

        let mut in_flight = stream::iter(chunks.iter().enumerate())
            .map(|(i, chunk)| {
                let request = template.with_text(chunk.as_str());
                async move { (i, self.synthesize_chunk(&request).await) }
            })
            .buffer_unordered(config.strategy.width());

        while let Some((i, outcome)) = in_flight.next().await {
            match outcome {
                Ok(audio) => result.add_success(i, audio),
                Err(e) => {
                    warn!(chunk = i, error = %e, "Chunk synthesis failed");
                    result.add_failure(i, e);
                    if !config.continue_on_error {
                        break;
                    }
                }
            }
        }

        result.successes.sort_by_key(|(i, _)| *i);
        result.failures.sort_by_key(|(i, _)| *i);
        result.execution_time = start.elapsed();
        info!(
            chunks = chunks.len(),
            succeeded = result.success_count(),
            failed = result.failure_count(),
            elapsed_ms = result.execution_time.as_millis() as u64,
            "Chunk batch finished"
        );
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequential_runs_one_at_a_time() {
        assert_eq!(BatchStrategy::Sequential.width(), 1);
        assert_eq!(
            BatchStrategy::Concurrent { max_concurrency: 0 }.width(),
            1
        );
        assert_eq!(BatchStrategy::default().width(), 4);
    }

    #[test]
    fn result_counts() {
        let mut r: BatchResult<u8> = BatchResult::new();
        assert_eq!(r.success_rate(), 0.0);
        r.add_success(0, 1);
        r.add_failure(1, Error::remote(500, "boom"));
        assert_eq!(r.total_processed, 2);
        assert!(!r.all_succeeded());
        assert_eq!(r.success_rate(), 0.5);
    }
}
