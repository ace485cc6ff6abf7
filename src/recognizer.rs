use std::{
    sync::{Mutex, PoisonError},
    time::Duration,
};

use async_trait::async_trait;
use rand::{rngs::StdRng, SeedableRng};
use tracing::debug;

use crate::combinations::{dto::CombinationAnalysis, services::analyze};
use crate::foods::{repo_types::FoodItem, services::detect_food};

/// Image-driven lookups. The only implementation is simulated; the trait is the
/// seam where a real recognition backend would plug in.
#[async_trait]
pub trait Recognizer: Send + Sync {
    async fn detect_food(&self, image_ref: &str) -> &'static FoodItem;
    async fn analyze_combinations(&self, image_ref: &str, health_notes: &str)
        -> CombinationAnalysis;
}

/// Waits a fixed delay, then answers with a random canned result.
pub struct MockRecognizer {
    delay: Duration,
    rng: Mutex<StdRng>,
}

impl MockRecognizer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    #[cfg(test)]
    pub fn seeded(delay: Duration, seed: u64) -> Self {
        Self {
            delay,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    async fn simulate_latency(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }

    fn with_rng<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> T {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut rng)
    }
}

#[async_trait]
impl Recognizer for MockRecognizer {
    async fn detect_food(&self, image_ref: &str) -> &'static FoodItem {
        self.simulate_latency().await;
        let food = self.with_rng(|rng| detect_food(rng));
        debug!(image_ref, food = food.id, "food detected");
        food
    }

    async fn analyze_combinations(
        &self,
        image_ref: &str,
        health_notes: &str,
    ) -> CombinationAnalysis {
        self.simulate_latency().await;
        self.with_rng(|rng| analyze(rng, image_ref, health_notes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[tokio::test]
    async fn same_seed_same_answers() {
        let a = MockRecognizer::seeded(Duration::ZERO, 42);
        let b = MockRecognizer::seeded(Duration::ZERO, 42);
        for _ in 0..5 {
            assert_eq!(a.detect_food("x").await.id, b.detect_food("y").await.id);
            assert_eq!(
                a.analyze_combinations("x", "").await.scenario_id,
                b.analyze_combinations("y", "").await.scenario_id
            );
        }
    }

    #[tokio::test]
    async fn analysis_applies_health_notes() {
        let r = MockRecognizer::seeded(Duration::ZERO, 1);
        let a = r.analyze_combinations("img", "so tired").await;
        assert_eq!(
            a.matched_concern,
            Some(crate::combinations::services::HealthConcern::ColdWeak)
        );
    }

    #[tokio::test]
    async fn waits_configured_delay() {
        let r = MockRecognizer::seeded(Duration::from_millis(30), 3);
        let started = Instant::now();
        r.detect_food("img").await;
        assert!(started.elapsed() >= Duration::from_millis(30));
    }
}
