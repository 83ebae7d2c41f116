use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Starting exploration rate.
pub const EPSILON_START: f32 = 1.0;
/// Multiplicative decay applied by `decay_epsilon`.
pub const EPSILON_DECAY: f32 = 0.995;
/// Exploration never drops below this floor.
pub const EPSILON_MIN: f32 = 0.01;

const HIDDEN_SIZE: usize = 24;

/// Placeholder scoring surface over a one dimensional state (the raw score).
/// A small feed-forward net with two ReLU hidden layers and randomly
/// initialized weights. No training step is wired in, so the estimates are
/// arbitrary; the shape is what matters for the extension seam.
pub struct ValueEstimator {
    w1: Vec<f32>,
    b1: Vec<f32>,
    w2: Vec<Vec<f32>>,
    b2: Vec<f32>,
    w3: Vec<Vec<f32>>,
    b3: Vec<f32>,
}

impl ValueEstimator {
    fn new(action_size: usize, rng: &mut StdRng) -> ValueEstimator {
        let mut weight = |_: usize| rng.gen_range(-0.5f32..0.5);
        ValueEstimator {
            w1: (0..HIDDEN_SIZE).map(&mut weight).collect(),
            b1: vec![0.0; HIDDEN_SIZE],
            w2: (0..HIDDEN_SIZE)
                .map(|_| (0..HIDDEN_SIZE).map(&mut weight).collect())
                .collect(),
            b2: vec![0.0; HIDDEN_SIZE],
            w3: (0..action_size)
                .map(|_| (0..HIDDEN_SIZE).map(&mut weight).collect())
                .collect(),
            b3: vec![0.0; action_size],
        }
    }

    /// Estimated value of every action for the given state.
    pub fn estimate(&self, state: f32) -> Vec<f32> {
        let h1: Vec<f32> = self
            .w1
            .iter()
            .zip(self.b1.iter())
            .map(|(w, b)| relu(w * state + b))
            .collect();
        let h2: Vec<f32> = self
            .w2
            .iter()
            .zip(self.b2.iter())
            .map(|(weights, b)| {
                relu(weights.iter().zip(h1.iter()).map(|(w, h)| w * h).sum::<f32>() + b)
            })
            .collect();
        self.w3
            .iter()
            .zip(self.b3.iter())
            .map(|(weights, b)| weights.iter().zip(h2.iter()).map(|(w, h)| w * h).sum::<f32>() + b)
            .collect()
    }
}

fn relu(x: f32) -> f32 {
    x.max(0.0)
}

/// Epsilon-greedy recommender over the fixed action space. Stands in for a
/// learned policy: with probability epsilon it explores a uniformly random
/// action index, otherwise it exploits the argmax of the untrained value
/// estimates. It is never consulted by the decision facade.
pub struct AdaptiveStrategy {
    epsilon: f32,
    epsilon_decay: f32,
    epsilon_min: f32,
    action_size: usize,
    estimator: ValueEstimator,
    rng: StdRng,
}

impl AdaptiveStrategy {
    /// Associated function for creating a new `AdaptiveStrategy` over an
    /// action space of `action_size` actions.
    pub fn new(action_size: usize) -> AdaptiveStrategy {
        AdaptiveStrategy::with_rng(action_size, StdRng::from_entropy())
    }

    /// Associated function for creating a deterministic `AdaptiveStrategy`.
    pub fn with_seed(action_size: usize, seed: u64) -> AdaptiveStrategy {
        AdaptiveStrategy::with_rng(action_size, StdRng::seed_from_u64(seed))
    }

    fn with_rng(action_size: usize, mut rng: StdRng) -> AdaptiveStrategy {
        let estimator = ValueEstimator::new(action_size, &mut rng);
        AdaptiveStrategy {
            epsilon: EPSILON_START,
            epsilon_decay: EPSILON_DECAY,
            epsilon_min: EPSILON_MIN,
            action_size,
            estimator,
            rng,
        }
    }

    /// Recommends an index into the action space for the given state.
    ///
    /// Epsilon is not decayed here; a training loop would call
    /// `decay_epsilon` once per step.
    pub fn recommend(&mut self, state: u8) -> usize {
        if self.rng.gen::<f32>() < self.epsilon {
            return self.rng.gen_range(0..self.action_size);
        }
        let values = self.estimator.estimate(state as f32);
        let mut best = 0;
        for (i, value) in values.iter().enumerate() {
            if *value > values[best] {
                best = i;
            }
        }
        best
    }

    /// Decays epsilon toward its floor.
    pub fn decay_epsilon(&mut self) {
        self.epsilon = (self.epsilon * self.epsilon_decay).max(self.epsilon_min);
    }

    pub fn epsilon(&self) -> f32 {
        self.epsilon
    }

    pub fn action_size(&self) -> usize {
        self.action_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recommendations_stay_in_the_action_space() {
        let mut strategy = AdaptiveStrategy::with_seed(5, 99);
        for state in 4..=21 {
            assert!(strategy.recommend(state) < 5);
        }
    }

    #[test]
    fn exploit_path_is_deterministic() {
        let mut strategy = AdaptiveStrategy::with_seed(5, 7);
        strategy.epsilon = 0.0;
        let first = strategy.recommend(12);
        for _ in 0..10 {
            assert_eq!(strategy.recommend(12), first);
        }
    }

    #[test]
    fn epsilon_decays_to_the_floor() {
        let mut strategy = AdaptiveStrategy::with_seed(5, 7);
        assert_eq!(strategy.epsilon(), EPSILON_START);
        strategy.decay_epsilon();
        assert!((strategy.epsilon() - EPSILON_START * EPSILON_DECAY).abs() < 1e-6);
        for _ in 0..2000 {
            strategy.decay_epsilon();
        }
        assert_eq!(strategy.epsilon(), EPSILON_MIN);
    }

    #[test]
    fn estimator_scores_every_action() {
        let mut rng = StdRng::seed_from_u64(3);
        let estimator = ValueEstimator::new(5, &mut rng);
        let values = estimator.estimate(16.0);
        assert_eq!(values.len(), 5);
        // Pure function of the state.
        assert_eq!(values, estimator.estimate(16.0));
    }
}
