//! Learning-rate, exploration and discount configuration

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Runtime configuration of a Q-learning agent.
///
/// # Examples
///
/// ```
/// use pacai::learning::LearningParams;
///
/// let params = LearningParams::default()
///     .with_alpha(0.5)
///     .with_epsilon(0.1)
///     .with_num_training(200);
/// assert!(params.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LearningParams {
    /// Step size of each update
    pub alpha: f64,
    /// Probability of taking a uniformly random action
    pub epsilon: f64,
    /// Discount applied to the value of the next state
    pub gamma: f64,
    /// Number of episodes during which the agent explores and learns
    pub num_training: usize,
}

impl LearningParams {
    pub fn new(alpha: f64, epsilon: f64, gamma: f64) -> Self {
        Self {
            alpha,
            epsilon,
            gamma,
            num_training: 0,
        }
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    pub fn with_gamma(mut self, gamma: f64) -> Self {
        self.gamma = gamma;
        self
    }

    pub fn with_num_training(mut self, num_training: usize) -> Self {
        self.num_training = num_training;
        self
    }

    /// Stop exploring and learning: epsilon and alpha drop to zero.
    pub fn freeze(&mut self) {
        self.epsilon = 0.0;
        self.alpha = 0.0;
    }

    /// Check that alpha, epsilon and gamma lie in `[0, 1]`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] naming the first bad field.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("alpha", self.alpha),
            ("epsilon", self.epsilon),
            ("gamma", self.gamma),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(Error::InvalidConfiguration {
                    message: format!("{name} must be within [0, 1], got {value}"),
                });
            }
        }
        Ok(())
    }

    /// Load and validate parameters from a JSON file. Missing fields take
    /// their default values.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| Error::Io {
            operation: format!("open learning parameters {}", path.display()),
            source,
        })?;
        let params: Self = serde_json::from_reader(file)?;
        params.validate()?;
        Ok(params)
    }

    /// Save parameters to a JSON file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }
}

impl Default for LearningParams {
    fn default() -> Self {
        Self {
            alpha: 0.2,
            epsilon: 0.05,
            gamma: 0.8,
            num_training: 0,
        }
    }
}
