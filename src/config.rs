//! Simulation configuration supplied by the host.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::automaton::{parse_rule, random_grid, Dimension, Rule};
use crate::error::{Error, Result};
use crate::state::State;

/// Parameters for a randomly seeded run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Birth/survival rulestring, e.g. `"B3S2,3"`.
    pub rule: String,

    /// Fraction of cells to seed alive, in `[0, 1]`.
    pub density: f64,

    /// Width and height of each layer.
    pub side: u32,

    /// Number of z layers.
    pub length: u32,

    /// RNG seed; a fresh one is drawn (and logged) when absent.
    pub seed: Option<u64>,

    /// Delay between generations, for the host loop.
    pub tick_interval_ms: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            rule: "B6S5,6,7".to_string(),
            density: 0.5,
            side: 20,
            length: 2,
            seed: None,
            tick_interval_ms: 1100,
        }
    }
}

impl SimulationConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Check every field up front and return the parsed rule.
    pub fn validate(&self) -> Result<Rule> {
        let rule = parse_rule(&self.rule)?;
        if !(0.0..=1.0).contains(&self.density) {
            return Err(Error::InvalidDensity(self.density));
        }
        Dimension::new(self.side, self.side, self.length)?;
        Ok(rule)
    }

    /// Validate, seed a random grid, and wrap it in a fresh `State`.
    pub fn build(&self) -> Result<State> {
        let rule = self.validate()?;
        let seed = self.seed.unwrap_or_else(rand::random);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let grid = random_grid(self.density, self.side, self.length, &mut rng)?;

        tracing::info!(
            %rule,
            seed,
            dim = %grid.dim(),
            population = grid.population(),
            "created simulation"
        );
        Ok(State::new(grid, rule).with_tick_interval(self.tick_interval_ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SimulationConfig::default();
        assert_eq!(config.rule, "B6S5,6,7");
        assert_eq!(config.side, 20);
        assert_eq!(config.length, 2);
        assert_eq!(config.tick_interval_ms, 1100);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = SimulationConfig::from_json(r#"{"rule": "B3S2,3", "seed": 9}"#).unwrap();
        assert_eq!(config.rule, "B3S2,3");
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.side, 20);
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            SimulationConfig::from_json("{rule:"),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_validate_fails_fast_on_bad_rule() {
        let config = SimulationConfig {
            rule: "B3/S23".to_string(),
            ..Default::default()
        };
        assert!(matches!(config.build(), Err(Error::InvalidRuleToken(_))));

        let config = SimulationConfig {
            rule: "23/3".to_string(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(Error::InvalidRuleFormat(_))));
    }

    #[test]
    fn test_validate_bounds() {
        let config = SimulationConfig {
            density: -0.1,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(Error::InvalidDensity(_))));

        let config = SimulationConfig {
            length: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidDimension { .. })
        ));

        let config = SimulationConfig {
            side: u32::MAX,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidDimension { .. })
        ));
    }

    #[test]
    fn test_seeded_build_is_reproducible() {
        let config = SimulationConfig {
            seed: Some(1234),
            side: 6,
            length: 3,
            ..Default::default()
        };
        let a = config.build().unwrap();
        let b = config.build().unwrap();
        assert_eq!(a.grid(), b.grid());
        assert_eq!(a.generation(), 0);
        assert_eq!(a.tick_interval_ms(), 1100);
        assert_eq!(a.rule().to_string(), "B6S5,6,7");
    }
}
