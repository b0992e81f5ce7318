use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::{Error, Result};

/// A configurable scalar mapping, used where a trait or state value is turned
/// into an energy cost or a render size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Scaling {
    /// `factor * x + offset`.
    Linear {
        /// Slope.
        factor: f32,
        /// Constant term.
        offset: f32,
    },
    /// `factor * x^exponent`.
    Power {
        /// Multiplier.
        factor: f32,
        /// Exponent applied to the input.
        exponent: f32,
    },
}

impl Scaling {
    /// Applies the mapping to `x`.
    ///
    /// The power form clamps `x` at zero, so negative inputs such as the
    /// energy of a dead agent map to `factor * 0^exponent`.
    pub fn apply(&self, x: f32) -> f32 {
        match *self {
            Scaling::Linear { factor, offset } => factor * x + offset,
            Scaling::Power { factor, exponent } => factor * x.max(0.0).powf(exponent),
        }
    }

    fn is_finite(&self) -> bool {
        match *self {
            Scaling::Linear { factor, offset } => factor.is_finite() && offset.is_finite(),
            Scaling::Power { factor, exponent } => factor.is_finite() && exponent.is_finite(),
        }
    }

    // 0^exponent is infinite for negative exponents
    fn has_negative_exponent(&self) -> bool {
        matches!(*self, Scaling::Power { exponent, .. } if exponent < 0.0)
    }
}

/// Decides which agents run avoidance steering on a given tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SteeringSchedule {
    /// Only agents at odd indices steer, on every tick.
    OddIndices,
    /// Every living agent steers on every tick.
    AllAgents,
    /// The agent at index `i` steers on tick `t` when `(i + t) % period == 0`.
    /// A period of zero disables steering.
    Interleaved {
        /// Number of ticks between two steering passes of one agent.
        period: usize,
    },
}

impl SteeringSchedule {
    /// Returns `true` if the agent at `index` steers on `tick`.
    pub fn admits(&self, index: usize, tick: u64) -> bool {
        match *self {
            SteeringSchedule::OddIndices => index % 2 == 1,
            SteeringSchedule::AllAgents => true,
            SteeringSchedule::Interleaved { period: 0 } => false,
            SteeringSchedule::Interleaved { period } => {
                (index as u64).wrapping_add(tick).is_multiple_of(period as u64)
            }
        }
    }
}

/// Simulation parameters that control agent creation, motion and rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Params {
    /// Lower world bound, shared by both axes.
    pub world_min: f32,
    /// Upper world bound, shared by both axes.
    pub world_max: f32,
    /// Lower bound of the metabolism trait.
    pub metabolism_min: f32,
    /// Upper bound of the metabolism trait.
    pub metabolism_max: f32,
    /// Lower bound of the fear trait.
    pub fear_min: f32,
    /// Upper bound of the fear trait.
    pub fear_max: f32,
    /// Lower bound of each initial velocity component.
    pub velocity_min: f32,
    /// Upper bound of each initial velocity component.
    pub velocity_max: f32,
    /// Energy every agent starts with.
    pub default_energy: f32,
    /// An agent whose energy drops below this value dies.
    pub energy_dead: f32,
    /// Distance covered per tick by an agent with metabolism 1 and unit velocity.
    pub max_speed: f32,
    /// Maps metabolism to energy burned per unit of time.
    pub energy_scale: Scaling,
    /// Maps energy to the rendered point size.
    pub size_scale: Scaling,
    /// Global per-tick time factor applied to energy decay.
    pub time_factor: f32,
    /// Radius of the neighborhood used for avoidance.
    pub avoid_radius: f32,
    /// Which agents steer on a given tick.
    pub steering: SteeringSchedule,
    /// Alpha written for every agent that is not marked for pruning.
    pub rgb_alpha: f32,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            world_min: -1.0,
            world_max: 1.0,
            metabolism_min: 0.1,
            metabolism_max: 0.5,
            fear_min: 0.5,
            fear_max: 1.0,
            velocity_min: -1.0,
            velocity_max: 1.0,
            default_energy: 1.0,
            energy_dead: 0.0,
            max_speed: 0.005,
            energy_scale: Scaling::Linear {
                factor: 1.0,
                offset: 0.0,
            },
            size_scale: Scaling::Linear {
                factor: 8.0,
                offset: 2.0,
            },
            time_factor: 0.01,
            avoid_radius: 0.1,
            steering: SteeringSchedule::OddIndices,
            rgb_alpha: 1.0,
        }
    }
}

impl Params {
    /// Checks that every range is ordered and every value is usable.
    pub fn validate(&self) -> Result<()> {
        let finite = [
            ("world_min", self.world_min),
            ("world_max", self.world_max),
            ("metabolism_min", self.metabolism_min),
            ("metabolism_max", self.metabolism_max),
            ("fear_min", self.fear_min),
            ("fear_max", self.fear_max),
            ("velocity_min", self.velocity_min),
            ("velocity_max", self.velocity_max),
            ("default_energy", self.default_energy),
            ("energy_dead", self.energy_dead),
            ("max_speed", self.max_speed),
            ("time_factor", self.time_factor),
            ("avoid_radius", self.avoid_radius),
            ("rgb_alpha", self.rgb_alpha),
        ];
        if let Some((name, _)) = finite.iter().find(|(_, v)| !v.is_finite()) {
            return Err(Error::InvalidParams(format!("{name} must be finite")));
        }

        if self.world_min >= self.world_max {
            return Err(Error::InvalidParams(format!(
                "world bounds are empty: [{}, {}]",
                self.world_min, self.world_max
            )));
        }
        let ranges = [
            ("metabolism", self.metabolism_min, self.metabolism_max),
            ("fear", self.fear_min, self.fear_max),
            ("velocity", self.velocity_min, self.velocity_max),
        ];
        for (name, min, max) in ranges {
            if min > max {
                return Err(Error::InvalidParams(format!(
                    "{name} range is inverted: [{min}, {max}]"
                )));
            }
        }

        if self.time_factor < 0.0 {
            return Err(Error::InvalidParams(
                "time_factor must not be negative".into(),
            ));
        }
        if self.avoid_radius <= 0.0 {
            return Err(Error::InvalidParams(
                "avoid_radius must be positive".into(),
            ));
        }
        if !self.energy_scale.is_finite() || !self.size_scale.is_finite() {
            return Err(Error::InvalidParams(
                "scaling coefficients must be finite".into(),
            ));
        }
        if self.energy_scale.has_negative_exponent() || self.size_scale.has_negative_exponent() {
            return Err(Error::InvalidParams(
                "power scaling exponents must not be negative".into(),
            ));
        }
        Ok(())
    }

    /// Parses and validates parameters from a JSON document.
    ///
    /// Missing fields take their default value.
    pub fn from_json(json: &str) -> Result<Self> {
        let params: Params = serde_json::from_str(json)?;
        params.validate()?;
        Ok(params)
    }

    /// Loads and validates parameters from a JSON file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Distance an agent with the given metabolism covers per unit of velocity.
    pub fn move_amount(&self, metabolism: f32) -> f32 {
        self.max_speed * metabolism
    }

    /// Energy an agent with the given metabolism burns in one tick.
    pub fn energy_cost(&self, metabolism: f32) -> f32 {
        self.energy_scale.apply(metabolism) * self.time_factor
    }
}
