//! The sky engine, bound to one parameter set at construction.
//!
//! Positions are computed for the evening that begins a Hebrew date. The
//! methods live next to what they compute: [`crate::sun`], [`crate::moon`],
//! [`crate::latitude`] and [`crate::visibility`].

use crate::model::{Model, ModelParameters};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Sky {
    params: ModelParameters,
}

impl Sky {
    pub fn new(params: ModelParameters) -> Self {
        Self { params }
    }

    pub fn for_model(model: Model) -> Self {
        Self::new(ModelParameters::for_model(model))
    }

    pub fn params(&self) -> &ModelParameters {
        &self.params
    }

    pub fn model(&self) -> Model {
        self.params.model
    }
}

impl From<ModelParameters> for Sky {
    fn from(params: ModelParameters) -> Self {
        Self::new(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_treatise() {
        assert_eq!(Sky::default().model(), Model::Treatise);
        assert_eq!(Sky::default(), Sky::for_model(Model::Treatise));
    }

    #[test]
    fn test_bound_parameters() {
        let sky = Sky::from(ModelParameters::refined());
        assert_eq!(sky.model(), Model::Refined);
        assert_eq!(sky.params().mean_path.epoch.year(), 5753);
    }
}
