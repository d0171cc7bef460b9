//! Catalog definitions of wonders.

use serde::{Deserialize, Serialize};

use super::{Wonder, WonderSide, WonderStage};
use crate::cards::Requirements;
use crate::effects::Effect;
use crate::resources::ResourceType;

/// Catalog data of one wonder stage.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WonderStageDefinition {
    #[serde(default)]
    pub requirements: Requirements,
    #[serde(default)]
    pub effects: Vec<Effect>,
}

impl WonderStageDefinition {
    #[must_use]
    pub fn new(requirements: Requirements, effects: Vec<Effect>) -> Self {
        Self {
            requirements,
            effects,
        }
    }
}

/// Catalog data of one side of a wonder.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WonderSideDefinition {
    pub initial_resource: ResourceType,
    pub image: String,
    pub stages: Vec<WonderStageDefinition>,
}

impl WonderSideDefinition {
    pub fn new(initial_resource: ResourceType, image: impl Into<String>) -> Self {
        Self {
            initial_resource,
            image: image.into(),
            stages: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_stage(mut self, requirements: Requirements, effects: Vec<Effect>) -> Self {
        self.stages.push(WonderStageDefinition::new(requirements, effects));
        self
    }
}

/// Catalog data of a wonder, both sides.
///
/// ```
/// use wonders_engine::cards::Requirements;
/// use wonders_engine::effects::Effect;
/// use wonders_engine::resources::ResourceType;
/// use wonders_engine::wonders::{WonderDefinition, WonderSide, WonderSideDefinition};
///
/// let side = WonderSideDefinition::new(ResourceType::Stone, "gizah.png")
///     .with_stage(Requirements::gold(1), vec![Effect::RawPointsIncrease(3)]);
/// let gizah = WonderDefinition::new("Gizah", side.clone(), side);
///
/// let wonder = gizah.create(WonderSide::B);
/// assert_eq!(wonder.side(), WonderSide::B);
/// assert_eq!(wonder.nb_built_stages(), 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WonderDefinition {
    pub name: String,
    pub side_a: WonderSideDefinition,
    pub side_b: WonderSideDefinition,
}

impl WonderDefinition {
    pub fn new(
        name: impl Into<String>,
        side_a: WonderSideDefinition,
        side_b: WonderSideDefinition,
    ) -> Self {
        Self {
            name: name.into(),
            side_a,
            side_b,
        }
    }

    #[must_use]
    pub fn side(&self, side: WonderSide) -> &WonderSideDefinition {
        match side {
            WonderSide::A => &self.side_a,
            WonderSide::B => &self.side_b,
        }
    }

    /// Instantiate a fresh wonder with no stage built.
    #[must_use]
    pub fn create(&self, side: WonderSide) -> Wonder {
        let definition = self.side(side);
        let stages = definition
            .stages
            .iter()
            .map(|stage| WonderStage::new(stage.requirements.clone(), stage.effects.clone()))
            .collect();
        Wonder::new(
            self.name.clone(),
            side,
            definition.initial_resource,
            definition.image.clone(),
            stages,
        )
    }
}
