//! Error taxonomy of the chart pipeline.

use std::fmt::{Display, Formatter};

use kundali_time::TimeError;
use kundali_vedic_base::VedicError;
use serde::Serialize;
use thiserror::Error;

use crate::config::InvalidConfig;
use crate::input::InputError;

/// Pipeline stages, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Stage {
    Validate,
    Astronomical,
    ChartElements,
    PlanetaryData,
    LunarData,
    Assemble,
}

impl Stage {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Validate => "validate",
            Self::Astronomical => "astronomical",
            Self::ChartElements => "chart elements",
            Self::PlanetaryData => "planetary data",
            Self::LunarData => "lunar data",
            Self::Assemble => "assemble",
        }
    }
}

impl Display for Stage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Failure of one chart computation, classified by the stage that raised it.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ChartError {
    /// Malformed or out-of-range birth data.
    #[error("birth input rejected")]
    Validation(#[source] InputError),
    /// Out-of-range chart settings.
    #[error("chart config rejected")]
    Config(#[source] InvalidConfig),
    /// Julian Day or sidereal-time failure.
    #[error("astronomical stage failed")]
    Astronomical(#[source] TimeError),
    /// Ascendant, midheaven or house failure.
    #[error("{stage} stage failed")]
    Calculation {
        stage: Stage,
        #[source]
        source: VedicError,
    },
    /// Planetary position or sidereal conversion failure.
    #[error("planetary stage failed")]
    Planetary(#[source] VedicError),
}

impl ChartError {
    /// Stage at which the pipeline stopped.
    pub fn stage(&self) -> Stage {
        match self {
            Self::Validation(_) | Self::Config(_) => Stage::Validate,
            Self::Astronomical(_) => Stage::Astronomical,
            Self::Calculation { stage, .. } => *stage,
            Self::Planetary(_) => Stage::PlanetaryData,
        }
    }

    pub(crate) fn calculation(stage: Stage) -> impl FnOnce(VedicError) -> Self {
        move |source| Self::Calculation { stage, source }
    }
}

impl From<InputError> for ChartError {
    fn from(e: InputError) -> Self {
        Self::Validation(e)
    }
}

impl From<InvalidConfig> for ChartError {
    fn from(e: InvalidConfig) -> Self {
        Self::Config(e)
    }
}
