use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::errors::{PipelineStage, RenderError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColouringKind {
    #[serde(rename = "iteration-count")]
    IterationCount,
    #[serde(rename = "continuous-iteration-count")]
    ContinuousIterationCount,
    #[serde(rename = "smooth-iteration-count")]
    SmoothIterationCount,
}

impl ColouringKind {
    pub const ALL: &'static [Self] = &[
        Self::IterationCount,
        Self::ContinuousIterationCount,
        Self::SmoothIterationCount,
    ];

    /// Stable wire identifier.
    #[must_use]
    pub const fn identifier(self) -> &'static str {
        match self {
            Self::IterationCount => "iteration-count",
            Self::ContinuousIterationCount => "continuous-iteration-count",
            Self::SmoothIterationCount => "smooth-iteration-count",
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::IterationCount => "Iteration Count",
            Self::ContinuousIterationCount => "Continuous Iteration Count",
            Self::SmoothIterationCount => "Smooth Iteration Count",
        }
    }
}

impl Default for ColouringKind {
    fn default() -> Self {
        Self::IterationCount
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColourIndexKind {
    #[serde(rename = "simple-index")]
    SimpleIndex,
}

impl ColourIndexKind {
    pub const ALL: &'static [Self] = &[Self::SimpleIndex];

    /// Stable wire identifier.
    #[must_use]
    pub const fn identifier(self) -> &'static str {
        match self {
            Self::SimpleIndex => "simple-index",
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::SimpleIndex => "Simple Index",
        }
    }
}

impl Default for ColourIndexKind {
    fn default() -> Self {
        Self::SimpleIndex
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaletteKind {
    #[serde(rename = "simple-palette")]
    Simple,
    #[serde(rename = "hot-palette")]
    Hot,
    #[serde(rename = "cool-palette")]
    Cool,
}

impl PaletteKind {
    pub const ALL: &'static [Self] = &[Self::Simple, Self::Hot, Self::Cool];

    /// Stable wire identifier.
    #[must_use]
    pub const fn identifier(self) -> &'static str {
        match self {
            Self::Simple => "simple-palette",
            Self::Hot => "hot-palette",
            Self::Cool => "cool-palette",
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Simple => "Simple Palette (Grayscale)",
            Self::Hot => "Hot Palette (Red-Yellow-White)",
            Self::Cool => "Cool Palette (Cyan-Blue-Green)",
        }
    }
}

impl Default for PaletteKind {
    fn default() -> Self {
        Self::Simple
    }
}

macro_rules! wire_identifier_impls {
    ($kind:ty, $stage:expr) => {
        impl fmt::Display for $kind {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.identifier())
            }
        }

        impl FromStr for $kind {
            type Err = RenderError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|kind| kind.identifier() == s)
                    .ok_or_else(|| RenderError::unknown($stage, s))
            }
        }
    };
}

wire_identifier_impls!(ColouringKind, PipelineStage::Colouring);
wire_identifier_impls!(ColourIndexKind, PipelineStage::ColourIndex);
wire_identifier_impls!(PaletteKind, PipelineStage::Palette);

/// One choice per pipeline stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PipelineSelection {
    pub colouring: ColouringKind,
    pub colour_index: ColourIndexKind,
    pub palette: PaletteKind,
}

impl PipelineSelection {
    #[must_use]
    pub const fn new(
        colouring: ColouringKind,
        colour_index: ColourIndexKind,
        palette: PaletteKind,
    ) -> Self {
        Self {
            colouring,
            colour_index,
            palette,
        }
    }

    /// Parses the three wire identifiers, failing on the first unknown one.
    pub fn from_identifiers(
        colouring: &str,
        colour_index: &str,
        palette: &str,
    ) -> Result<Self, RenderError> {
        Ok(Self {
            colouring: colouring.parse()?,
            colour_index: colour_index.parse()?,
            palette: palette.parse()?,
        })
    }
}
