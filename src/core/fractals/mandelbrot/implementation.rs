use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::data::complex::Complex;
use crate::core::data::escape_result::EscapeResult;
use crate::core::data::iteration_params::IterationParams;
use crate::core::errors::{PipelineStage, RenderError};
use crate::core::fractals::mandelbrot::orbit::{escape, escape_fast};

/// Which orbit kernel renders a request. Both kernels produce identical
/// escape results; `Fast` only changes how quickly they are reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Implementation {
    #[serde(rename = "reference")]
    Reference,
    #[serde(rename = "fast")]
    Fast,
}

impl Implementation {
    pub const ALL: &'static [Self] = &[Self::Reference, Self::Fast];

    #[must_use]
    pub const fn identifier(self) -> &'static str {
        match self {
            Self::Reference => "reference",
            Self::Fast => "fast",
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Reference => "Reference",
            Self::Fast => "Fast (power 2)",
        }
    }

    #[must_use]
    pub fn escape(self, c: Complex, params: &IterationParams) -> EscapeResult {
        match self {
            Self::Reference => escape(c, params),
            Self::Fast => escape_fast(c, params),
        }
    }
}

impl Default for Implementation {
    fn default() -> Self {
        Self::Reference
    }
}

impl fmt::Display for Implementation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

impl FromStr for Implementation {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.identifier() == s)
            .ok_or_else(|| RenderError::unknown(PipelineStage::Implementation, s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_array_has_default_first() {
        assert_eq!(Implementation::ALL.first(), Some(&Implementation::default()));
    }

    #[test]
    fn test_identifiers_parse_back() {
        for &kind in Implementation::ALL {
            assert_eq!(kind.identifier().parse::<Implementation>(), Ok(kind));
        }
    }

    #[test]
    fn test_unknown_identifier_is_rejected() {
        assert_eq!(
            "cython".parse::<Implementation>(),
            Err(RenderError::UnknownPipelineStage {
                stage: PipelineStage::Implementation,
                identifier: "cython".to_string(),
            })
        );
    }

    #[test]
    fn test_serde_uses_wire_identifiers() {
        assert_eq!(serde_json::to_string(&Implementation::Fast).unwrap(), "\"fast\"");
        assert_eq!(
            serde_json::from_str::<Implementation>("\"reference\"").unwrap(),
            Implementation::Reference
        );
    }

    #[test]
    fn test_kernels_agree() {
        let params = IterationParams::quadratic(120).unwrap();
        let c = Complex::new(-0.7453, 0.1127);

        assert_eq!(
            Implementation::Fast.escape(c, &params),
            Implementation::Reference.escape(c, &params)
        );
    }
}
