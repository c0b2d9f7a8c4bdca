use serde::{Deserialize, Serialize};

use crate::core::stack::{PercentScaleType, Stack};

/// Immutable per-render configuration shared by the stack layout functions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderOptions {
    pub stack: Stack,
    pub scale_type: PercentScaleType,
    pub tick_distance: f64,
    pub min: f64,
    pub max: f64,
    pub diverging: bool,
    pub has_positive_only: bool,
    pub has_negative_only: bool,
}

impl RenderOptions {
    /// Options for a normal stack over `[min, max]`; sign flags follow the range.
    #[must_use]
    pub fn new(stack: Stack, tick_distance: f64, min: f64, max: f64) -> Self {
        Self {
            stack,
            scale_type: PercentScaleType::PercentStack,
            tick_distance,
            min,
            max,
            diverging: false,
            has_positive_only: min >= 0.0,
            has_negative_only: max <= 0.0,
        }
    }

    #[must_use]
    pub fn with_scale_type(mut self, scale_type: PercentScaleType) -> Self {
        self.scale_type = scale_type;
        self
    }

    #[must_use]
    pub fn with_diverging(mut self, diverging: bool) -> Self {
        self.diverging = diverging;
        self
    }

    #[must_use]
    pub fn with_sign_flags(mut self, has_positive_only: bool, has_negative_only: bool) -> Self {
        self.has_positive_only = has_positive_only;
        self.has_negative_only = has_negative_only;
        self
    }

    #[must_use]
    pub fn is_percent_stack(&self) -> bool {
        self.stack.is_percent_stack()
    }

    #[must_use]
    pub fn render_mode(&self) -> RenderMode {
        RenderMode::resolve(self)
    }
}

/// Start-position policy for one render pass.
///
/// Exactly one mode applies; [`RenderMode::resolve`] checks them in declaration
/// order, so diverging beats percent, percent beats the sign-only axes, and
/// `Mixed` is the fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RenderMode {
    Diverging,
    Percent,
    NegativeOnly,
    PositiveOnly,
    Mixed,
}

impl RenderMode {
    #[must_use]
    pub fn resolve(options: &RenderOptions) -> Self {
        if options.diverging {
            Self::Diverging
        } else if options.is_percent_stack() {
            Self::Percent
        } else if options.has_negative_only {
            Self::NegativeOnly
        } else if options.has_positive_only {
            Self::PositiveOnly
        } else {
            Self::Mixed
        }
    }
}
