//! Easing functions for animations

use std::fmt;
use std::str::FromStr;

use glide_core::GlideError;
use serde::{Deserialize, Serialize};

/// Plain easing curve, resolved once when a platform is built.
pub type EasingFn = fn(f32) -> f32;

/// Easing function type
///
/// Every variant maps `0 -> 0` and `1 -> 1`. Inputs outside `[0, 1]` are
/// extrapolated along the same polynomial.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    #[default]
    Identity,
    /// `x²(3 - 2x)`: zero velocity at both ends
    #[serde(alias = "raised_cube", alias = "raised_cubic", alias = "raised-cube")]
    RaisedCubic,
    /// `x³(10 - 15x + 6x²)`: zero velocity and acceleration at both ends
    #[serde(alias = "raised_quintic")]
    RaisedQuintic,
}

impl Easing {
    pub const ALL: [Easing; 3] = [Easing::Identity, Easing::RaisedCubic, Easing::RaisedQuintic];

    /// Apply the easing function to a progress value (0.0 to 1.0)
    pub fn apply(&self, t: f32) -> f32 {
        (self.function())(t)
    }

    pub fn function(&self) -> EasingFn {
        match self {
            Easing::Identity => identity,
            Easing::RaisedCubic => raised_cubic,
            Easing::RaisedQuintic => raised_quintic,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Easing::Identity => "identity",
            Easing::RaisedCubic => "raised-cubic",
            Easing::RaisedQuintic => "raised-quintic",
        }
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Easing {
    type Err = GlideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "identity" | "linear" => Ok(Easing::Identity),
            "raised-cubic" | "raised-cube" => Ok(Easing::RaisedCubic),
            "raised-quintic" => Ok(Easing::RaisedQuintic),
            other => Err(GlideError::invalid(format!("unknown easing '{other}'"))),
        }
    }
}

pub fn identity(x: f32) -> f32 {
    x
}

pub fn raised_cubic(x: f32) -> f32 {
    x * x * (3.0 - 2.0 * x)
}

pub fn raised_quintic(x: f32) -> f32 {
    let x2 = x * x;
    x * x2 * (10.0 - 15.0 * x + 6.0 * x2)
}
