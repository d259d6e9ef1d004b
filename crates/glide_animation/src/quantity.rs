//! Tracked kinematic quantities

use serde::{Deserialize, Serialize};

/// One of the three state variables a platform derives every tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quantity {
    Displacement,
    Velocity,
    Acceleration,
}

impl Quantity {
    /// Chart draw order within a group: acceleration first, displacement last.
    pub const DRAW_ORDER: [Quantity; 3] = [
        Quantity::Acceleration,
        Quantity::Velocity,
        Quantity::Displacement,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Quantity::Displacement => "Displacement",
            Quantity::Velocity => "Velocity",
            Quantity::Acceleration => "Acceleration",
        }
    }

}
