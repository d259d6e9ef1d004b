use glide_core::{ensure_config, Result};

/// Affine map from a data interval to a screen interval.
///
/// Stored as `gain * x + offset`. The gain is fixed at construction; the
/// offset can later be shifted with [`rebase`](Self::rebase) to scroll the
/// destination without revisiting any previously mapped values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    gain: f32,
    offset: f32,
}

impl LinearScale {
    pub fn new(domain_min: f32, domain_max: f32, range_min: f32, range_max: f32) -> Result<Self> {
        ensure_config!(
            [domain_min, domain_max, range_min, range_max]
                .iter()
                .all(|v| v.is_finite()),
            "scale endpoints must be finite, got [{domain_min}, {domain_max}] -> [{range_min}, {range_max}]"
        );
        ensure_config!(
            domain_max != domain_min,
            "scale domain must not be empty, got [{domain_min}, {domain_max}]"
        );

        let gain = (range_max - range_min) / (domain_max - domain_min);
        Ok(Self {
            gain,
            offset: range_min - domain_min * gain,
        })
    }

    pub fn map(&self, value: f32) -> f32 {
        self.gain * value + self.offset
    }

    /// Slide the destination by `-shift` screen units.
    pub fn rebase(&mut self, shift: f32) {
        self.offset -= shift;
    }

    pub fn gain(&self) -> f32 {
        self.gain
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }
}
