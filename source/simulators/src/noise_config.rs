// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.


use crate::{Error, Unitary};
use rand::Rng;

/// Independent Pauli faults applied to every qubit a gate touches,
/// right after the gate is applied.
///
/// The three faults are mutually exclusive. Therefore, their probabilities
/// must add up to a number less or equal than `1.0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PauliNoise {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Default for PauliNoise {
    fn default() -> Self {
        Self::NOISELESS
    }
}

impl PauliNoise {
    pub const NOISELESS: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub fn new(x: f64, y: f64, z: f64) -> Result<Self, Error> {
        for (name, p) in [("x", x), ("y", y), ("z", z)] {
            if !(0.0..=1.0).contains(&p) {
                return Err(Error::InvalidNoise(format!(
                    "{name} probability {p} is outside [0, 1]"
                )));
            }
        }
        if x + y + z > 1.0 {
            return Err(Error::InvalidNoise(format!(
                "probabilities add up to {}, which is more than 1",
                x + y + z
            )));
        }
        Ok(Self { x, y, z })
    }

    /// Depolarizing noise with total fault probability `p`, split evenly among X, Y, and Z.
    pub fn depolarizing(p: f64) -> Result<Self, Error> {
        Self::new(p / 3.0, p / 3.0, p / 3.0)
    }

    /// A pure bit-flip channel.
    pub fn bit_flip(p: f64) -> Result<Self, Error> {
        Self::new(p, 0.0, 0.0)
    }

    #[must_use]
    pub fn is_noiseless(&self) -> bool {
        self.x == 0.0 && self.y == 0.0 && self.z == 0.0
    }

    /// Samples a float in the range [0, 1) and picks one of the faults
    /// `X`, `Y`, `Z`, or none.
    pub fn gen_fault(&self, rng: &mut impl Rng) -> Option<Unitary> {
        if self.is_noiseless() {
            return None;
        }
        self.fault_for_sample(rng.gen_range(0.0..1.0))
    }

    fn fault_for_sample(&self, sample: f64) -> Option<Unitary> {
        if sample < self.x {
            Some(Unitary::X)
        } else if sample < self.x + self.y {
            Some(Unitary::Y)
        } else if sample < self.x + self.y + self.z {
            Some(Unitary::Z)
        } else {
            None
        }
    }
}
