// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.


use num_complex::Complex64;
use std::{
    f64::consts::{FRAC_1_SQRT_2, FRAC_PI_4},
    fmt::{self, Display},
};

/// A row-major 2x2 complex matrix.
pub type Matrix2 = [[Complex64; 2]; 2];

/// The single-qubit unitaries a circuit can apply, either directly or under a control.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Unitary {
    I,
    H,
    X,
    Y,
    Z,
    S,
    SAdj,
    T,
    TAdj,
    SX,
    SXAdj,
    Rx(f64),
    Ry(f64),
    Rz(f64),
}

impl Unitary {
    /// The lowercase gate name, as it appears in gate counts.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Unitary::I => "i",
            Unitary::H => "h",
            Unitary::X => "x",
            Unitary::Y => "y",
            Unitary::Z => "z",
            Unitary::S => "s",
            Unitary::SAdj => "sdg",
            Unitary::T => "t",
            Unitary::TAdj => "tdg",
            Unitary::SX => "sx",
            Unitary::SXAdj => "sxdg",
            Unitary::Rx(_) => "rx",
            Unitary::Ry(_) => "ry",
            Unitary::Rz(_) => "rz",
        }
    }

    /// Whether the gate maps Pauli operators to Pauli operators under conjugation.
    /// Rotations are treated as non-Clifford regardless of their angle.
    #[must_use]
    pub fn is_clifford(self) -> bool {
        !matches!(
            self,
            Unitary::T | Unitary::TAdj | Unitary::Rx(_) | Unitary::Ry(_) | Unitary::Rz(_)
        )
    }

    #[must_use]
    pub fn adjoint(self) -> Self {
        match self {
            Unitary::S => Unitary::SAdj,
            Unitary::SAdj => Unitary::S,
            Unitary::T => Unitary::TAdj,
            Unitary::TAdj => Unitary::T,
            Unitary::SX => Unitary::SXAdj,
            Unitary::SXAdj => Unitary::SX,
            Unitary::Rx(angle) => Unitary::Rx(-angle),
            Unitary::Ry(angle) => Unitary::Ry(-angle),
            Unitary::Rz(angle) => Unitary::Rz(-angle),
            Unitary::I | Unitary::H | Unitary::X | Unitary::Y | Unitary::Z => self,
        }
    }

    #[must_use]
    pub fn matrix(self) -> Matrix2 {
        let zero = Complex64::new(0.0, 0.0);
        let one = Complex64::new(1.0, 0.0);
        let i = Complex64::i();
        match self {
            Unitary::I => [[one, zero], [zero, one]],
            Unitary::H => {
                let f = Complex64::new(FRAC_1_SQRT_2, 0.0);
                [[f, f], [f, -f]]
            }
            Unitary::X => [[zero, one], [one, zero]],
            Unitary::Y => [[zero, -i], [i, zero]],
            Unitary::Z => [[one, zero], [zero, -one]],
            Unitary::S => [[one, zero], [zero, i]],
            Unitary::SAdj => [[one, zero], [zero, -i]],
            Unitary::T => [[one, zero], [zero, (i * FRAC_PI_4).exp()]],
            Unitary::TAdj => [[one, zero], [zero, (-i * FRAC_PI_4).exp()]],
            Unitary::SX => [
                [(one + i) / 2.0, (one - i) / 2.0],
                [(one - i) / 2.0, (one + i) / 2.0],
            ],
            Unitary::SXAdj => [
                [(one - i) / 2.0, (one + i) / 2.0],
                [(one + i) / 2.0, (one - i) / 2.0],
            ],
            Unitary::Rx(angle) => {
                let cos = Complex64::new((angle / 2.0).cos(), 0.0);
                let sin = (angle / 2.0).sin();
                [[cos, -i * sin], [-i * sin, cos]]
            }
            Unitary::Ry(angle) => {
                let cos = Complex64::new((angle / 2.0).cos(), 0.0);
                let sin = Complex64::new((angle / 2.0).sin(), 0.0);
                [[cos, -sin], [sin, cos]]
            }
            Unitary::Rz(angle) => [
                [(-i * angle / 2.0).exp(), zero],
                [zero, (i * angle / 2.0).exp()],
            ],
        }
    }
}

impl Display for Unitary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unitary::Rx(angle) | Unitary::Ry(angle) | Unitary::Rz(angle) => {
                write!(f, "{}({angle})", self.name())
            }
            _ => write!(f, "{}", self.name()),
        }
    }
}
