// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.


use crate::Error;
use qsample_simulators::Unitary;
use rustc_hash::FxHashSet;
use std::{
    collections::BTreeMap,
    fmt::{self, Display},
};

/// A gate applied to specific register indices.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Gate {
    Single {
        op: Unitary,
        target: u32,
    },
    /// `op` is applied to `target` when `control` is `|1⟩`.
    Controlled {
        op: Unitary,
        control: u32,
        target: u32,
    },
}

impl Gate {
    /// The gate name used in gate counts, e.g. `h` or `cx`.
    #[must_use]
    pub fn name(&self) -> String {
        match self {
            Gate::Single { op, .. } => op.name().to_string(),
            Gate::Controlled { op, .. } => format!("c{}", op.name()),
        }
    }

    #[must_use]
    pub fn qubits(&self) -> Vec<u32> {
        match *self {
            Gate::Single { target, .. } => vec![target],
            Gate::Controlled {
                control, target, ..
            } => vec![control, target],
        }
    }
}

impl Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gate::Single { op, target } => write!(f, "{op} q[{target}];"),
            Gate::Controlled {
                op,
                control,
                target,
            } => write!(f, "c{op} q[{control}], q[{target}];"),
        }
    }
}

/// Which qubits are measured in the Z-basis once all gates have been applied.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Measurement {
    #[default]
    All,
    /// The listed qubits, in the order their bits appear in each outcome.
    Qubits(Vec<u32>),
}

/// An ordered list of gates over a fixed-size qubit register.
///
/// The builder methods never fail; [`Circuit::validate`] checks the whole
/// circuit before it is submitted for sampling.
#[derive(Clone, Debug, PartialEq)]
pub struct Circuit {
    num_qubits: u32,
    gates: Vec<Gate>,
    measurement: Measurement,
}

impl Circuit {
    #[must_use]
    pub fn new(num_qubits: u32) -> Self {
        Self {
            num_qubits,
            gates: Vec::new(),
            measurement: Measurement::All,
        }
    }

    #[must_use]
    pub fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    #[must_use]
    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    #[must_use]
    pub fn measurement(&self) -> &Measurement {
        &self.measurement
    }

    pub fn push(&mut self, gate: Gate) -> &mut Self {
        self.gates.push(gate);
        self
    }

    pub fn apply(&mut self, op: Unitary, target: u32) -> &mut Self {
        self.push(Gate::Single { op, target })
    }

    pub fn controlled(&mut self, op: Unitary, control: u32, target: u32) -> &mut Self {
        self.push(Gate::Controlled {
            op,
            control,
            target,
        })
    }

    pub fn h(&mut self, target: u32) -> &mut Self {
        self.apply(Unitary::H, target)
    }

    pub fn x(&mut self, target: u32) -> &mut Self {
        self.apply(Unitary::X, target)
    }

    pub fn y(&mut self, target: u32) -> &mut Self {
        self.apply(Unitary::Y, target)
    }

    pub fn z(&mut self, target: u32) -> &mut Self {
        self.apply(Unitary::Z, target)
    }

    pub fn s(&mut self, target: u32) -> &mut Self {
        self.apply(Unitary::S, target)
    }

    pub fn s_adj(&mut self, target: u32) -> &mut Self {
        self.apply(Unitary::SAdj, target)
    }

    pub fn t(&mut self, target: u32) -> &mut Self {
        self.apply(Unitary::T, target)
    }

    pub fn t_adj(&mut self, target: u32) -> &mut Self {
        self.apply(Unitary::TAdj, target)
    }

    pub fn sx(&mut self, target: u32) -> &mut Self {
        self.apply(Unitary::SX, target)
    }

    pub fn sx_adj(&mut self, target: u32) -> &mut Self {
        self.apply(Unitary::SXAdj, target)
    }

    pub fn rx(&mut self, angle: f64, target: u32) -> &mut Self {
        self.apply(Unitary::Rx(angle), target)
    }

    pub fn ry(&mut self, angle: f64, target: u32) -> &mut Self {
        self.apply(Unitary::Ry(angle), target)
    }

    pub fn rz(&mut self, angle: f64, target: u32) -> &mut Self {
        self.apply(Unitary::Rz(angle), target)
    }

    pub fn cx(&mut self, control: u32, target: u32) -> &mut Self {
        self.controlled(Unitary::X, control, target)
    }

    pub fn cy(&mut self, control: u32, target: u32) -> &mut Self {
        self.controlled(Unitary::Y, control, target)
    }

    pub fn cz(&mut self, control: u32, target: u32) -> &mut Self {
        self.controlled(Unitary::Z, control, target)
    }

    /// Measures only `qubits`, in the given order.
    pub fn measure(&mut self, qubits: impl IntoIterator<Item = u32>) -> &mut Self {
        self.measurement = Measurement::Qubits(qubits.into_iter().collect());
        self
    }

    pub fn measure_all(&mut self) -> &mut Self {
        self.measurement = Measurement::All;
        self
    }

    /// The measured qubits in outcome bit order.
    #[must_use]
    pub fn measured_qubits(&self) -> Vec<u32> {
        match &self.measurement {
            Measurement::All => (0..self.num_qubits).collect(),
            Measurement::Qubits(qubits) => qubits.clone(),
        }
    }

    /// How many times each gate appears, keyed by gate name.
    #[must_use]
    pub fn gate_counts(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for gate in &self.gates {
            *counts.entry(gate.name()).or_insert(0) += 1;
        }
        counts
    }

    /// Checks that the register is non-empty, that every gate and measured
    /// qubit is in range, that controlled gates have distinct control and
    /// target, and that at least one qubit is measured, none of them twice.
    pub fn validate(&self) -> Result<(), Error> {
        if self.num_qubits == 0 {
            return Err(Error::EmptyRegister);
        }

        for (index, gate) in self.gates.iter().enumerate() {
            if let Some(&qubit) = gate.qubits().iter().find(|&&q| q >= self.num_qubits) {
                return Err(Error::GateOutOfRange {
                    gate: index,
                    qubit,
                    num_qubits: self.num_qubits,
                });
            }
            if let Gate::Controlled {
                control, target, ..
            } = *gate
            {
                if control == target {
                    return Err(Error::ControlIsTarget {
                        gate: index,
                        qubit: control,
                    });
                }
            }
        }

        if let Measurement::Qubits(qubits) = &self.measurement {
            if qubits.is_empty() {
                return Err(Error::EmptyMeasurement);
            }
            let mut seen = FxHashSet::default();
            for &qubit in qubits {
                if qubit >= self.num_qubits {
                    return Err(Error::MeasurementOutOfRange {
                        qubit,
                        num_qubits: self.num_qubits,
                    });
                }
                if !seen.insert(qubit) {
                    return Err(Error::DuplicateMeasurement { qubit });
                }
            }
        }

        Ok(())
    }
}

impl Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "qubit[{}] q;", self.num_qubits)?;
        for gate in &self.gates {
            writeln!(f, "{gate}")?;
        }
        let measured = self
            .measured_qubits()
            .iter()
            .map(|q| format!("q[{q}]"))
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(f, "measure {measured};")
    }
}
