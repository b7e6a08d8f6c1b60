// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#[cfg(test)]
mod tests;

use rand::Rng;
use std::fmt::{self, Display};

/// An Aaronson-Gottesman stabilizer tableau over `n` qubits.
///
/// Rows `0..n` hold the destabilizer generators, rows `n..2n` the stabilizer
/// generators, and row `2n` is scratch space for deterministic measurements.
/// Each row is a signed Pauli string stored as packed X and Z bits; a column
/// with both bits set is a `Y`.
pub struct Tableau {
    num_qubits: usize,
    words_per_row: usize,
    x: Vec<u64>,
    z: Vec<u64>,
    r: Vec<bool>,
}

impl Tableau {
    /// The stabilizer state `|0…0⟩`.
    #[must_use]
    pub fn new(num_qubits: usize) -> Self {
        let words_per_row = num_qubits.div_ceil(64);
        let rows = 2 * num_qubits + 1;
        let mut tableau = Self {
            num_qubits,
            words_per_row,
            x: vec![0; rows * words_per_row],
            z: vec![0; rows * words_per_row],
            r: vec![false; rows],
        };
        for q in 0..num_qubits {
            tableau.set_x(q, q, true);
            tableau.set_z(num_qubits + q, q, true);
        }
        tableau
    }

    #[must_use]
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    fn index(&self, row: usize, col: usize) -> (usize, u64) {
        (row * self.words_per_row + col / 64, 1 << (col % 64))
    }

    fn x_bit(&self, row: usize, col: usize) -> bool {
        let (word, mask) = self.index(row, col);
        self.x[word] & mask != 0
    }

    fn z_bit(&self, row: usize, col: usize) -> bool {
        let (word, mask) = self.index(row, col);
        self.z[word] & mask != 0
    }

    fn set_x(&mut self, row: usize, col: usize, value: bool) {
        let (word, mask) = self.index(row, col);
        if value {
            self.x[word] |= mask;
        } else {
            self.x[word] &= !mask;
        }
    }

    fn set_z(&mut self, row: usize, col: usize, value: bool) {
        let (word, mask) = self.index(row, col);
        if value {
            self.z[word] |= mask;
        } else {
            self.z[word] &= !mask;
        }
    }

    fn generator_rows(&self) -> std::ops::Range<usize> {
        0..2 * self.num_qubits
    }

    pub fn h(&mut self, q: usize) {
        for row in self.generator_rows() {
            let (x, z) = (self.x_bit(row, q), self.z_bit(row, q));
            self.r[row] ^= x && z;
            self.set_x(row, q, z);
            self.set_z(row, q, x);
        }
    }

    pub fn s(&mut self, q: usize) {
        for row in self.generator_rows() {
            let (x, z) = (self.x_bit(row, q), self.z_bit(row, q));
            self.r[row] ^= x && z;
            self.set_z(row, q, z ^ x);
        }
    }

    pub fn x(&mut self, q: usize) {
        for row in self.generator_rows() {
            let flip = self.z_bit(row, q);
            self.r[row] ^= flip;
        }
    }

    pub fn y(&mut self, q: usize) {
        for row in self.generator_rows() {
            let flip = self.x_bit(row, q) ^ self.z_bit(row, q);
            self.r[row] ^= flip;
        }
    }

    pub fn z(&mut self, q: usize) {
        for row in self.generator_rows() {
            let flip = self.x_bit(row, q);
            self.r[row] ^= flip;
        }
    }

    pub fn cx(&mut self, control: usize, target: usize) {
        for row in self.generator_rows() {
            let xc = self.x_bit(row, control);
            let zc = self.z_bit(row, control);
            let xt = self.x_bit(row, target);
            let zt = self.z_bit(row, target);
            self.r[row] ^= xc && zt && !(xt ^ zc);
            self.set_x(row, target, xt ^ xc);
            self.set_z(row, control, zc ^ zt);
        }
    }

    /// Measures `q` in the Z-basis. The random branch draws one bit from `rng`;
    /// the deterministic branch does not touch it.
    pub fn measure(&mut self, q: usize, rng: &mut impl Rng) -> bool {
        let n = self.num_qubits;
        if let Some(p) = (n..2 * n).find(|&row| self.x_bit(row, q)) {
            for row in self.generator_rows() {
                if row != p && self.x_bit(row, q) {
                    self.rowsum(row, p);
                }
            }
            self.copy_row(p - n, p);
            self.clear_row(p);
            self.set_z(p, q, true);
            let outcome = rng.gen_bool(0.5);
            self.r[p] = outcome;
            outcome
        } else {
            let scratch = 2 * n;
            self.clear_row(scratch);
            for row in 0..n {
                if self.x_bit(row, q) {
                    self.rowsum(scratch, row + n);
                }
            }
            self.r[scratch]
        }
    }

    /// Left-multiplies row `h` by row `i`, tracking the sign.
    ///
    /// Each column contributes a power of `i` to the phase; the `plus` and
    /// `minus` masks mark the columns contributing `+i` and `-i`, so a whole
    /// word is accounted for with two popcounts.
    fn rowsum(&mut self, h: usize, i: usize) {
        let w = self.words_per_row;
        let (mut plus_count, mut minus_count) = (0u32, 0u32);
        for word in 0..w {
            let (x1, z1) = (self.x[i * w + word], self.z[i * w + word]);
            let (x2, z2) = (self.x[h * w + word], self.z[h * w + word]);
            let plus = (x1 & z1 & !x2 & z2) | (x1 & !z1 & x2 & z2) | (!x1 & z1 & x2 & !z2);
            let minus = (x1 & z1 & x2 & !z2) | (x1 & !z1 & !x2 & z2) | (!x1 & z1 & x2 & z2);
            plus_count += plus.count_ones();
            minus_count += minus.count_ones();
            self.x[h * w + word] = x1 ^ x2;
            self.z[h * w + word] = z1 ^ z2;
        }
        let phase = 2 * i64::from(self.r[h]) + 2 * i64::from(self.r[i]) + i64::from(plus_count)
            - i64::from(minus_count);
        self.r[h] = phase.rem_euclid(4) == 2;
    }

    fn copy_row(&mut self, dst: usize, src: usize) {
        let w = self.words_per_row;
        self.x.copy_within(src * w..(src + 1) * w, dst * w);
        self.z.copy_within(src * w..(src + 1) * w, dst * w);
        self.r[dst] = self.r[src];
    }

    fn clear_row(&mut self, row: usize) {
        let w = self.words_per_row;
        self.x[row * w..(row + 1) * w].fill(0);
        self.z[row * w..(row + 1) * w].fill(0);
        self.r[row] = false;
    }

    fn row_string(&self, row: usize) -> String {
        let sign = if self.r[row] { '-' } else { '+' };
        std::iter::once(sign)
            .chain((0..self.num_qubits).map(|col| {
                match (self.x_bit(row, col), self.z_bit(row, col)) {
                    (false, false) => 'I',
                    (true, false) => 'X',
                    (true, true) => 'Y',
                    (false, true) => 'Z',
                }
            }))
            .collect()
    }

    /// The stabilizer generators as signed Pauli strings, qubit 0 first.
    #[must_use]
    pub fn stabilizers(&self) -> Vec<String> {
        (self.num_qubits..2 * self.num_qubits)
            .map(|row| self.row_string(row))
            .collect()
    }
}

impl Display for Tableau {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stabilizer in self.stabilizers() {
            writeln!(f, "{stabilizer}")?;
        }
        Ok(())
    }
}
