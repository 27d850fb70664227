// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use polydiv_polynomial::Polynomial;

/// A built-in dividend/divisor pair offered by the menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Preset {
    pub number: u8,
    dividend: &'static [(i64, usize)],
    divisor: &'static [(i64, usize)],
}

pub const PRESETS: [Preset; 2] = [
    Preset {
        number: 1,
        dividend: &[(2, 3), (3, 2), (-1, 1), (5, 0)],
        divisor: &[(1, 2), (-1, 0)],
    },
    Preset {
        number: 2,
        dividend: &[(3, 4), (-2, 2), (1, 1), (-7, 0)],
        divisor: &[(1, 2), (-2, 1), (1, 0)],
    },
];

impl Preset {
    pub fn get(number: u8) -> Option<Preset> {
        PRESETS.iter().copied().find(|p| p.number == number)
    }

    pub fn dividend(&self) -> Polynomial {
        self.dividend.iter().copied().collect()
    }

    pub fn divisor(&self) -> Polynomial {
        self.divisor.iter().copied().collect()
    }

    /// Menu label, e.g. `Example 1: (2x^3 + 3x^2 - x + 5) / (x^2 - 1)`
    pub fn label(&self) -> String {
        format!(
            "Example {}: ({}) / ({})",
            self.number,
            self.dividend(),
            self.divisor()
        )
    }
}
