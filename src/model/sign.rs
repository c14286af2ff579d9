// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boltforest-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boltforest and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Vertex label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Sign {
    #[serde(rename = "+")]
    Plus,
    #[serde(rename = "-")]
    Minus,
}

impl Sign {
    pub fn flipped(self) -> Self {
        match self {
            Self::Plus => Self::Minus,
            Self::Minus => Self::Plus,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Minus => "-",
        }
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSignError {
    input: String,
}

impl fmt::Display for ParseSignError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid sign '{}' (expected '+' or '-')", self.input)
    }
}

impl std::error::Error for ParseSignError {}

impl FromStr for Sign {
    type Err = ParseSignError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Self::Plus),
            // U+2212 is accepted alongside ASCII hyphen-minus.
            "-" | "\u{2212}" => Ok(Self::Minus),
            other => Err(ParseSignError { input: other.to_owned() }),
        }
    }
}

/// Accumulator for combining the signs of coincident vertices.
///
/// `Empty` is the identity, equal signs reinforce, opposite signs cancel to `Zero`, and a later
/// sign replaces `Zero`. Folds run strictly left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignSum {
    #[default]
    Empty,
    Plus,
    Minus,
    Zero,
}

impl SignSum {
    pub fn add(self, sign: Option<Sign>) -> Self {
        let Some(sign) = sign else {
            return self;
        };
        match (self, sign) {
            (Self::Empty | Self::Zero, Sign::Plus) => Self::Plus,
            (Self::Empty | Self::Zero, Sign::Minus) => Self::Minus,
            (Self::Plus, Sign::Plus) => Self::Plus,
            (Self::Minus, Sign::Minus) => Self::Minus,
            (Self::Plus, Sign::Minus) | (Self::Minus, Sign::Plus) => Self::Zero,
        }
    }

    pub fn fold(signs: impl IntoIterator<Item = Option<Sign>>) -> Self {
        signs.into_iter().fold(Self::Empty, Self::add)
    }

    pub fn is_cancelled(self) -> bool {
        self == Self::Zero
    }

    /// The surviving sign, if any. `Empty` and `Zero` carry none.
    pub fn sign(self) -> Option<Sign> {
        match self {
            Self::Plus => Some(Sign::Plus),
            Self::Minus => Some(Sign::Minus),
            Self::Empty | Self::Zero => None,
        }
    }
}
