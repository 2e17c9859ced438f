// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use serde::Serialize;

/// Financial status derived from how much of the income has been spent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Overspent,
    Caution,
    OnTrack,
}

/// Share of income above which spending is flagged (0.8).
pub const CAUTION_RATIO: Decimal = Decimal::from_parts(8, 0, 0, false, 1);

pub fn classify(income: Decimal, expense: Decimal) -> Status {
    if expense > income {
        Status::Overspent
    } else if expense > income * CAUTION_RATIO {
        Status::Caution
    } else {
        Status::OnTrack
    }
}

impl Status {
    pub fn label(&self) -> &'static str {
        match self {
            Status::Overspent => "OVERSPENT",
            Status::Caution => "CAUTION",
            Status::OnTrack => "ON_TRACK",
        }
    }

    /// User-facing message. Carries a decorative symbol that single-byte
    /// document encodings cannot represent.
    pub fn message(&self) -> &'static str {
        match self {
            Status::Overspent => "You're overspending! Tighten your belt. [🔴]",
            Status::Caution => "Caution: You've spent over 80% of your income. [🟡]",
            Status::OnTrack => "You're managing well. Keep saving! [💚]",
        }
    }
}
