//! Ordinal grades selected by the clinician.
//!
//! Each grade serializes as its bare integer so captured snapshots read the
//! way the classification systems are written on paper. Converting an
//! integer outside the system's range is an [`InvalidInputError`].

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::InvalidInputError;

/// A grade on a closed `0..=MAX` integer scale.
pub trait OrdinalGrade: Sized + Copy {
    const MAX: u8;

    fn from_index(value: u8) -> Option<Self>;

    /// Convert a raw integer, naming `field` when it falls off the scale.
    fn from_raw(field: &'static str, raw: i64) -> Result<Self, InvalidInputError> {
        u8::try_from(raw)
            .ok()
            .and_then(Self::from_index)
            .ok_or(InvalidInputError::OutOfRange {
                field,
                value: raw,
                min: 0,
                max: i64::from(Self::MAX),
            })
    }
}

/// Wagner ulcer grade, 0 (pre-ulcerative) through 5 (whole-foot gangrene).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum WagnerGrade {
    Grade0 = 0,
    Grade1 = 1,
    Grade2 = 2,
    Grade3 = 3,
    Grade4 = 4,
    Grade5 = 5,
}

impl WagnerGrade {
    pub const ALL: [WagnerGrade; 6] = [
        Self::Grade0,
        Self::Grade1,
        Self::Grade2,
        Self::Grade3,
        Self::Grade4,
        Self::Grade5,
    ];

    pub fn value(self) -> u8 {
        self as u8
    }
}

impl OrdinalGrade for WagnerGrade {
    const MAX: u8 = 5;

    fn from_index(value: u8) -> Option<Self> {
        Self::ALL.get(usize::from(value)).copied()
    }
}

impl TryFrom<u8> for WagnerGrade {
    type Error = InvalidInputError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_raw("wagner_grade", i64::from(value))
    }
}

impl From<WagnerGrade> for u8 {
    fn from(grade: WagnerGrade) -> Self {
        grade.value()
    }
}

/// University of Texas wound depth grade, 0–3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum TexasGrade {
    Grade0 = 0,
    Grade1 = 1,
    Grade2 = 2,
    Grade3 = 3,
}

impl TexasGrade {
    pub const ALL: [TexasGrade; 4] = [Self::Grade0, Self::Grade1, Self::Grade2, Self::Grade3];

    pub fn value(self) -> u8 {
        self as u8
    }
}

impl OrdinalGrade for TexasGrade {
    const MAX: u8 = 3;

    fn from_index(value: u8) -> Option<Self> {
        Self::ALL.get(usize::from(value)).copied()
    }
}

impl TryFrom<u8> for TexasGrade {
    type Error = InvalidInputError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_raw("texas_grade", i64::from(value))
    }
}

impl From<TexasGrade> for u8 {
    fn from(grade: TexasGrade) -> Self {
        grade.value()
    }
}

/// University of Texas stage: A clean, B infected, C ischemic, D both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum TexasStage {
    A,
    B,
    C,
    D,
}

/// A single WIfI axis grade (Wound, Ischemia or foot Infection), 0–3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum WifiGrade {
    Grade0 = 0,
    Grade1 = 1,
    Grade2 = 2,
    Grade3 = 3,
}

impl WifiGrade {
    pub const ALL: [WifiGrade; 4] = [Self::Grade0, Self::Grade1, Self::Grade2, Self::Grade3];

    pub fn value(self) -> u8 {
        self as u8
    }
}

impl OrdinalGrade for WifiGrade {
    const MAX: u8 = 3;

    fn from_index(value: u8) -> Option<Self> {
        Self::ALL.get(usize::from(value)).copied()
    }
}

impl TryFrom<u8> for WifiGrade {
    type Error = InvalidInputError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_raw("wifi_grade", i64::from(value))
    }
}

impl From<WifiGrade> for u8 {
    fn from(grade: WifiGrade) -> Self {
        grade.value()
    }
}
