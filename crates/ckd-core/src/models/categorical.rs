use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Microscopy finding for red blood cells and pus cells in urine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum CellMorphology {
    Normal,
    Abnormal,
}

/// Whether a urine finding (pus cell clumps, bacteria) was observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Presence {
    Present,
    NotPresent,
}

/// Answer to a medical-history question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum YesNo {
    Yes,
    No,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Appetite {
    Good,
    Poor,
}

impl CellMorphology {
    pub const ALL: [CellMorphology; 2] = [CellMorphology::Normal, CellMorphology::Abnormal];

    pub fn as_str(self) -> &'static str {
        match self {
            CellMorphology::Normal => "normal",
            CellMorphology::Abnormal => "abnormal",
        }
    }
}

impl Presence {
    pub const ALL: [Presence; 2] = [Presence::Present, Presence::NotPresent];

    pub fn as_str(self) -> &'static str {
        match self {
            Presence::Present => "present",
            Presence::NotPresent => "notpresent",
        }
    }
}

impl YesNo {
    pub const ALL: [YesNo; 2] = [YesNo::Yes, YesNo::No];

    pub fn as_str(self) -> &'static str {
        match self {
            YesNo::Yes => "yes",
            YesNo::No => "no",
        }
    }

    pub fn is_yes(self) -> bool {
        self == YesNo::Yes
    }
}

impl From<bool> for YesNo {
    fn from(value: bool) -> Self {
        if value { YesNo::Yes } else { YesNo::No }
    }
}

impl Appetite {
    pub const ALL: [Appetite; 2] = [Appetite::Good, Appetite::Poor];

    pub fn as_str(self) -> &'static str {
        match self {
            Appetite::Good => "good",
            Appetite::Poor => "poor",
        }
    }
}

impl fmt::Display for CellMorphology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Presence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for YesNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Appetite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
