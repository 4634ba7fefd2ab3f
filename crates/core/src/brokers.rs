//! The fixed prime-broker set.
//!
//! Every margin pivot and every reconciliation sums over exactly this set.
//! Position rows carrying any other counterparty are a data-quality problem
//! and must never leak into totals.

use serde::{Deserialize, Serialize};

/// A prime broker the desk clears margin with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PrimeBroker {
    Abn,
    Gs,
    Jpm,
    Nomura,
}

impl PrimeBroker {
    /// All known brokers, in reporting column order.
    pub const ALL: [PrimeBroker; 4] = [
        PrimeBroker::Abn,
        PrimeBroker::Gs,
        PrimeBroker::Jpm,
        PrimeBroker::Nomura,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PrimeBroker::Abn => "ABN",
            PrimeBroker::Gs => "GS",
            PrimeBroker::Jpm => "JPM",
            PrimeBroker::Nomura => "NOMURA",
        }
    }

    /// Case-insensitive parse. Returns `None` for values outside the fixed
    /// set; callers decide whether that is a warning or an error.
    pub fn parse(value: &str) -> Option<PrimeBroker> {
        match value.to_uppercase().as_str() {
            "ABN" => Some(PrimeBroker::Abn),
            "GS" => Some(PrimeBroker::Gs),
            "JPM" => Some(PrimeBroker::Jpm),
            "NOMURA" => Some(PrimeBroker::Nomura),
            _ => None,
        }
    }
}

impl std::fmt::Display for PrimeBroker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
