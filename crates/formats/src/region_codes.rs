use std::collections::BTreeMap;

use scene::region::{RegionCodeLookup, RegionIndex};

/// Registry mapping region indices to their external codes (ISO country
/// codes in the demo assets). The geometry core only ever queries this
/// through the `RegionCodeLookup` seam.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionCodeTable {
    codes: Vec<Option<String>>,
}

#[derive(Debug)]
pub enum RegionCodesError {
    Parse(String),
    InvalidIndex { key: String },
}

impl std::fmt::Display for RegionCodesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegionCodesError::Parse(reason) => write!(f, "JSON parse error: {reason}"),
            RegionCodesError::InvalidIndex { key } => {
                write!(f, "region index key {key:?} is not an integer in [0, 255]")
            }
        }
    }
}

impl std::error::Error for RegionCodesError {}

impl RegionCodeTable {
    /// Parses a JSON object of decimal index keys to code strings,
    /// e.g. `{"66": "FR", "59": "DE"}`.
    pub fn from_json_str(payload: &str) -> Result<Self, RegionCodesError> {
        let raw: BTreeMap<String, String> =
            serde_json::from_str(payload).map_err(|e| RegionCodesError::Parse(e.to_string()))?;

        let mut codes = vec![None; 256];
        for (key, code) in raw {
            let index: u8 = key
                .parse()
                .map_err(|_| RegionCodesError::InvalidIndex { key: key.clone() })?;
            codes[index as usize] = Some(code);
        }
        Ok(Self { codes })
    }

    /// Number of indices with a registered code.
    pub fn len(&self) -> usize {
        self.codes.iter().filter(|c| c.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.iter().all(|c| c.is_none())
    }
}

impl RegionCodeLookup for RegionCodeTable {
    fn code_for(&self, index: RegionIndex) -> Option<&str> {
        self.codes[index.0 as usize].as_deref()
    }
}
