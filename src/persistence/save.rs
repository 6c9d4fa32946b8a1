//! Player progress record

use serde::{Deserialize, Serialize};

use crate::platform;

/// Current save record version
pub const SAVE_VERSION: u8 = 1;

/// Persistent progress, mutated every tick by the game loop
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SaveData {
    pub save_version: u8,
    pub points: u64,
    pub level: u32,
    /// Unix seconds
    #[serde(rename = "createdUnix")]
    pub created: u64,
    /// Unix seconds
    #[serde(rename = "lastOpenedUnix")]
    pub last_opened: u64,
    pub times_clicked: u64,
    pub passive_income: u64,
}

impl Default for SaveData {
    /// A blank save starting at level 1
    fn default() -> Self {
        let now = platform::now_unix();
        Self {
            save_version: SAVE_VERSION,
            points: 0,
            level: 1,
            created: now,
            last_opened: now,
            times_clicked: 0,
            passive_income: 0,
        }
    }
}

impl SaveData {
    /// Stamp the record as opened now
    pub fn touch(&mut self) {
        self.last_opened = platform::now_unix();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_field_names() {
        let save = SaveData {
            save_version: 1,
            points: 5,
            level: 2,
            created: 100,
            last_opened: 200,
            times_clicked: 7,
            passive_income: 1,
        };
        let json = serde_json::to_value(&save).unwrap();
        assert_eq!(json["saveVersion"], 1);
        assert_eq!(json["createdUnix"], 100);
        assert_eq!(json["lastOpenedUnix"], 200);
        assert_eq!(json["timesClicked"], 7);
        assert_eq!(json["passiveIncome"], 1);
    }

    #[test]
    fn test_partial_record_fills_defaults() {
        let save: SaveData = serde_json::from_str(r#"{"points": 99}"#).unwrap();
        assert_eq!(save.points, 99);
        assert_eq!(save.level, 1);
        assert_eq!(save.save_version, SAVE_VERSION);
    }
}
