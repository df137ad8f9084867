//! Static raid reference data
//!
//! Minimum item level and clear gold per raid, for display next to a roster.
//! Nothing in the roster model depends on it.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RaidInfo {
    pub name: &'static str,
    pub min_item_level: u32,
    pub clear_gold: u32,
}

const RAID_CATALOG: [RaidInfo; 12] = [
    RaidInfo { name: "서막 / 에키드나 하드", min_item_level: 1640, clear_gold: 7200 },
    RaidInfo { name: "베히모스", min_item_level: 1640, clear_gold: 7200 },
    RaidInfo { name: "1막 / 에기르 노말", min_item_level: 1660, clear_gold: 11500 },
    RaidInfo { name: "1막 / 에기르 하드", min_item_level: 1680, clear_gold: 18000 },
    RaidInfo { name: "2막 / 아브렐슈드 노말", min_item_level: 1670, clear_gold: 16500 },
    RaidInfo { name: "2막 / 아브렐슈드 하드", min_item_level: 1690, clear_gold: 23000 },
    RaidInfo { name: "3막 / 모르둠 노말", min_item_level: 1680, clear_gold: 21000 },
    RaidInfo { name: "3막 / 모르둠 하드", min_item_level: 1700, clear_gold: 27000 },
    RaidInfo { name: "4막 / 아르모체 노말", min_item_level: 1700, clear_gold: 33000 },
    RaidInfo { name: "4막 / 아르모체 하드", min_item_level: 1720, clear_gold: 42000 },
    RaidInfo { name: "종막 / 카제로스 노말", min_item_level: 1710, clear_gold: 40000 },
    RaidInfo { name: "종막 / 카제로스 하드", min_item_level: 1730, clear_gold: 52000 },
];

/// All known raids, in display order.
pub fn raid_catalog() -> &'static [RaidInfo] {
    &RAID_CATALOG
}

/// Look up a raid by its exact display name.
pub fn find_raid(name: &str) -> Option<&'static RaidInfo> {
    RAID_CATALOG.iter().find(|raid| raid.name == name)
}

/// Raids a character with the given item level may enter.
pub fn eligible_raids(item_level: f64) -> impl Iterator<Item = &'static RaidInfo> {
    RAID_CATALOG
        .iter()
        .filter(move |raid| item_level >= f64::from(raid.min_item_level))
}

/// Parse the API's item level string (`"1,680.00"`).
pub fn parse_item_level(raw: &str) -> Option<f64> {
    let cleaned: String = raw.trim().chars().filter(|c| *c != ',').collect();
    cleaned.parse::<f64>().ok().filter(|level| level.is_finite())
}
