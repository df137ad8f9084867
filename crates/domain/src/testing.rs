//! Profile fixtures shared by domain and client tests

use serde_json::{json, Value};

use crate::value_objects::{validate, CharacterProfile};

/// Raw armory payload for a level 60 bard with the given name.
pub fn sample_profile_json(name: &str) -> Value {
    json!({
        "CharacterImage": format!("https://img.lostark.co.kr/armory/{}.png", name),
        "ExpeditionLevel": 250,
        "TownLevel": 70,
        "TownName": "Sunflower Isle",
        "Title": null,
        "GuildMemberGrade": "Member",
        "GuildName": "Mint",
        "UsingSkillPoint": 420,
        "TotalSkillPoint": 432,
        "Stats": [
            { "Type": "Crit", "Value": "612", "Tooltip": ["<b>Crit</b>", "+21.8%"] },
            { "Type": "Swiftness", "Value": "1790", "Tooltip": ["<b>Swiftness</b>"] }
        ],
        "Tendencies": [
            { "Type": "Intellect", "Point": 1000, "MaxPoint": 1000 }
        ],
        "CombatPower": "1,842.25",
        "Decorations": { "Symbol": null, "Emblems": null },
        "HonorPoint": 1400,
        "ServerName": "Luterra",
        "CharacterName": name,
        "CharacterLevel": 60,
        "CharacterClassName": "Bard",
        "ItemAvgLevel": "1,680.00"
    })
}

/// Validated profile built from [`sample_profile_json`].
pub fn sample_profile(name: &str) -> CharacterProfile {
    match validate(&sample_profile_json(name)) {
        Ok(profile) => profile,
        Err(err) => panic!("sample profile must validate: {err}"),
    }
}
