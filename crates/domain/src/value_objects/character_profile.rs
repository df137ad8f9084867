//! Character profile value object and its structural validator
//!
//! Profiles come from the armory API as untyped JSON. Nothing enters a raid
//! without passing [`validate`], which checks every field in schema order and
//! reports the first one that does not conform. Checks are structural only:
//! a negative honor point count is accepted, a string honor point count is not.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use thiserror::Error;

/// A character as returned by the armory profile endpoint.
///
/// Field names on the wire are the API's PascalCase names. `character_name`
/// is the key used for de-duplication inside a raid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CharacterProfile {
    pub character_image: String,
    pub expedition_level: Number,
    pub town_level: Number,
    pub town_name: String,
    pub title: Option<String>,
    pub guild_member_grade: String,
    pub guild_name: String,
    pub using_skill_point: Number,
    pub total_skill_point: Number,
    pub stats: Vec<Stat>,
    pub tendencies: Vec<Tendency>,
    pub combat_power: String,
    pub decorations: Decorations,
    pub honor_point: Number,
    pub server_name: String,
    pub character_name: String,
    pub character_level: Number,
    pub character_class_name: String,
    pub item_avg_level: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Stat {
    #[serde(rename = "Type")]
    pub kind: String,
    pub value: String,
    pub tooltip: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Tendency {
    #[serde(rename = "Type")]
    pub kind: String,
    pub point: Number,
    pub max_point: Number,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Decorations {
    pub symbol: Option<String>,
    pub emblems: Option<String>,
}

impl CharacterProfile {
    /// The de-duplication key.
    pub fn name(&self) -> &str {
        &self.character_name
    }

    /// Item level as a number, if the API string is parseable.
    pub fn item_level(&self) -> Option<f64> {
        crate::value_objects::parse_item_level(&self.item_avg_level)
    }
}

/// The first field of a raw profile that does not match the schema.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Invalid character profile: `{field}` must be {expected}")]
pub struct SchemaError {
    /// Path of the offending field, e.g. `Stats[1].Tooltip[0]`
    pub field: String,
    pub expected: &'static str,
}

impl SchemaError {
    fn new(field: impl Into<String>, expected: &'static str) -> Self {
        Self {
            field: field.into(),
            expected,
        }
    }
}

/// Non-failing validation result for call sites that only probe data.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationOutcome {
    Valid(CharacterProfile),
    Invalid(SchemaError),
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    pub fn ok(self) -> Option<CharacterProfile> {
        match self {
            Self::Valid(profile) => Some(profile),
            Self::Invalid(_) => None,
        }
    }

    pub fn into_result(self) -> Result<CharacterProfile, SchemaError> {
        match self {
            Self::Valid(profile) => Ok(profile),
            Self::Invalid(err) => Err(err),
        }
    }
}

/// Validate raw JSON against the profile schema.
///
/// # Errors
///
/// Returns a [`SchemaError`] naming the first non-conforming field.
pub fn validate(raw: &Value) -> Result<CharacterProfile, SchemaError> {
    let root = Fields::root(raw)?;

    Ok(CharacterProfile {
        character_image: root.string("CharacterImage")?,
        expedition_level: root.number("ExpeditionLevel")?,
        town_level: root.number("TownLevel")?,
        town_name: root.string("TownName")?,
        title: root.nullable_string("Title")?,
        guild_member_grade: root.string("GuildMemberGrade")?,
        guild_name: root.string("GuildName")?,
        using_skill_point: root.number("UsingSkillPoint")?,
        total_skill_point: root.number("TotalSkillPoint")?,
        stats: root.array("Stats", |value, path| {
            let stat = Fields::nested(value, path)?;
            Ok(Stat {
                kind: stat.string("Type")?,
                value: stat.string("Value")?,
                tooltip: stat.array("Tooltip", |line, path| {
                    line.as_str()
                        .map(str::to_owned)
                        .ok_or_else(|| SchemaError::new(path, "a string"))
                })?,
            })
        })?,
        tendencies: root.array("Tendencies", |value, path| {
            let tendency = Fields::nested(value, path)?;
            Ok(Tendency {
                kind: tendency.string("Type")?,
                point: tendency.number("Point")?,
                max_point: tendency.number("MaxPoint")?,
            })
        })?,
        combat_power: root.string("CombatPower")?,
        decorations: {
            let decorations = root.object("Decorations")?;
            Decorations {
                symbol: decorations.nullable_string("Symbol")?,
                emblems: decorations.nullable_string("Emblems")?,
            }
        },
        honor_point: root.number("HonorPoint")?,
        server_name: root.string("ServerName")?,
        character_name: root.string("CharacterName")?,
        character_level: root.number("CharacterLevel")?,
        character_class_name: root.string("CharacterClassName")?,
        item_avg_level: root.string("ItemAvgLevel")?,
    })
}

/// Validate without failing; see [`ValidationOutcome`].
pub fn safe_validate(raw: &Value) -> ValidationOutcome {
    match validate(raw) {
        Ok(profile) => ValidationOutcome::Valid(profile),
        Err(err) => ValidationOutcome::Invalid(err),
    }
}

/// Typed field access over one JSON object, tracking the path for errors.
struct Fields<'a> {
    path: String,
    map: &'a Map<String, Value>,
}

impl<'a> Fields<'a> {
    fn root(value: &'a Value) -> Result<Self, SchemaError> {
        value
            .as_object()
            .map(|map| Self {
                path: String::new(),
                map,
            })
            .ok_or_else(|| SchemaError::new("<root>", "an object"))
    }

    fn nested(value: &'a Value, path: String) -> Result<Self, SchemaError> {
        match value.as_object() {
            Some(map) => Ok(Self { path, map }),
            None => Err(SchemaError::new(path, "an object")),
        }
    }

    fn path_of(&self, key: &str) -> String {
        if self.path.is_empty() {
            key.to_string()
        } else {
            format!("{}.{}", self.path, key)
        }
    }

    fn string(&self, key: &str) -> Result<String, SchemaError> {
        match self.map.get(key) {
            Some(Value::String(s)) => Ok(s.clone()),
            _ => Err(SchemaError::new(self.path_of(key), "a string")),
        }
    }

    // Null is allowed, a missing key is not.
    fn nullable_string(&self, key: &str) -> Result<Option<String>, SchemaError> {
        match self.map.get(key) {
            Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            _ => Err(SchemaError::new(self.path_of(key), "a string or null")),
        }
    }

    // Any JSON number; integers and floats keep their wire form.
    fn number(&self, key: &str) -> Result<Number, SchemaError> {
        match self.map.get(key) {
            Some(Value::Number(n)) => Ok(n.clone()),
            _ => Err(SchemaError::new(self.path_of(key), "a number")),
        }
    }

    fn object(&self, key: &str) -> Result<Fields<'a>, SchemaError> {
        let path = self.path_of(key);
        match self.map.get(key) {
            Some(value) => Self::nested(value, path),
            None => Err(SchemaError::new(path, "an object")),
        }
    }

    fn array<T>(
        &self,
        key: &str,
        item: impl Fn(&'a Value, String) -> Result<T, SchemaError>,
    ) -> Result<Vec<T>, SchemaError> {
        let path = self.path_of(key);
        let Some(Value::Array(values)) = self.map.get(key) else {
            return Err(SchemaError::new(path, "an array"));
        };
        values
            .iter()
            .enumerate()
            .map(|(index, value)| item(value, format!("{}[{}]", path, index)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{sample_profile, sample_profile_json};
    use serde_json::json;

    mod validate {
        use super::*;

        #[test]
        fn accepts_a_complete_profile() {
            let profile = validate(&sample_profile_json("Bardella")).unwrap();

            assert_eq!(profile.name(), "Bardella");
            assert_eq!(profile.character_class_name, "Bard");
            assert_eq!(profile.server_name, "Luterra");
            assert_eq!(profile.stats.len(), 2);
            assert_eq!(profile.stats[0].tooltip.len(), 2);
            assert_eq!(profile.tendencies[0].max_point, Number::from(1000));
            assert!(profile.title.is_none());
        }

        #[test]
        fn drops_unknown_fields() {
            let mut raw = sample_profile_json("Bardella");
            raw["ItemMaxLevel"] = json!("1,690.00");

            let profile = validate(&raw).unwrap();
            let round_trip = serde_json::to_value(&profile).unwrap();

            assert!(round_trip.get("ItemMaxLevel").is_none());
        }

        #[test]
        fn rejects_non_object_root() {
            let err = validate(&json!(null)).unwrap_err();
            assert_eq!(err.field, "<root>");
            assert_eq!(err.expected, "an object");
        }

        #[test]
        fn names_the_first_bad_field() {
            let mut raw = sample_profile_json("Bardella");
            raw["TownLevel"] = json!("seventy");
            raw["CharacterName"] = json!(42);

            let err = validate(&raw).unwrap_err();

            assert_eq!(err.field, "TownLevel");
            assert_eq!(err.expected, "a number");
        }

        #[test]
        fn nullable_fields_must_still_be_present() {
            let mut raw = sample_profile_json("Bardella");
            raw.as_object_mut().unwrap().remove("Title");

            let err = validate(&raw).unwrap_err();
            assert_eq!(err.field, "Title");
        }

        #[test]
        fn reports_nested_array_paths() {
            let mut raw = sample_profile_json("Bardella");
            raw["Stats"][1]["Tooltip"][0] = json!(7);

            let err = validate(&raw).unwrap_err();
            assert_eq!(err.field, "Stats[1].Tooltip[0]");
            assert_eq!(err.expected, "a string");
        }

        #[test]
        fn reports_nested_object_paths() {
            let mut raw = sample_profile_json("Bardella");
            raw["Decorations"]["Emblems"] = json!(["a"]);

            let err = validate(&raw).unwrap_err();
            assert_eq!(err.field, "Decorations.Emblems");
            assert_eq!(err.to_string(), "Invalid character profile: `Decorations.Emblems` must be a string or null");
        }

        #[test]
        fn is_structural_only() {
            let mut raw = sample_profile_json("Bardella");
            raw["HonorPoint"] = json!(-5);
            raw["ItemAvgLevel"] = json!("not a level");

            assert!(validate(&raw).is_ok());
        }

        #[test]
        fn accepts_fractional_numbers() {
            let mut raw = sample_profile_json("Bardella");
            raw["CharacterLevel"] = json!(60.0);
            raw["HonorPoint"] = json!(1400.5);
            raw["Tendencies"][0]["Point"] = json!(999.9);

            let profile = validate(&raw).unwrap();

            assert_eq!(profile.character_level.as_f64(), Some(60.0));
            assert_eq!(profile.honor_point.as_f64(), Some(1400.5));
            assert_eq!(profile.tendencies[0].point.as_f64(), Some(999.9));

            let round_trip = serde_json::to_value(&profile).unwrap();
            assert_eq!(round_trip["HonorPoint"], json!(1400.5));
            assert_eq!(validate(&round_trip).unwrap(), profile);
        }

        #[test]
        fn serialized_profile_validates_to_itself() {
            let profile = sample_profile("Bardella");
            let raw = serde_json::to_value(&profile).unwrap();

            assert_eq!(validate(&raw).unwrap(), profile);
        }
    }

    mod safe_validate {
        use super::*;

        #[test]
        fn returns_valid_outcome() {
            let outcome = safe_validate(&sample_profile_json("Bardella"));
            assert!(outcome.is_valid());
            assert_eq!(outcome.ok().map(|p| p.character_name), Some("Bardella".to_string()));
        }

        #[test]
        fn returns_invalid_outcome_instead_of_failing() {
            let outcome = safe_validate(&json!({ "CharacterName": "Bardella" }));
            assert!(!outcome.is_valid());

            let err = outcome.into_result().unwrap_err();
            assert_eq!(err.field, "CharacterImage");
        }
    }

    #[test]
    fn item_level_parses_api_format() {
        let profile = sample_profile("Bardella");
        assert_eq!(profile.item_level(), Some(1680.0));
    }
}
