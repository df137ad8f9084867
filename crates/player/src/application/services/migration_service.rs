//! Legacy State Migrator - upgrades stored rosters to the current shape
//!
//! Three shapes have been written by earlier clients:
//!
//! 1. a single raid under `loa-mint-raid-state`
//!    (`{raidName, raidSize, participants: [Profile | null]}`)
//! 2. a raid list under `loa-mint-raids` whose participants are bare
//!    `Profile | null` entries without slot identity
//! 3. the current raid list, participants shaped `{id, character}`
//!
//! Each shape has exactly one rule. Anything that does not fit a rule is
//! treated as no data at all; startup never fails because of stored state.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::ports::outbound::{storage_keys, StorageProvider};
use raidmint_domain::{
    safe_validate, CharacterProfile, ParticipantSlot, Raid, RaidCollection, RaidId, RaidSize,
    SlotId, ValidationOutcome,
};

/// Name given to the raid recovered from the single-raid key when it had none.
pub const LEGACY_DEFAULT_RAID_NAME: &str = "My Raid";

/// Which rule produced the collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrationSource {
    /// Rule 1: the single-raid key was converted into a one-raid collection
    LegacySingleRaid,
    /// Rule 2: the collection key was read; `upgraded` raids needed new slots
    Collection { upgraded: usize },
    /// Rule 3: nothing stored
    Empty,
    /// Stored data could not be read and was discarded
    Unreadable,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Migration {
    pub collection: RaidCollection,
    pub source: MigrationSource,
}

/// Why stored data did not match any known shape
#[derive(Debug, Error)]
enum ShapeError {
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported raid size: {0}")]
    Size(Value),
}

/// Stored state, classified by shape
enum PersistedState {
    LegacySingleRaid(LegacyRaidState),
    Collection(Vec<RaidRecord>),
    Empty,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LegacyRaidState {
    #[serde(default)]
    raid_name: Option<String>,
    #[serde(default)]
    raid_size: Option<Value>,
    #[serde(default)]
    participants: Option<Vec<Value>>,
}

#[derive(Deserialize)]
struct RaidRecord {
    #[serde(default)]
    id: Option<RaidId>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    size: Option<Value>,
    #[serde(default)]
    participants: Option<Vec<Value>>,
}

#[derive(Deserialize)]
struct SlotRecord {
    id: SlotId,
    character: Option<Value>,
}

/// Participants of one stored raid, classified by shape
enum Participants {
    Missing,
    Bare(Vec<Value>),
    Slotted(Vec<SlotRecord>),
}

impl Participants {
    fn classify(entries: Option<Vec<Value>>) -> Result<Self, ShapeError> {
        let entries = entries.unwrap_or_default();
        match entries.first() {
            None => Ok(Self::Missing),
            Some(first) if is_slot_record(first) => {
                let slots = entries
                    .into_iter()
                    .map(serde_json::from_value::<SlotRecord>)
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Self::Slotted(slots))
            }
            Some(_) => Ok(Self::Bare(entries)),
        }
    }
}

// A bare profile never carries both keys; a slot record always does.
fn is_slot_record(entry: &Value) -> bool {
    entry
        .as_object()
        .is_some_and(|fields| fields.contains_key("id") && fields.contains_key("character"))
}

/// Runs the migration against a storage provider and writes the result back.
pub struct LegacyStateMigrator<S: StorageProvider> {
    storage: S,
}

impl<S: StorageProvider> LegacyStateMigrator<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Read stored state, convert it, and persist the current shape.
    ///
    /// A converted single-raid entry is removed once the collection is saved.
    pub fn migrate(&self) -> Migration {
        let stored = self.storage.load(storage_keys::RAIDS);
        let legacy = self.storage.load(storage_keys::LEGACY_RAID_STATE);

        let migration = migrate_persisted(stored.as_deref(), legacy.as_deref());

        match serde_json::to_string(&migration.collection) {
            Ok(json) => {
                self.storage.save(storage_keys::RAIDS, &json);
                // Converted raid now lives under the collection key
                if migration.source == MigrationSource::LegacySingleRaid {
                    self.storage.remove(storage_keys::LEGACY_RAID_STATE);
                }
            }
            Err(e) => tracing::error!("Failed to serialize migrated raids: {}", e),
        }

        tracing::info!(
            source = ?migration.source,
            raids = migration.collection.len(),
            "Loaded raid collection"
        );
        migration
    }
}

/// Convert the raw values of the collection key and the legacy single-raid
/// key into a current-shape collection. Pure; see the module docs for rules.
pub fn migrate_persisted(collection: Option<&str>, legacy: Option<&str>) -> Migration {
    match classify(collection, legacy).and_then(build) {
        Ok(migration) => migration,
        Err(e) => {
            tracing::warn!("Discarding unreadable stored raids: {}", e);
            Migration {
                collection: RaidCollection::new(),
                source: MigrationSource::Unreadable,
            }
        }
    }
}

fn classify(collection: Option<&str>, legacy: Option<&str>) -> Result<PersistedState, ShapeError> {
    match (collection, legacy) {
        (Some(raw), _) => Ok(PersistedState::Collection(serde_json::from_str(raw)?)),
        (None, Some(raw)) => Ok(PersistedState::LegacySingleRaid(serde_json::from_str(raw)?)),
        (None, None) => Ok(PersistedState::Empty),
    }
}

fn build(state: PersistedState) -> Result<Migration, ShapeError> {
    match state {
        PersistedState::LegacySingleRaid(legacy) => {
            let size = raid_size(legacy.raid_size.as_ref())?;
            let name = legacy
                .raid_name
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| LEGACY_DEFAULT_RAID_NAME.to_string());
            let participants = wrap_bare(legacy.participants.unwrap_or_default(), size);

            let raid = Raid::from_parts(RaidId::new(), name, size, participants);
            Ok(Migration {
                collection: RaidCollection::from_raids([raid]),
                source: MigrationSource::LegacySingleRaid,
            })
        }
        PersistedState::Collection(records) => {
            let mut upgraded = 0;
            let raids = records
                .into_iter()
                .map(|record| -> Result<Raid, ShapeError> {
                    let (raid, was_upgraded) = build_raid(record)?;
                    upgraded += usize::from(was_upgraded);
                    Ok(raid)
                })
                .collect::<Result<Vec<_>, _>>()?;

            Ok(Migration {
                collection: RaidCollection::from_raids(raids),
                source: MigrationSource::Collection { upgraded },
            })
        }
        PersistedState::Empty => Ok(Migration {
            collection: RaidCollection::new(),
            source: MigrationSource::Empty,
        }),
    }
}

/// Build one raid from a stored record. The flag is true when the record
/// needed new slots.
fn build_raid(record: RaidRecord) -> Result<(Raid, bool), ShapeError> {
    let size = raid_size(record.size.as_ref())?;
    let id = record.id.unwrap_or_default();
    let name = record.name.unwrap_or_default();

    let (participants, upgraded) = match Participants::classify(record.participants)? {
        Participants::Missing => (empty_slots(size.slots()), true),
        Participants::Bare(entries) => (wrap_bare(entries, size), true),
        // Current shape: taken as stored, slot count included
        Participants::Slotted(slots) => (
            slots
                .into_iter()
                .map(|slot| ParticipantSlot::from_parts(slot.id, occupant(slot.character)))
                .collect(),
            false,
        ),
    };

    Ok((Raid::from_parts(id, name, size, participants), upgraded))
}

/// Stored size, or the default when absent or falsy.
fn raid_size(raw: Option<&Value>) -> Result<RaidSize, ShapeError> {
    match raw {
        None | Some(Value::Null) | Some(Value::Bool(false)) => Ok(RaidSize::default()),
        Some(Value::String(s)) if s.is_empty() => Ok(RaidSize::default()),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => Ok(RaidSize::default()),
        Some(value @ Value::Number(n)) => n
            .as_u64()
            .and_then(|size| RaidSize::try_from(size).ok())
            .ok_or_else(|| ShapeError::Size(value.clone())),
        Some(other) => Err(ShapeError::Size(other.clone())),
    }
}

/// Give every bare entry a fresh slot, then pad up to the capacity.
fn wrap_bare(entries: Vec<Value>, size: RaidSize) -> Vec<ParticipantSlot> {
    let mut slots: Vec<ParticipantSlot> = entries
        .into_iter()
        .map(|entry| ParticipantSlot::from_parts(SlotId::new(), occupant(Some(entry))))
        .collect();
    let missing = size.slots().saturating_sub(slots.len());
    slots.extend(empty_slots(missing));
    slots
}

fn empty_slots(count: usize) -> Vec<ParticipantSlot> {
    std::iter::repeat_with(ParticipantSlot::empty)
        .take(count)
        .collect()
}

/// A stored occupant, re-validated. Entries that no longer validate become
/// empty slots.
fn occupant(raw: Option<Value>) -> Option<CharacterProfile> {
    match raw {
        None | Some(Value::Null) => None,
        Some(raw) => match safe_validate(&raw) {
            ValidationOutcome::Valid(profile) => Some(profile),
            ValidationOutcome::Invalid(e) => {
                tracing::warn!(field = %e.field, "Dropping stored character: {}", e);
                None
            }
        },
    }
}
