use std::collections::BTreeMap;
use std::fmt;
use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

/// One of the six fixed character attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeId {
    /// Physical power.
    Strength,
    /// Speed and reflexes.
    Agility,
    /// Stamina and toughness.
    Endurance,
    /// Wits and guile.
    Cunning,
    /// Presence and persuasion.
    Charisma,
    /// Resolve and inner strength.
    Will,
}

impl AttributeId {
    /// All attributes in display order.
    pub const ALL: [AttributeId; 6] = [
        Self::Strength,
        Self::Agility,
        Self::Endurance,
        Self::Cunning,
        Self::Charisma,
        Self::Will,
    ];

    /// The lowercase key used in content files.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Strength => "strength",
            Self::Agility => "agility",
            Self::Endurance => "endurance",
            Self::Cunning => "cunning",
            Self::Charisma => "charisma",
            Self::Will => "will",
        }
    }

    /// Look up an attribute by its exact content key. `"Strength"` or
    /// `" will "` are not keys and yield `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.as_str() == key)
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for AttributeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A partial attribute modifier map, as declared on options and appearance entries.
pub type AttributeDeltas = BTreeMap<AttributeId, i32>;

/// A total attribute snapshot. Every attribute is present and defaults to 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Attributes {
    /// Physical power.
    pub strength: i32,
    /// Speed and reflexes.
    pub agility: i32,
    /// Stamina and toughness.
    pub endurance: i32,
    /// Wits and guile.
    pub cunning: i32,
    /// Presence and persuasion.
    pub charisma: i32,
    /// Resolve and inner strength.
    pub will: i32,
}

impl Attributes {
    /// The all-zero baseline snapshot.
    pub const ZERO: Attributes = Attributes {
        strength: 0,
        agility: 0,
        endurance: 0,
        cunning: 0,
        charisma: 0,
        will: 0,
    };

    /// Read one attribute.
    pub fn get(&self, id: AttributeId) -> i32 {
        self.as_array()[id.index()]
    }

    /// Read an attribute by its exact content key. Unknown keys read as 0.
    pub fn get_by_name(&self, name: &str) -> i32 {
        AttributeId::from_key(name).map_or(0, |id| self.get(id))
    }

    /// Overwrite one attribute.
    pub fn set(&mut self, id: AttributeId, value: i32) {
        *self.slot_mut(id) = value;
    }

    /// Add every entry of a partial delta map. Totals saturate at the `i32` bounds.
    pub fn apply(&mut self, deltas: &AttributeDeltas) {
        for (id, delta) in deltas {
            let slot = self.slot_mut(*id);
            *slot = slot.saturating_add(*delta);
        }
    }

    /// Build a snapshot from a partial delta map, starting at zero.
    pub fn from_deltas(deltas: &AttributeDeltas) -> Self {
        let mut attrs = Self::ZERO;
        attrs.apply(deltas);
        attrs
    }

    /// Iterate `(id, value)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (AttributeId, i32)> + '_ {
        AttributeId::ALL.into_iter().map(|id| (id, self.get(id)))
    }

    /// Returns true if every attribute is 0.
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    fn as_array(&self) -> [i32; 6] {
        [
            self.strength,
            self.agility,
            self.endurance,
            self.cunning,
            self.charisma,
            self.will,
        ]
    }

    fn slot_mut(&mut self, id: AttributeId) -> &mut i32 {
        match id {
            AttributeId::Strength => &mut self.strength,
            AttributeId::Agility => &mut self.agility,
            AttributeId::Endurance => &mut self.endurance,
            AttributeId::Cunning => &mut self.cunning,
            AttributeId::Charisma => &mut self.charisma,
            AttributeId::Will => &mut self.will,
        }
    }
}

impl Add for Attributes {
    type Output = Attributes;

    fn add(self, rhs: Attributes) -> Attributes {
        let mut out = self;
        for id in AttributeId::ALL {
            let slot = out.slot_mut(id);
            *slot = slot.saturating_add(rhs.get(id));
        }
        out
    }
}

impl Sub for Attributes {
    type Output = Attributes;

    fn sub(self, rhs: Attributes) -> Attributes {
        let mut out = self;
        for id in AttributeId::ALL {
            let slot = out.slot_mut(id);
            *slot = slot.saturating_sub(rhs.get(id));
        }
        out
    }
}
