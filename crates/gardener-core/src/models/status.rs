//! Closed vocabulary enumerations for ticket fields.
//!
//! These mirror the values the consumer application recognizes; typed
//! variants keep generated data inside the vocabulary and make loading a
//! document with out-of-range values fail as a format error.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of ticket workflow statuses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum TicketStatus {
    /// Freshly reported, not yet triaged
    #[default]
    New,

    /// Work on the ticket has started
    InProgress,

    /// Work finished and verified
    Completed,

    /// Waiting on scheduling or resources
    Pending,
}

impl FromStr for TicketStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "new" => Ok(TicketStatus::New),
            "inprogress" | "in_progress" => Ok(TicketStatus::InProgress),
            "completed" => Ok(TicketStatus::Completed),
            "pending" => Ok(TicketStatus::Pending),
            _ => Err(format!("Invalid ticket status: {s}")),
        }
    }
}

impl TicketStatus {
    /// Convert to the wire string used in the data file.
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketStatus::New => "new",
            TicketStatus::InProgress => "inProgress",
            TicketStatus::Completed => "completed",
            TicketStatus::Pending => "pending",
        }
    }
}

/// Type-safe enumeration of incident categories.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Caused by an accident (vehicle strike, construction, ...)
    Accident,

    /// Caused by weather or natural decay
    Nature,

    /// General damage report
    Damage,
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "accident" => Ok(Category::Accident),
            "nature" => Ok(Category::Nature),
            "damage" => Ok(Category::Damage),
            _ => Err(format!("Invalid category: {s}")),
        }
    }
}

impl Category {
    /// Convert to the wire string used in the data file.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Accident => "accident",
            Category::Nature => "nature",
            Category::Damage => "damage",
        }
    }
}

/// Type-safe enumeration of ticket priorities.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Handled in the normal maintenance rotation
    Normal,

    /// Needs crew attention ahead of the rotation
    Urgent,
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "normal" => Ok(Priority::Normal),
            "urgent" => Ok(Priority::Urgent),
            _ => Err(format!("Invalid priority: {s}")),
        }
    }
}

impl Priority {
    /// Convert to the wire string used in the data file.
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Normal => "normal",
            Priority::Urgent => "urgent",
        }
    }
}

/// Type-safe enumeration of tree damage kinds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DamageType {
    /// Broken or torn branches
    Broken,

    /// Trunk leaning off vertical
    Tilted,

    /// Tree down entirely
    Fallen,

    /// Dead tree slated for replacement planting
    Replant,
}

impl FromStr for DamageType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "broken" => Ok(DamageType::Broken),
            "tilted" => Ok(DamageType::Tilted),
            "fallen" => Ok(DamageType::Fallen),
            "replant" => Ok(DamageType::Replant),
            _ => Err(format!("Invalid damage type: {s}")),
        }
    }
}

impl DamageType {
    /// Convert to the wire string used in the data file.
    pub fn as_str(&self) -> &'static str {
        match self {
            DamageType::Broken => "broken",
            DamageType::Tilted => "tilted",
            DamageType::Fallen => "fallen",
            DamageType::Replant => "replant",
        }
    }

    /// Display label used when composing ticket titles.
    pub fn display_name(&self) -> &'static str {
        match self {
            DamageType::Fallen => "โค่นล้ม",
            DamageType::Broken => "กิ่งหัก/ฉีก",
            DamageType::Tilted => "ลำต้นเอียง",
            DamageType::Replant => "อื่นๆ",
        }
    }
}
