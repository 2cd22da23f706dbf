//! Ticket model definition.

use serde::{Deserialize, Serialize};

use super::{Category, DamageType, Priority, TicketStatus};

/// One maintenance/incident record in the shared data file.
///
/// Field names serialize in camelCase to match the document the consumer
/// application reads. The `date` field is a fixed-width, zero-padded
/// `YYYY-MM-DD HH:MM` string, so lexicographic order on it equals
/// chronological order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    /// Unique identifier; generation runs assign decreasing ids below the
    /// lowest existing one
    pub id: i64,

    /// Short headline composed from species and damage vocabulary
    pub title: String,

    /// Free-text detail; may be empty
    pub description: String,

    /// Incident category
    pub category: Category,

    /// Workflow status
    pub status: TicketStatus,

    /// Handling priority
    pub priority: Priority,

    /// Campus zone code (e.g. "A1")
    pub zone: String,

    /// Zone display name matching the zone code
    pub zone_name: String,

    /// Tree species display name
    pub tree_type: String,

    /// Kind of damage observed
    pub damage_type: DamageType,

    /// Trunk circumference in inches; zero for replant work
    pub circumference: u32,

    /// Number of affected trees
    pub quantity: u32,

    /// Free-text impact summary
    pub impact: String,

    /// Free-text remediation description, or a pending-work placeholder
    pub operation: String,

    /// Report timestamp, `YYYY-MM-DD HH:MM`, zero-padded
    pub date: String,

    /// Crew members assigned, without duplicates
    pub assignees: Vec<String>,

    /// Attached image URLs
    pub images: Vec<String>,

    /// Free-form note; generation runs store their batch marker here.
    /// Consumer-created tickets may omit the key entirely.
    #[serde(default)]
    pub notes: String,
}
