//! Admin-console record types and the seed catalog.
//!
//! Three record kinds participate in dual-list assignment (locations, SAP
//! codes, user accounts); the owner entities they get assigned to (roles,
//! scheduled jobs, training projects) are plain records.

use picklist::{PickItem, sort_candidates};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A physical location, keyed by its site code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub code: String,
    pub name: String,
    pub region: String,
    pub sort_order: i64,
}

impl Location {
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        region: impl Into<String>,
        sort_order: i64,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            region: region.into(),
            sort_order,
        }
    }
}

impl PickItem for Location {
    fn id(&self) -> &str {
        &self.code
    }

    fn label(&self) -> &str {
        &self.name
    }

    fn sort_order(&self) -> i64 {
        self.sort_order
    }
}

/// An SAP material/posting code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SapCode {
    pub code: String,
    pub description: String,
    pub sort_order: i64,
}

impl SapCode {
    pub fn new(code: impl Into<String>, description: impl Into<String>, sort_order: i64) -> Self {
        Self {
            code: code.into(),
            description: description.into(),
            sort_order,
        }
    }
}

impl PickItem for SapCode {
    fn id(&self) -> &str {
        &self.code
    }

    fn label(&self) -> &str {
        &self.description
    }

    fn sort_order(&self) -> i64 {
        self.sort_order
    }
}

/// A console user account, keyed by username.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserAccount {
    pub username: String,
    pub display_name: String,
    pub email: String,
    pub sort_order: i64,
}

impl UserAccount {
    pub fn new(
        username: impl Into<String>,
        display_name: impl Into<String>,
        email: impl Into<String>,
        sort_order: i64,
    ) -> Self {
        Self {
            username: username.into(),
            display_name: display_name.into(),
            email: email.into(),
            sort_order,
        }
    }
}

impl PickItem for UserAccount {
    fn id(&self) -> &str {
        &self.username
    }

    fn label(&self) -> &str {
        &self.display_name
    }

    fn sort_order(&self) -> i64 {
        self.sort_order
    }
}

/// An access role that users get assigned to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    pub key: String,
    pub name: String,
    pub description: String,
}

impl Role {
    pub fn new(
        key: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            description: description.into(),
        }
    }
}

/// A scheduled background job that posts against SAP codes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledJob {
    pub id: Uuid,
    pub name: String,
    pub cron: String,
    pub enabled: bool,
}

impl ScheduledJob {
    pub fn new(name: impl Into<String>, cron: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            cron: cron.into(),
            enabled: true,
        }
    }
}

/// Lifecycle stage of an AI-training project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkflowStage {
    Draft,
    Labeling,
    Review,
    Training,
    Delivered,
}

impl WorkflowStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Labeling => "labeling",
            Self::Review => "review",
            Self::Training => "training",
            Self::Delivered => "delivered",
        }
    }
}

impl std::fmt::Display for WorkflowStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An AI-training project that collects data at a set of locations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingProject {
    pub id: Uuid,
    pub name: String,
    pub stage: WorkflowStage,
}

impl TrainingProject {
    pub fn new(name: impl Into<String>, stage: WorkflowStage) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            stage,
        }
    }
}

/// Deterministic seed data standing in for the backend catalog.
pub mod seed {
    use super::*;

    pub fn locations() -> Vec<Location> {
        let mut items = vec![
            Location::new("MUC", "Munich Plant", "EMEA", 10),
            Location::new("BER", "Berlin Office", "EMEA", 20),
            Location::new("VIE", "Vienna Hub", "EMEA", 30),
            Location::new("AUS", "Austin Fab", "AMER", 40),
            Location::new("DET", "Detroit Assembly", "AMER", 50),
            Location::new("NAG", "Nagoya Test Track", "APAC", 60),
            Location::new("SHA", "Shanghai Depot", "APAC", 70),
            Location::new("BLR", "Bangalore Lab", "APAC", 80),
        ];
        sort_candidates(&mut items);
        items
    }

    pub fn sap_codes() -> Vec<SapCode> {
        let mut items = vec![
            SapCode::new("4711-A", "Prototype parts", 10),
            SapCode::new("4711-B", "Series parts", 20),
            SapCode::new("5200-K", "Calibration services", 30),
            SapCode::new("5200-L", "Track rental", 40),
            SapCode::new("6310-C", "Sensor hardware", 50),
            SapCode::new("6310-D", "Compute hardware", 60),
            SapCode::new("7040-X", "External labeling", 70),
            SapCode::new("7040-Y", "External validation", 80),
        ];
        sort_candidates(&mut items);
        items
    }

    pub fn users() -> Vec<UserAccount> {
        let mut items = vec![
            UserAccount::new("afischer", "Anna Fischer", "anna.fischer@example.com", 10),
            UserAccount::new("bkeller", "Ben Keller", "ben.keller@example.com", 20),
            UserAccount::new("cvogel", "Clara Vogel", "clara.vogel@example.com", 30),
            UserAccount::new("dlang", "David Lang", "david.lang@example.com", 40),
            UserAccount::new("ehuber", "Elena Huber", "elena.huber@example.com", 50),
            UserAccount::new("fbrandt", "Felix Brandt", "felix.brandt@example.com", 60),
            UserAccount::new("gmeier", "Greta Meier", "greta.meier@example.com", 70),
            UserAccount::new("hwolf", "Hanna Wolf", "hanna.wolf@example.com", 80),
            UserAccount::new("ilorenz", "Ida Lorenz", "ida.lorenz@example.com", 90),
            UserAccount::new("jbecker", "Jonas Becker", "jonas.becker@example.com", 100),
        ];
        sort_candidates(&mut items);
        items
    }

    pub fn roles() -> Vec<Role> {
        vec![
            Role::new("fleet-admin", "Fleet Admin", "Full access to vehicle fleet records"),
            Role::new("label-review", "Label Reviewer", "Approves externally labeled batches"),
            Role::new("billing", "Billing", "Manages SAP postings and cost centers"),
        ]
    }

    pub fn jobs() -> Vec<ScheduledJob> {
        vec![
            ScheduledJob::new("Nightly posting sync", "0 2 * * *"),
            ScheduledJob::new("Weekly cost rollup", "0 6 * * MON"),
            ScheduledJob::new("Quarterly archive", "0 4 1 */3 *"),
        ]
    }

    pub fn projects() -> Vec<TrainingProject> {
        vec![
            TrainingProject::new("Highway pilot", WorkflowStage::Training),
            TrainingProject::new("Urban perception", WorkflowStage::Labeling),
            TrainingProject::new("Parking assist", WorkflowStage::Review),
        ]
    }
}
