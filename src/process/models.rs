/*!
 * Interview process data models.
 */

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stage of an interview process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProcessStage {
    Apply,
    Reject,
    Oa,
    Phone,
    Onsite,
    Offer,
}

impl ProcessStage {
    /// Every stage, in pipeline order
    pub const ALL: [ProcessStage; 6] = [
        ProcessStage::Apply,
        ProcessStage::Reject,
        ProcessStage::Oa,
        ProcessStage::Phone,
        ProcessStage::Onsite,
        ProcessStage::Offer,
    ];

    /// Canonical lowercase key, as typed in commands and stored on disk
    pub fn as_str(self) -> &'static str {
        match self {
            ProcessStage::Apply => "apply",
            ProcessStage::Reject => "reject",
            ProcessStage::Oa => "oa",
            ProcessStage::Phone => "phone",
            ProcessStage::Onsite => "onsite",
            ProcessStage::Offer => "offer",
        }
    }

    /// Human-facing label
    pub fn display(self) -> &'static str {
        match self {
            ProcessStage::Apply => "Apply",
            ProcessStage::Reject => "Reject",
            ProcessStage::Oa => "OA",
            ProcessStage::Phone => "Phone",
            ProcessStage::Onsite => "Onsite",
            ProcessStage::Offer => "Offer",
        }
    }
}

impl fmt::Display for ProcessStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

impl FromStr for ProcessStage {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "apply" => Ok(ProcessStage::Apply),
            "reject" => Ok(ProcessStage::Reject),
            "oa" => Ok(ProcessStage::Oa),
            "phone" => Ok(ProcessStage::Phone),
            "onsite" => Ok(ProcessStage::Onsite),
            "offer" => Ok(ProcessStage::Offer),
            _ => Err(()),
        }
    }
}

/// One recorded interview process event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessRecord {
    pub id: String,
    pub company: String,
    pub stage: ProcessStage,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProcessRecord {
    pub fn new(company: impl Into<String>, stage: ProcessStage) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            company: company.into(),
            stage,
            created_at: now,
            updated_at: now,
        }
    }
}
