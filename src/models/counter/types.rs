use serde::{Deserialize, Serialize};

/// A service counter ("loket") as returned by `GET /counters`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Counter {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub counter_code: String,
    #[serde(default)]
    pub quota: Option<i64>,
    #[serde(default)]
    pub schedule_start: Option<String>,
    #[serde(default)]
    pub schedule_end: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Capacity class of a counter's daily quota.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuotaBucket {
    Small,
    Medium,
    Large,
    Unlimited,
}

impl QuotaBucket {
    pub const ALL: [QuotaBucket; 4] =
        [QuotaBucket::Small, QuotaBucket::Medium, QuotaBucket::Large, QuotaBucket::Unlimited];

    /// small < 50, medium 50..=100, large > 100. Missing or zero quota is unlimited.
    pub fn of(quota: Option<i64>) -> Self {
        match quota {
            None | Some(0) => QuotaBucket::Unlimited,
            Some(q) if q < 50 => QuotaBucket::Small,
            Some(q) if q <= 100 => QuotaBucket::Medium,
            Some(_) => QuotaBucket::Large,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            QuotaBucket::Small => "small",
            QuotaBucket::Medium => "medium",
            QuotaBucket::Large => "large",
            QuotaBucket::Unlimited => "unlimited",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            QuotaBucket::Small => "Kecil (< 50)",
            QuotaBucket::Medium => "Sedang (50-100)",
            QuotaBucket::Large => "Besar (> 100)",
            QuotaBucket::Unlimited => "Tanpa batas",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.key() == key)
    }
}

impl Counter {
    pub fn quota_bucket(&self) -> QuotaBucket {
        QuotaBucket::of(self.quota)
    }

    pub fn quota_label(&self) -> String {
        match self.quota {
            None | Some(0) => "Tanpa batas".to_string(),
            Some(q) => format!("{q} / hari"),
        }
    }

    /// "08:00 - 15:00", trimming seconds. Empty when no schedule is set.
    pub fn schedule_label(&self) -> String {
        let short = |t: &str| t.get(..5).unwrap_or(t).to_string();
        match (self.schedule_start.as_deref(), self.schedule_end.as_deref()) {
            (Some(s), Some(e)) => format!("{} - {}", short(s), short(e)),
            (Some(s), None) => format!("mulai {}", short(s)),
            (None, Some(e)) => format!("sampai {}", short(e)),
            (None, None) => String::new(),
        }
    }

    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}
