use serde::{Deserialize, Serialize};

/// How the play was initiated.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum CallType {
    #[default]
    #[serde(rename = "Early Offense")]
    EarlyOffense,
    Halfcourt,
    /// Baseline out-of-bounds.
    #[serde(rename = "BLOB")]
    Blob,
    /// Sideline out-of-bounds.
    #[serde(rename = "SLOB")]
    Slob,
    Zone,
}

impl CallType {
    pub const ALL: [CallType; 5] = [
        CallType::EarlyOffense,
        CallType::Halfcourt,
        CallType::Blob,
        CallType::Slob,
        CallType::Zone,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CallType::EarlyOffense => "Early Offense",
            CallType::Halfcourt => "Halfcourt",
            CallType::Blob => "BLOB",
            CallType::Slob => "SLOB",
            CallType::Zone => "Zone",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Caller {
    #[default]
    Coach,
    Player,
}

impl Caller {
    pub const ALL: [Caller; 2] = [Caller::Coach, Caller::Player];

    pub fn as_str(&self) -> &'static str {
        match self {
            Caller::Coach => "Coach",
            Caller::Player => "Player",
        }
    }
}

/// Result of the possession.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum Outcome {
    #[default]
    #[serde(rename = "Made 2")]
    Made2,
    #[serde(rename = "Missed 2")]
    Missed2,
    #[serde(rename = "Made 3")]
    Made3,
    #[serde(rename = "Missed 3")]
    Missed3,
    #[serde(rename = "Foul (Made 1 of 2)")]
    FoulMade1of2,
    #[serde(rename = "Foul (Made 2 of 2)")]
    FoulMade2of2,
    #[serde(rename = "Foul (Missed Both)")]
    FoulMissedBoth,
    Turnover,
    #[serde(rename = "Dead Ball")]
    DeadBall,
}

impl Outcome {
    pub const ALL: [Outcome; 9] = [
        Outcome::Made2,
        Outcome::Missed2,
        Outcome::Made3,
        Outcome::Missed3,
        Outcome::FoulMade1of2,
        Outcome::FoulMade2of2,
        Outcome::FoulMissedBoth,
        Outcome::Turnover,
        Outcome::DeadBall,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Made2 => "Made 2",
            Outcome::Missed2 => "Missed 2",
            Outcome::Made3 => "Made 3",
            Outcome::Missed3 => "Missed 3",
            Outcome::FoulMade1of2 => "Foul (Made 1 of 2)",
            Outcome::FoulMade2of2 => "Foul (Made 2 of 2)",
            Outcome::FoulMissedBoth => "Foul (Missed Both)",
            Outcome::Turnover => "Turnover",
            Outcome::DeadBall => "Dead Ball",
        }
    }
}

/// Whether the possession was extended by an offensive rebound.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum SecondChance {
    #[default]
    No,
    Yes,
}

impl SecondChance {
    pub const ALL: [SecondChance; 2] = [SecondChance::No, SecondChance::Yes];

    pub fn as_str(&self) -> &'static str {
        match self {
            SecondChance::No => "No",
            SecondChance::Yes => "Yes",
        }
    }
}

/// One tagged play. `points` is derived from `outcome` when the entry is
/// created and is never edited afterward.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub sequence: u64,
    pub timestamp: String,
    pub play_name: String,
    pub call_type: CallType,
    pub caller: Caller,
    pub outcome: Outcome,
    pub points: u32,
    pub second_chance: SecondChance,
}

impl Entry {
    /// Display values in column order.
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.timestamp.clone(),
            self.play_name.clone(),
            self.call_type.as_str().to_string(),
            self.caller.as_str().to_string(),
            self.outcome.as_str().to_string(),
            self.points.to_string(),
            self.second_chance.as_str().to_string(),
        ]
    }
}

/// Submitted form values. Points are not part of the form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FormState {
    pub use_current_time: bool,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub play_name: String,
    #[serde(default)]
    pub call_type: CallType,
    #[serde(default)]
    pub caller: Caller,
    #[serde(default)]
    pub outcome: Outcome,
    #[serde(default)]
    pub second_chance: SecondChance,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            use_current_time: true,
            timestamp: String::new(),
            play_name: String::new(),
            call_type: CallType::default(),
            caller: Caller::default(),
            outcome: Outcome::default(),
            second_chance: SecondChance::default(),
        }
    }
}
