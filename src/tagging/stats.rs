use serde::Serialize;

use crate::models::Entry;

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlayLine {
    pub play_name: String,
    pub possessions: usize,
    pub frequency_pct: f64,
    pub points: u32,
    pub points_per_possession: f64,
    /// Share of possessions that scored at least one point.
    pub success_rate_pct: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PlayStats {
    pub plays: Vec<PlayLine>,
    pub possessions: usize,
    pub points: u32,
    pub points_per_possession: f64,
}

/// Per-play dashboard figures, one line per distinct play name in order of first use.
pub fn summarize(entries: &[Entry]) -> PlayStats {
    if entries.is_empty() {
        return PlayStats::default();
    }

    // (name, possessions, points, scoring possessions)
    let mut tallies: Vec<(&str, usize, u32, usize)> = Vec::new();
    for entry in entries {
        let idx = match tallies.iter().position(|(name, ..)| *name == entry.play_name) {
            Some(idx) => idx,
            None => {
                tallies.push((entry.play_name.as_str(), 0, 0, 0));
                tallies.len() - 1
            }
        };
        let tally = &mut tallies[idx];
        tally.1 += 1;
        tally.2 += entry.points;
        if entry.points > 0 {
            tally.3 += 1;
        }
    }

    let total = entries.len();
    let total_points: u32 = entries.iter().map(|e| e.points).sum();

    let plays = tallies
        .into_iter()
        .map(|(name, possessions, points, scored)| PlayLine {
            play_name: name.to_string(),
            possessions,
            frequency_pct: possessions as f64 * 100.0 / total as f64,
            points,
            points_per_possession: points as f64 / possessions as f64,
            success_rate_pct: scored as f64 * 100.0 / possessions as f64,
        })
        .collect();

    PlayStats {
        plays,
        possessions: total,
        points: total_points,
        points_per_possession: total_points as f64 / total as f64,
    }
}
