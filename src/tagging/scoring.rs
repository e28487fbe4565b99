use crate::models::Outcome;

/// Points credited for a possession outcome.
pub fn resolve_points(outcome: Outcome) -> u32 {
    match outcome {
        Outcome::Made2 => 2,
        Outcome::Made3 => 3,
        Outcome::FoulMade1of2 => 1,
        Outcome::FoulMade2of2 => 2,
        Outcome::Missed2
        | Outcome::Missed3
        | Outcome::FoulMissedBoth
        | Outcome::Turnover
        | Outcome::DeadBall => 0,
    }
}
