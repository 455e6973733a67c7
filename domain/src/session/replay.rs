//! Play-again answer parsing

/// Whether the player wants another session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplayDecision {
    PlayAgain,
    Quit,
}

impl ReplayDecision {
    /// `y` / `yes` (any case) replays; anything else quits.
    /// A closed input (`None`) quits.
    pub fn from_answer(answer: Option<&str>) -> Self {
        match answer.map(|a| a.trim().to_lowercase()) {
            Some(a) if a == "y" || a == "yes" => ReplayDecision::PlayAgain,
            _ => ReplayDecision::Quit,
        }
    }

    pub fn play_again(&self) -> bool {
        matches!(self, ReplayDecision::PlayAgain)
    }
}
