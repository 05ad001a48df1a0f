// src/matchup.rs
//! Head-to-head detection from the event display name. Heuristic: the
//! catalogue writes two-participant events as "Home vs. Away".

const VERSUS_SEPARATOR: &str = " vs. ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    HeadToHead { home: String, away: String },
    Single,
}

impl EventKind {
    /// Exactly one `" vs. "` with non-empty trimmed sides makes a match;
    /// anything else (tournaments, shows, 24/7 channels) stays `Single`.
    pub fn parse(name: &str) -> Self {
        let parts: Vec<&str> = name.split(VERSUS_SEPARATOR).collect();
        if parts.len() == 2 {
            let home = parts[0].trim();
            let away = parts[1].trim();
            if !home.is_empty() && !away.is_empty() {
                return EventKind::HeadToHead {
                    home: home.to_string(),
                    away: away.to_string(),
                };
            }
        }
        EventKind::Single
    }

    pub fn is_head_to_head(&self) -> bool {
        matches!(self, EventKind::HeadToHead { .. })
    }

    /// `(home, away)` when head-to-head.
    pub fn participants(&self) -> Option<(&str, &str)> {
        match self {
            EventKind::HeadToHead { home, away } => Some((home, away)),
            EventKind::Single => None,
        }
    }
}
