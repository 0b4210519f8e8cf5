//! Tab selector for the dashboard views.
//!
//! Exactly one tab is active at any time; switching is the only transition
//! and the selector never terminates on its own.

use std::fmt::{Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

/// The seven mutually exclusive dashboard views.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Tab {
    Dashboard,
    Database,
    AiTraining,
    Simulation,
    Visualization,
    Collaboration,
    Safety,
}

/// Returned when a tab id string does not name any view.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown tab id: {0}")]
pub struct UnknownTab(pub String);

impl Tab {
    /// All tabs in navigation order.
    pub const ALL: [Tab; 7] = [
        Tab::Dashboard,
        Tab::Database,
        Tab::AiTraining,
        Tab::Simulation,
        Tab::Visualization,
        Tab::Collaboration,
        Tab::Safety,
    ];

    /// Stable string id, also accepted by [`FromStr`].
    pub fn id(&self) -> &'static str {
        match self {
            Tab::Dashboard => "dashboard",
            Tab::Database => "database",
            Tab::AiTraining => "ai-training",
            Tab::Simulation => "simulation",
            Tab::Visualization => "visualization",
            Tab::Collaboration => "collaboration",
            Tab::Safety => "safety",
        }
    }

    /// Navigation label shown in the tab bar.
    pub fn label(&self) -> &'static str {
        match self {
            Tab::Dashboard => "Dashboard",
            Tab::Database => "Banco de Dados",
            Tab::AiTraining => "Treinamento IA",
            Tab::Simulation => "Simulação",
            Tab::Visualization => "Visualização",
            Tab::Collaboration => "Colaboração",
            Tab::Safety => "Biossegurança",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Tab::Dashboard => "📊",
            Tab::Database => "🗃️",
            Tab::AiTraining => "🤖",
            Tab::Simulation => "🧪",
            Tab::Visualization => "📈",
            Tab::Collaboration => "👥",
            Tab::Safety => "🛡️",
        }
    }

    /// Position within [`Tab::ALL`].
    pub fn index(&self) -> usize {
        match self {
            Tab::Dashboard => 0,
            Tab::Database => 1,
            Tab::AiTraining => 2,
            Tab::Simulation => 3,
            Tab::Visualization => 4,
            Tab::Collaboration => 5,
            Tab::Safety => 6,
        }
    }

    pub fn next(&self) -> Tab {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }

    pub fn previous(&self) -> Tab {
        Tab::ALL[(self.index() + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }
}

impl FromStr for Tab {
    type Err = UnknownTab;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tab::ALL
            .iter()
            .copied()
            .find(|tab| tab.id() == s)
            .ok_or_else(|| UnknownTab(s.to_string()))
    }
}

impl Display for Tab {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// Every tab id parses back to the tab it came from.
    fn ids_round_trip_through_from_str() {
        for tab in Tab::ALL {
            assert_eq!(tab.id().parse::<Tab>(), Ok(tab));
        }
    }

    #[test]
    /// Unknown ids fail with the offending string attached.
    fn unknown_id_is_an_error() {
        let err = "not-a-real-tab".parse::<Tab>().unwrap_err();
        assert_eq!(err, UnknownTab("not-a-real-tab".to_string()));
    }

    #[test]
    /// Cycling forward seven times returns to the starting tab.
    fn next_and_previous_wrap_around() {
        let mut tab = Tab::Dashboard;
        for _ in 0..Tab::ALL.len() {
            tab = tab.next();
        }
        assert_eq!(tab, Tab::Dashboard);
        assert_eq!(Tab::Dashboard.previous(), Tab::Safety);
        assert_eq!(Tab::Safety.next(), Tab::Dashboard);
    }
}
