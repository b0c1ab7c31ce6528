//! Metrics collection and output for simulation results.

use serde::Serialize;
use werewolf_engine::domain::LogEntry;
use werewolf_engine::{Alignment, RoleName};

use crate::simulator::GameResult;
use crate::types::MetricsLevel;

/// Complete game metrics for output.
#[derive(Debug, Clone, Serialize)]
pub struct GameMetrics {
    pub game_id: u32,
    pub seed: u64,
    pub timestamp: String,
    pub config: RunConfig,
    pub result: GameResultMetrics,
    pub events: EventCounts,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub player_metrics: Vec<PlayerMetrics>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub logs: Vec<LogEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunConfig {
    pub players: usize,
    pub allow_hunter: bool,
    pub provider: String,
    pub language: String,
    pub total_games: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct GameResultMetrics {
    pub winner: Alignment,
    pub days: u32,
    pub steps: usize,
    pub good_survivors: usize,
    pub werewolf_survivors: usize,
    pub duration_ms: f64,
}

/// How often each kind of public event happened, counted from the log.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EventCounts {
    pub werewolf_kills: u32,
    pub poisonings: u32,
    pub heals: u32,
    pub banishments: u32,
    pub inconclusive_votes: u32,
    pub hunter_shots: u32,
    pub peaceful_nights: u32,
}

impl EventCounts {
    pub fn from_logs(logs: &[LogEntry]) -> Self {
        let mut counts = Self::default();
        for entry in logs {
            let m = entry.message.as_str();
            if m.ends_with("is eliminated by the werewolf attack.") {
                counts.werewolf_kills += 1;
            } else if m.ends_with("is eliminated by the witch's poison.") {
                counts.poisonings += 1;
            } else if m.ends_with("is eliminated by the day vote.") {
                counts.banishments += 1;
            } else if m.contains("uses the healing potion on") {
                counts.heals += 1;
            } else if m.starts_with("The vote is inconclusive") {
                counts.inconclusive_votes += 1;
            } else if m.contains("fires a final shot at") {
                counts.hunter_shots += 1;
            } else if m.starts_with("The night passes peacefully") {
                counts.peaceful_nights += 1;
            }
        }
        counts
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayerMetrics {
    pub seat: String,
    pub name: String,
    pub role: RoleName,
    pub alignment: Alignment,
    pub survived: bool,
    pub won: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eliminated_on_day: Option<u32>,
}

/// Build metrics from a finished game.
pub fn build_game_metrics(
    game_id: u32,
    seed: u64,
    config: RunConfig,
    result: &GameResult,
    duration_ms: f64,
    level: MetricsLevel,
) -> GameMetrics {
    let timestamp = time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| String::from("unknown"));

    let survivors = |side: Alignment| {
        result
            .players
            .iter()
            .filter(|p| p.is_alive() && p.alignment() == side)
            .count()
    };

    let (player_metrics, logs) = match level {
        MetricsLevel::Basic => (Vec::new(), Vec::new()),
        MetricsLevel::Detailed => (build_player_metrics(result), result.logs.clone()),
    };

    GameMetrics {
        game_id,
        seed,
        timestamp,
        config,
        result: GameResultMetrics {
            winner: result.winner,
            days: result.days,
            steps: result.steps,
            good_survivors: survivors(Alignment::Good),
            werewolf_survivors: survivors(Alignment::Werewolf),
            duration_ms,
        },
        events: EventCounts::from_logs(&result.logs),
        player_metrics,
        logs,
    }
}

fn build_player_metrics(result: &GameResult) -> Vec<PlayerMetrics> {
    result
        .players
        .iter()
        .map(|p| PlayerMetrics {
            seat: p.id.clone(),
            name: p.display_name.clone(),
            role: p.role.name,
            alignment: p.alignment(),
            survived: p.is_alive(),
            won: p.alignment() == result.winner,
            eliminated_on_day: result.deaths.get(&p.id).copied(),
        })
        .collect()
}

/// CSV summary row for quick analysis.
#[derive(Debug, Serialize)]
pub struct CsvSummaryRow {
    pub game_id: u32,
    pub seed: u64,
    pub players: usize,
    pub winner: Alignment,
    pub days: u32,
    pub steps: usize,
    pub good_survivors: usize,
    pub werewolf_survivors: usize,
    pub banishments: u32,
    pub werewolf_kills: u32,
    pub duration_ms: f64,
}

impl From<&GameMetrics> for CsvSummaryRow {
    fn from(metrics: &GameMetrics) -> Self {
        CsvSummaryRow {
            game_id: metrics.game_id,
            seed: metrics.seed,
            players: metrics.config.players,
            winner: metrics.result.winner,
            days: metrics.result.days,
            steps: metrics.result.steps,
            good_survivors: metrics.result.good_survivors,
            werewolf_survivors: metrics.result.werewolf_survivors,
            banishments: metrics.events.banishments,
            werewolf_kills: metrics.events.werewolf_kills,
            duration_ms: metrics.result.duration_ms,
        }
    }
}
