//! Round and per-player progress display for simulated games

use crate::game::hand::Hand;
use crate::game::runner::{RoundReport, TurnRecord};
use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::LazyLock;

static ROUND_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Rounds: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static PLAYER_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{prefix:>10} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

/// Coordinates a round bar plus one status line per player
pub struct ProgressManager {
    multi_progress: MultiProgress,
    round_bar: Option<ProgressBar>,
    player_bars: Vec<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a manager drawing to the terminal
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            round_bar: None,
            player_bars: Vec::new(),
        }
    }

    /// Create a manager that never draws
    pub fn hidden() -> Self {
        Self {
            multi_progress: MultiProgress::with_draw_target(ProgressDrawTarget::hidden()),
            round_bar: None,
            player_bars: Vec::new(),
        }
    }

    /// Set up the round bar and one line per player
    pub fn initialize(&mut self, rounds: usize, players: usize) {
        let round_bar = ProgressBar::new(rounds as u64);
        round_bar.set_style(ROUND_STYLE.clone());
        self.round_bar = Some(self.multi_progress.add(round_bar));

        self.player_bars.clear();
        for player in 0..players {
            let bar = ProgressBar::new(0);
            bar.set_style(PLAYER_STYLE.clone());
            bar.set_prefix(format!("player {}", player + 1));
            self.player_bars.push(self.multi_progress.add(bar));
        }
    }

    /// Advance the round bar and refresh every player's line
    pub fn complete_round(&self, report: &RoundReport, hands: &[Hand]) {
        if let Some(ref round_bar) = self.round_bar {
            round_bar.inc(1);
            round_bar.set_message(format!(
                "{} groups, {} in supply",
                report.groups_on_board, report.supply_remaining
            ));
        }

        for (player, bar) in self.player_bars.iter().enumerate() {
            let last_turn = report.turns.get(player).map_or_else(String::new, describe);
            let held = hands.get(player).map_or(0, Hand::len);
            bar.set_message(format!("{held:>3} held  {last_turn}"));
        }
    }

    /// Number of player lines currently shown
    pub fn player_lines(&self) -> usize {
        self.player_bars.len()
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref round_bar) = self.round_bar {
            round_bar.finish_with_message("game over");
        }
        let _ = self.multi_progress.clear();
    }
}

fn describe(record: &TurnRecord) -> String {
    match record {
        TurnRecord::Played(tiles) => format!("played {} tiles", tiles.len()),
        TurnRecord::Drew(tile) => format!("drew {tile}"),
        TurnRecord::SupplyExhausted => "supply empty".to_string(),
    }
}
