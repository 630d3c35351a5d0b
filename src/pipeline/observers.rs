//! Game observers used by the training pipeline and the terminal front end

use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};

use crate::{
    Result,
    ports::GameObserver,
    tictactoe::{Board, Winner},
};

/// Running count of finished games by winner
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeTally {
    pub human_wins: usize,
    pub computer_wins: usize,
    pub draws: usize,
}

impl OutcomeTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, winner: Winner) {
        match winner {
            Winner::Human => self.human_wins += 1,
            Winner::Computer => self.computer_wins += 1,
            Winner::Draw => self.draws += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.human_wins + self.computer_wins + self.draws
    }

    /// Short `W:.. D:.. L:..` summary from the computer's perspective
    pub fn summary(&self) -> String {
        format!(
            "W:{} D:{} L:{}",
            self.computer_wins, self.draws, self.human_wins
        )
    }
}

impl GameObserver for OutcomeTally {
    fn on_game_over(&mut self, winner: Winner, _board: &Board) {
        self.record(winner);
    }
}

/// Progress bar observer - Shows training progress
pub struct ProgressObserver {
    progress_bar: ProgressBar,
    tally: OutcomeTally,
}

impl ProgressObserver {
    /// Create a progress bar over `total_games` games.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::ProgressBarTemplate`] if the bar style cannot be built.
    pub fn new(total_games: usize) -> Result<Self> {
        let pb = ProgressBar::new(total_games as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games ({msg})")
                .map_err(|e| crate::Error::ProgressBarTemplate {
                    message: e.to_string(),
                })?
                .progress_chars("=>-"),
        );
        Ok(Self {
            progress_bar: pb,
            tally: OutcomeTally::new(),
        })
    }

    /// Close the bar, leaving the final tally on screen.
    pub fn finish(&self) {
        self.progress_bar.finish_with_message(self.tally.summary());
    }
}

impl GameObserver for ProgressObserver {
    fn on_game_over(&mut self, winner: Winner, _board: &Board) {
        self.tally.record(winner);
        self.progress_bar.inc(1);
        self.progress_bar.set_message(self.tally.summary());
    }
}
