use std::time::{Duration, Instant};

use crate::game::Difficulty;

/// Play statistics for one process run: a game clock and the best score
/// reached at each difficulty. Nothing here survives the process.
pub struct SessionStats {
    game_clock: Instant,
    elapsed: Duration,
    best: [u32; 3],
    games_played: u32,
}

impl SessionStats {
    pub fn new() -> Self {
        Self {
            game_clock: Instant::now(),
            elapsed: Duration::ZERO,
            best: [0; 3],
            games_played: 0,
        }
    }

    /// Advance the game clock; call while the game is running
    pub fn update(&mut self) {
        self.elapsed = self.game_clock.elapsed();
    }

    /// Restart the game clock; best scores carry over
    pub fn on_game_start(&mut self) {
        self.game_clock = Instant::now();
        self.elapsed = Duration::ZERO;
    }

    /// Record a finished game against the difficulty it was played at
    pub fn on_game_over(&mut self, difficulty: Difficulty, final_score: u32) {
        self.games_played += 1;
        let best = &mut self.best[Self::slot(difficulty)];
        *best = (*best).max(final_score);
    }

    /// Best score reached at the given difficulty this session
    pub fn best_score(&self, difficulty: Difficulty) -> u32 {
        self.best[Self::slot(difficulty)]
    }

    pub fn games_played(&self) -> u32 {
        self.games_played
    }

    /// Current game time as mm:ss
    pub fn format_time(&self) -> String {
        let secs = self.elapsed.as_secs();
        format!("{:02}:{:02}", secs / 60, secs % 60)
    }

    fn slot(difficulty: Difficulty) -> usize {
        match difficulty {
            Difficulty::Easy => 0,
            Difficulty::Normal => 1,
            Difficulty::Hard => 2,
        }
    }
}

impl Default for SessionStats {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_best_scores_are_per_difficulty() {
        let mut stats = SessionStats::new();

        stats.on_game_over(Difficulty::Normal, 12);
        stats.on_game_over(Difficulty::Hard, 4);

        assert_eq!(stats.best_score(Difficulty::Normal), 12);
        assert_eq!(stats.best_score(Difficulty::Hard), 4);
        assert_eq!(stats.best_score(Difficulty::Easy), 0);
        assert_eq!(stats.games_played(), 2);
    }

    #[test]
    fn test_best_score_never_drops() {
        let mut stats = SessionStats::new();

        stats.on_game_over(Difficulty::Normal, 9);
        stats.on_game_over(Difficulty::Normal, 3);

        assert_eq!(stats.best_score(Difficulty::Normal), 9);
        assert_eq!(stats.games_played(), 2);
    }

    #[test]
    fn test_restart_resets_clock_not_best() {
        let mut stats = SessionStats::new();
        stats.on_game_over(Difficulty::Easy, 7);
        stats.elapsed = Duration::from_secs(90);

        stats.on_game_start();
        stats.update();

        assert_eq!(stats.best_score(Difficulty::Easy), 7);
        assert!(stats.elapsed < Duration::from_secs(1));
    }

    #[test]
    fn test_time_formatting() {
        let mut stats = SessionStats::new();
        assert_eq!(stats.format_time(), "00:00");

        stats.elapsed = Duration::from_secs(125);
        assert_eq!(stats.format_time(), "02:05");

        stats.elapsed = Duration::from_secs(3661);
        assert_eq!(stats.format_time(), "61:01");
    }
}
