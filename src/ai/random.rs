use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use super::agent::Agent;
use crate::game::{GameState, Move};

/// An agent that selects uniformly at random from legal moves.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        RandomAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn select_move(&mut self, state: &GameState) -> Option<Move> {
        let moves = state.legal_moves();
        if moves.is_empty() {
            return None;
        }
        let idx = self.rng.random_range(0..moves.len());
        Some(moves[idx])
    }

    fn name(&self) -> &str {
        "Random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Board, Player};

    #[test]
    fn test_random_agent_selects_legal_move() {
        let mut agent = RandomAgent::new();
        let mut state = GameState::initial(Player::Human);
        state.apply_move_mut(Move::new(0, 0)).unwrap();
        let legal = state.legal_moves();

        for _ in 0..100 {
            let mv = agent.select_move(&state).unwrap();
            assert!(legal.contains(&mv), "Move {mv} is not legal");
        }
    }

    #[test]
    fn test_random_agent_plays_full_game() {
        let mut agent1 = RandomAgent::new();
        let mut agent2 = RandomAgent::new();
        let mut state = GameState::from_board(Board::with_rules(4, 3), Player::Human);

        let mut turn = 0;
        while !state.is_terminal() {
            let mv = if turn % 2 == 0 {
                agent1.select_move(&state)
            } else {
                agent2.select_move(&state)
            }
            .unwrap();
            state.apply_move_mut(mv).unwrap();
            turn += 1;
        }

        assert!(state.outcome().is_some());
        assert_eq!(agent1.select_move(&state), None);
    }

    #[test]
    fn test_random_agent_name() {
        let agent = RandomAgent::new();
        assert_eq!(agent.name(), "Random");
    }
}
