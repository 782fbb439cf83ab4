//! Single mark invariant: each step adds exactly one mark to its parent.

use super::Invariant;
use crate::{GameHistory, Square, Step};

/// Invariant: every step is its parent plus one mark.
///
/// The mark belongs to the parent's next player, lands on a cell that
/// was empty, and the parent had no winner.
pub struct SingleMarkInvariant;

fn follows(prev: &Step, cur: &Step) -> bool {
    if prev.winner().is_some() {
        return false;
    }

    let mut changed = prev
        .board()
        .squares()
        .iter()
        .zip(cur.board().squares())
        .filter(|(before, after)| before != after);

    matches!(
        (changed.next(), changed.next()),
        (Some((Square::Empty, Square::Occupied(mark))), None) if *mark == prev.next()
    )
}

impl Invariant<GameHistory> for SingleMarkInvariant {
    fn holds(game: &GameHistory) -> bool {
        game.steps().windows(2).all(|pair| follows(&pair[0], &pair[1]))
    }

    fn description() -> &'static str {
        "Each step adds one mark for the previous step's next player"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Player, Position};

    #[test]
    fn test_played_game_holds() {
        let mut game = GameHistory::new();
        for pos in [Position::Center, Position::TopLeft, Position::BottomRight] {
            game.play_cell(pos);
        }
        assert!(SingleMarkInvariant::holds(&game));
    }

    #[test]
    fn test_repeated_step_violates() {
        let step = Step::initial().advance(Position::Center).unwrap();
        let game = GameHistory::from_parts(vec![Step::initial(), step, step], 2);
        assert!(!SingleMarkInvariant::holds(&game));
    }

    #[test]
    fn test_step_after_win_violates() {
        let mut step = Step::initial();
        let mut steps = vec![step];
        for pos in [0, 3, 1, 4, 2] {
            step = step.advance(Position::from_index(pos).unwrap()).unwrap();
            steps.push(step);
        }
        // Build a follow-up by hand since advance refuses won steps.
        let mut squares = *step.board().squares();
        squares[8] = Square::Occupied(Player::O);
        let forced: Step = serde_json::from_value(serde_json::json!({
            "board": Board::from_squares(squares),
            "next": Player::X,
            "winner": Player::X,
        }))
        .unwrap();
        steps.push(forced);

        let game = GameHistory::from_parts(steps, 6);
        assert!(!SingleMarkInvariant::holds(&game));
    }
}
