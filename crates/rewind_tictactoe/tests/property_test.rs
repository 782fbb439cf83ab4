//! Property tests for the win evaluator and the history store.

use proptest::prelude::*;
use rewind_tictactoe::invariants::{HistoryInvariants, InvariantSet};
use rewind_tictactoe::rules::LINES;
use rewind_tictactoe::{
    Board, Command, GameHistory, PlayOutcome, Player, Position, Square, check_winner,
};

fn square_strategy() -> impl Strategy<Value = Square> {
    prop_oneof![
        Just(Square::Empty),
        Just(Square::Occupied(Player::X)),
        Just(Square::Occupied(Player::O)),
    ]
}

fn board_strategy() -> impl Strategy<Value = Board> {
    proptest::array::uniform9(square_strategy()).prop_map(Board::from_squares)
}

fn command_strategy() -> impl Strategy<Value = Command> {
    prop_oneof![
        3 => (0usize..9).prop_map(|i| Command::Play(Position::ALL[i])),
        1 => (0usize..10).prop_map(Command::Jump),
    ]
}

proptest! {
    #[test]
    fn winner_owns_a_full_line(board in board_strategy()) {
        let owners: Vec<Player> = LINES
            .iter()
            .filter_map(|line| {
                let marks = line.map(|pos| board.get(pos).player());
                match marks {
                    [Some(a), Some(b), Some(c)] if a == b && b == c => Some(a),
                    _ => None,
                }
            })
            .collect();

        prop_assert_eq!(check_winner(&board), owners.first().copied());
    }

    #[test]
    fn commands_preserve_invariants(commands in prop::collection::vec(command_strategy(), 0..40)) {
        let mut game = GameHistory::new();

        for command in commands {
            let before = game.clone();
            match (command, game.apply(command)) {
                (Command::Play(pos), Ok(rewind_tictactoe::Applied::Play(outcome))) => {
                    let prev = *before.current_step();
                    match outcome {
                        PlayOutcome::Placed { index, .. } => {
                            prop_assert_eq!(index, before.active_index() + 1);
                            prop_assert_eq!(game.len(), before.active_index() + 2);
                            prop_assert_eq!(
                                game.current_step().board().get(pos),
                                Square::Occupied(prev.next())
                            );
                            prop_assert_eq!(game.current_step().next(), prev.next().opponent());
                        }
                        PlayOutcome::Ignored(_) => {
                            prop_assert!(prev.winner().is_some() || !prev.board().is_empty(pos));
                            prop_assert_eq!(&game, &before);
                        }
                    }
                }
                (Command::Jump(k), result) => {
                    prop_assert_eq!(result.is_ok(), k < before.len());
                    prop_assert_eq!(game.steps(), before.steps());
                    if result.is_err() {
                        prop_assert_eq!(game.active_index(), before.active_index());
                    } else {
                        prop_assert_eq!(game.active_index(), k);
                    }
                }
                (command, result) => prop_assert!(false, "{command:?} gave {result:?}"),
            }

            prop_assert!(HistoryInvariants::check_all(&game).is_ok());
        }
    }
}
