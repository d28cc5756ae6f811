//! Exhaustive reference search.
//!
//! Walks every line of play with P1 maximizing and P2 minimizing the final
//! P1-minus-P2 differential. Exponential in the sequence length, so only
//! meant for cross-checking [`Advantage`] on small inputs.
use super::*;
use lab3_core::*;

/// Optimal differential for whoever is to move at `game`.
///
/// Only takings from `game` onward count, matching [`Advantage`].
pub fn minimax(game: &RunGame) -> Score {
    match game.turn() {
        Turn::Terminal => 0,
        turn => turn.direction() * (search(game) - game.banked()),
    }
}

/// Final P1-minus-P2 differential under optimal play below `game`.
fn search(game: &RunGame) -> Score {
    let children = game
        .choices()
        .into_iter()
        .map(|run| search(&game.apply(run)));
    match game.turn() {
        Turn::Terminal => game.payoff(Turn::P1),
        Turn::P1 => children.max().unwrap_or_default(),
        Turn::P2 => children.min().unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimax_of(values: Vec<Value>, m: Length) -> Score {
        let sequence = Sequence::from(values);
        minimax(&RunGame::root(&sequence, m))
    }

    fn dp_of(values: Vec<Value>, m: Length) -> Score {
        Advantage::solve(&Prefix::from(&Sequence::from(values)), m).root()
    }

    /// Every sequence over `alphabet` of length exactly `n`.
    fn sequences(alphabet: &[Value], n: usize) -> Vec<Vec<Value>> {
        (0..n).fold(vec![vec![]], |acc, _| {
            acc.into_iter()
                .flat_map(|prefix| {
                    alphabet.iter().map(move |&v| {
                        let mut next = prefix.clone();
                        next.push(v);
                        next
                    })
                })
                .collect()
        })
    }

    #[test]
    fn known_positions() {
        assert!(minimax_of(vec![], 1) == 0);
        assert!(minimax_of(vec![5], 1) == 5);
        assert!(minimax_of(vec![3, 3], 1) == 0);
        assert!(minimax_of(vec![1, 2], 2) == 3);
    }

    #[test]
    fn single_picks_agree_with_dp() {
        for n in 0..=6 {
            for values in sequences(&[-3, 0, 2, 5], n) {
                assert!(
                    minimax_of(values.clone(), 1) == dp_of(values.clone(), 1),
                    "mismatch on {:?}",
                    values
                );
            }
        }
    }

    #[test]
    fn bounded_runs_agree_with_dp() {
        for m in 1..=4 {
            for n in 0..=5 {
                for values in sequences(&[-2, 1, 4], n) {
                    assert!(
                        minimax_of(values.clone(), m) == dp_of(values.clone(), m),
                        "mismatch on {:?} with m = {}",
                        values,
                        m
                    );
                }
            }
        }
    }

    #[test]
    fn random_positions_agree_with_dp() {
        for _ in 0..256 {
            let sequence = Sequence::random();
            let m = rand::random_range(1..=ARBITRARY_MAX_RUN);
            let brute = minimax(&RunGame::root(&sequence, m));
            let table = Advantage::solve(&Prefix::from(&sequence), m).root();
            assert!(brute == table, "mismatch on {} with m = {}", sequence, m);
        }
    }

    #[test]
    fn mover_perspective_mid_game() {
        let sequence = Sequence::from(vec![1, 9, 2]);
        let game = RunGame::root(&sequence, 1).apply(Run::from(1));
        // P2 to move over [9, 2]: takes 9, P1 takes 2
        assert!(minimax(&game) == 7);
    }
}
