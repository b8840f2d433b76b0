use crate::errors::HexChessResult;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::{make_move, unmake_move};
use crate::move_generation::legal_move_checks::is_king_exposed;
use crate::move_generation::move_generator::{MoveGenerator, MoveStack};
use crate::moves::move_descriptions::Move;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub checks: usize,
    pub checkmates: usize,
}

/// Count leaf nodes `depth` plies below `game_state`, with capture, check
/// and mate statistics for the final ply. Uses a single stack and
/// make/unmake, so the position is unchanged on success.
pub fn perft<G: MoveGenerator>(
    generator: &G,
    game_state: &mut GameState,
    depth: u8,
) -> HexChessResult<PerftCounts> {
    let mut counts = PerftCounts::default();
    if depth == 0 {
        counts.nodes = 1;
        return Ok(counts);
    }

    let mut stack = MoveStack::with_capacity(64 * depth as usize);
    perft_recurse(generator, game_state, &mut stack, depth, &mut counts)?;
    Ok(counts)
}

/// Node count below each root move.
pub fn perft_divide<G: MoveGenerator>(
    generator: &G,
    game_state: &mut GameState,
    depth: u8,
) -> HexChessResult<Vec<(Move, usize)>> {
    let root_moves = generator.generate_moves(game_state)?;
    let mut divided = Vec::with_capacity(root_moves.len());

    for mv in root_moves {
        make_move(game_state, mv);
        let below = perft(generator, game_state, depth.saturating_sub(1));
        unmake_move(game_state)?;
        divided.push((mv, below?.nodes));
    }

    Ok(divided)
}

fn perft_recurse<G: MoveGenerator>(
    generator: &G,
    game_state: &mut GameState,
    stack: &mut MoveStack,
    depth: u8,
    counts: &mut PerftCounts,
) -> HexChessResult<()> {
    let previous_bottom = stack.push_frame();
    generator.generate_into(game_state, stack)?;

    for offset in 0..stack.frame_len() {
        let mv = stack.frame()[offset];
        let made = make_move(game_state, mv);
        if depth == 1 {
            tally_leaf(generator, game_state, stack, made, counts)?;
        } else {
            perft_recurse(generator, game_state, stack, depth - 1, counts)?;
        }
        unmake_move(game_state)?;
    }

    stack.pop_frame(previous_bottom);
    Ok(())
}

fn tally_leaf<G: MoveGenerator>(
    generator: &G,
    game_state: &mut GameState,
    stack: &mut MoveStack,
    made: Move,
    counts: &mut PerftCounts,
) -> HexChessResult<()> {
    counts.nodes += 1;
    if made.is_capture() {
        counts.captures += 1;
    }

    if is_king_exposed(game_state, game_state.side_to_move) {
        counts.checks += 1;

        let previous_bottom = stack.push_frame();
        generator.generate_into(game_state, stack)?;
        if stack.frame_len() == 0 {
            counts.checkmates += 1;
        }
        stack.pop_frame(previous_bottom);
    }

    Ok(())
}
