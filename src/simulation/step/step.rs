use super::entities::{run_hook, EntityId};
use super::Game;

/// Entity half of the simulate phase. Each id in `snapshot` runs its step
/// hook and then integrates, one entity at a time in list order.
///
/// Ids destroyed earlier in the pass still step: their records live until
/// `end_step`. Entities created during the pass are not in the snapshot and
/// first step next tick.
pub(super) fn step_entities(game: &mut Game, snapshot: &[EntityId]) {
    for &id in snapshot {
        run_hook(game, id, |behavior, ctx| {
            behavior.on_step(ctx);
            ctx.integrate();
        });
    }
}

/// Close the simulate phase: swap input buffers exactly once, drop records of
/// destroyed entities and advance the frame counter. Returns the number of
/// records dropped.
pub(super) fn end_step(game: &mut Game) -> usize {
    game.input.end_frame();
    let purged = game.entities.purge_retired();
    game.frame += 1;
    purged
}
