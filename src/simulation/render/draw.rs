use super::entities::DrawCtx;
use super::DrawList;
use super::Game;

/// Entity half of the draw phase: every live entity's draw hook, in list
/// order, at its current position.
///
/// Hooks only get `&Game`, so the live list cannot change mid-pass and
/// iterating it directly is equivalent to iterating a snapshot.
pub(super) fn draw_entities(game: &Game, out: &mut DrawList) {
    for id in game.entities().iter() {
        let Some(record) = game.entities().record(id) else {
            continue;
        };
        // Hook of this entity is running (draw issued from inside a step).
        let Some(behavior) = record.behavior() else {
            continue;
        };
        behavior.on_draw(&DrawCtx::new(game, id, &record.body), out);
    }
}
