use tinsel_engine::demo::{self, Gift, JumpGame, Player, DEFAULT_LEVEL};
use tinsel_engine::simulation::{DrawCommand, FrameOrchestrator};

fn player_body(frames: &FrameOrchestrator<JumpGame>) -> (f32, f32) {
    let entities = frames.game().entities();
    let id = entities.of_type::<Player>().next().unwrap();
    let body = entities.body(id).unwrap();
    (body.x, body.y)
}

#[test]
fn default_level_spawns_its_cast() {
    let mut frames = demo::build(DEFAULT_LEVEL).unwrap();
    assert_eq!(frames.game().room_size(), (672, 224));

    let drawn = frames.tick_to_list();
    let entities = frames.game().entities();
    assert_eq!(entities.of_type::<Player>().count(), 1);
    assert_eq!(entities.of_type::<Gift>().count(), 3);

    // Background, 57 wall tiles, cursor, then the cast.
    assert_eq!(drawn.len(), 1 + 57 + 1 + 4);
    assert!(matches!(drawn.commands()[0], DrawCommand::FillRect { .. }));
    assert!(drawn.commands()[59..]
        .iter()
        .all(|command| matches!(command, DrawCommand::Sprite { .. })));
}

#[test]
fn player_rests_on_the_floor() {
    let mut frames = demo::build(DEFAULT_LEVEL).unwrap();
    for _ in 0..30 {
        frames.tick_to_list();
    }
    assert_eq!(player_body(&frames), (48.0, 168.0));
}

#[test]
fn player_walks_and_runs() {
    let mut frames = demo::build(DEFAULT_LEVEL).unwrap();
    frames.game_mut().input_mut().set_key_down("ArrowRight", true);
    for _ in 0..5 {
        frames.tick_to_list();
    }
    assert_eq!(player_body(&frames), (68.0, 168.0));

    frames.game_mut().input_mut().set_key_down("ControlLeft", true);
    frames.tick_to_list();
    assert_eq!(player_body(&frames).0, 74.0);

    frames.game_mut().input_mut().release_all();
    frames.game_mut().input_mut().set_key_down("ArrowLeft", true);
    frames.tick_to_list();
    assert_eq!(player_body(&frames).0, 70.0);
    let entities = frames.game().entities();
    let id = entities.of_type::<Player>().next().unwrap();
    assert_eq!(entities.behavior::<Player>(id).unwrap().facing(), -1.0);
}

#[test]
fn jump_leaves_the_ground_and_comes_back() {
    let mut frames = demo::build(DEFAULT_LEVEL).unwrap();
    frames.tick_to_list();

    frames.game_mut().input_mut().set_key_down("Space", true);
    frames.tick_to_list();
    assert_eq!(player_body(&frames).1, 156.0);

    frames.game_mut().input_mut().set_key_down("Space", false);
    for _ in 0..60 {
        frames.tick_to_list();
    }
    // Contact marching lands within one unit of the floor.
    let (x, y) = player_body(&frames);
    assert_eq!(x, 48.0);
    assert!(y > 167.0 && y <= 168.0, "landed at {y}");
}

#[test]
fn controller_drives_the_player() {
    let mut frames = demo::build(DEFAULT_LEVEL).unwrap();
    let pad = tinsel_engine::input::ControllerId(7);
    let input = frames.game_mut().input_mut();
    assert!(input.register_controller(pad));
    assert!(input.set_controller_input_down(pad, "RIGHT", true));

    frames.tick_to_list();
    assert_eq!(player_body(&frames).0, 52.0);
}

#[test]
fn touching_a_gift_collects_it() {
    let layout = "\
#####
#PG #
#####
";
    let mut frames = demo::build(layout).unwrap();
    frames.game_mut().input_mut().set_key_down("ArrowRight", true);

    // First tick steps into the gift, the second picks it up.
    frames.tick_to_list();
    assert_eq!(frames.game().entities().count(), 2);
    frames.tick_to_list();

    let stats = frames.stats();
    assert_eq!(stats.entity_count(), 1);
    assert_eq!(stats.purged(), 1);
    let entities = frames.game().entities();
    let id = entities.of_type::<Player>().next().unwrap();
    assert_eq!(entities.behavior::<Player>(id).unwrap().collected(), 1);
}

#[test]
fn bad_levels_are_rejected() {
    assert!(demo::build("").is_err());
    assert!(demo::build("\n\n").is_err());
}
