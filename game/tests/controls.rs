//! The game as the engine sees it: input events, elapsed time and shapes.

use game::{create_game, Config, Control, CounterKind, Facing, GearHeart, FRAME_TIME, SPRITE_SIZE};
use interface::game::{Game, Graphics, Key, Shape};
use rstest::rstest;

fn new_game(control: Control,  monsters: usize) -> GearHeart {
    let config = Config {
        control,
        monster_count: monsters,
        player_start: [700.0, 275.0],
        seed: Some(3),
        ..Config::default()
    };
    create_game(config).expect("valid config")
}

fn player_pos(game: &GearHeart) -> [f32; 2] {
    game.session().world().player.pos()
}

/// Monsters are the only rectangles this wide.
fn drawn_monsters(gfx: &Graphics) -> usize {
    let size = game::config::MONSTER_SCALE*SPRITE_SIZE[0];
    gfx.shapes().iter().filter(|s| matches!(s, Shape::Rectangle { area, .. } if (area[2]-size).abs() < 0.5)).count()
}

fn drawn_texts(gfx: &Graphics) -> Vec<String> {
    gfx.shapes().iter().filter_map(|s| match s {
        Shape::Text { text, .. } => Some(text.to_string()),
        _ => None,
    }).collect()
}

#[rstest]
#[case(Key::ArrowUp, [700.0, 280.0])]
#[case(Key::ArrowDown, [700.0, 270.0])]
#[case(Key::ArrowLeft, [695.0, 275.0])]
#[case(Key::ArrowRight, [705.0, 275.0])]
fn arrow_keys_move_one_step_per_frame(#[case] key: Key,  #[case] expected: [f32; 2]) {
    let mut game = new_game(Control::Keyboard, 0);
    game.key_press(key);
    game.update(FRAME_TIME);
    assert_eq!(player_pos(&game), expected);
}

#[test]
fn releasing_stops_only_that_axis() {
    let mut game = new_game(Control::Keyboard, 0);
    game.key_press(Key::ArrowRight);
    game.key_press(Key::ArrowUp);
    game.key_release(Key::ArrowDown);
    let vel = game.session().world().player.agent.vel;
    assert_eq!(vel, [5.0, 0.0]);
    game.key_release(Key::ArrowLeft);
    assert_eq!(game.session().world().player.agent.vel, [0.0, 0.0]);
}

#[test]
fn facing_follows_horizontal_movement() {
    let mut game = new_game(Control::Keyboard, 0);
    assert_eq!(game.session().world().player.facing, Facing::Right);
    game.key_press(Key::ArrowLeft);
    game.update(FRAME_TIME);
    game.key_release(Key::ArrowLeft);
    game.update(FRAME_TIME);
    assert_eq!(game.session().world().player.facing, Facing::Left);
}

#[test]
fn pointer_places_player_and_ignores_keys() {
    let mut game = new_game(Control::Pointer, 0);
    // screen coordinates grow downwards
    game.mouse_move([300.0, 100.0]);
    assert_eq!(player_pos(&game), [300.0, 450.0]);
    assert_eq!(game.session().world().player.facing, Facing::Left);

    game.key_press(Key::ArrowRight);
    game.update(FRAME_TIME);
    assert_eq!(player_pos(&game), [300.0, 450.0]);

    game.mouse_move([-50.0, 5000.0]);
    assert_eq!(player_pos(&game), [16.0, 16.0]);
}

#[test]
fn keyboard_ignores_pointer() {
    let mut game = new_game(Control::Keyboard, 0);
    game.mouse_move([10.0, 10.0]);
    assert_eq!(player_pos(&game), [700.0, 275.0]);
}

#[rstest]
#[case(0.0, 0)]
#[case(FRAME_TIME*0.5, 0)]
#[case(FRAME_TIME, 1)]
#[case(FRAME_TIME*2.5, 2)]
#[case(10.0, 5)]
#[case(f32::NAN, 0)]
#[case(-1.0, 0)]
fn elapsed_time_becomes_frames(#[case] dt: f32,  #[case] frames: u64) {
    let mut game = new_game(Control::Keyboard, 0);
    game.update(dt);
    assert_eq!(game.session().frames(), frames);
}

#[test]
fn leftover_time_carries_over() {
    let mut game = new_game(Control::Keyboard, 0);
    game.update(FRAME_TIME*0.75);
    game.update(FRAME_TIME*0.75);
    assert_eq!(game.session().frames(), 1);
}

#[test]
fn fullscreen_toggles() {
    let mut game = new_game(Control::Keyboard, 0);
    assert!(!game.fullscreen());
    game.key_press(Key::Escape);
    assert!(!game.fullscreen());
    game.key_press(Key::F);
    assert!(game.fullscreen());
    game.key_press(Key::Escape);
    assert!(!game.fullscreen());
    let game = game.with_fullscreen(true);
    assert!(game.fullscreen());
}

#[test]
fn holding_f_toggles_once() {
    let mut game = new_game(Control::Keyboard, 0);
    // repeated presses without a release
    for _ in 0..5 {
        game.key_press(Key::F);
    }
    assert!(game.fullscreen());
    game.key_release(Key::F);
    game.key_press(Key::F);
    assert!(!game.fullscreen());
}

#[test]
fn draws_every_remaining_monster_and_the_counter() {
    let mut game = new_game(Control::Keyboard, 12);
    let mut gfx = Graphics::default();
    game.render(&mut gfx);
    assert_eq!(drawn_monsters(&gfx), 12);
    assert_eq!(drawn_texts(&gfx), vec!["Score: 0".to_owned()]);
}

#[test]
fn caught_monster_is_no_longer_drawn() {
    let mut game = new_game(Control::Pointer, 1);
    let [x, y] = game.session().world().pursuers()[0].agent.pos;
    // onto the monster, in screen coordinates
    game.mouse_move([x, game.session().config().arena[1]-y]);
    game.update(FRAME_TIME);
    assert!(game.session().world().pursuers().is_empty());

    for _ in 0..2 {
        let mut gfx = Graphics::default();
        game.render(&mut gfx);
        assert_eq!(drawn_monsters(&gfx), 0);
        assert_eq!(drawn_texts(&gfx), vec!["Score: -1".to_owned()]);
        game.update(FRAME_TIME);
    }
}

#[test]
fn health_variant_shows_health() {
    let config = Config { counter: CounterKind::Health, monster_count: 0, ..Config::default() };
    let mut game = create_game(config).expect("valid config");
    let mut gfx = Graphics::default();
    game.render(&mut gfx);
    assert!(gfx.shapes().iter().any(|s| matches!(s, Shape::Text { text, .. } if text == "Health: 20")));
}

#[test]
fn invalid_config_is_rejected() {
    let config = Config { movement_speed: -1.0, ..Config::default() };
    assert!(create_game(config).is_err());
}
