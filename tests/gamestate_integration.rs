//! Game state transitions and scene hooks.

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use bevy_ecs::system::ScheduleSystem;

use wordstorm::components::button::MaskedButton;
use wordstorm::components::label::{Blinker, Label, LabelText};
use wordstorm::components::persistent::Persistent;
use wordstorm::components::star::Star;
use wordstorm::components::turret::Turret;
use wordstorm::components::word::Word;
use wordstorm::events::gamestate::observe_gamestate_change_event;
use wordstorm::game;
use wordstorm::resources::dictionary::Dictionary;
use wordstorm::resources::gameconfig::GameConfig;
use wordstorm::resources::gamestate::{GameState, GameStates, NextGameState, NextGameStates};
use wordstorm::resources::hud::TitleMenu;
use wordstorm::resources::rng::GameRng;
use wordstorm::resources::screensize::ScreenSize;
use wordstorm::resources::session::{
    Difficulty, GameOverReport, SelectedDifficulty, Session,
};
use wordstorm::resources::systemsstore::SystemsStore;
use wordstorm::systems::gamestate::check_pending_state;

#[derive(Resource, Default)]
struct HookLog(Vec<&'static str>);

fn log_enter_title(mut log: ResMut<HookLog>) {
    log.0.push("enter_title");
}

fn log_enter_play(mut log: ResMut<HookLog>) {
    log.0.push("enter_play");
}

fn log_clean_scene(mut log: ResMut<HookLog>) {
    log.0.push("clean_scene");
}

fn make_world() -> World {
    let mut world = World::new();
    world.insert_resource(GameState::new());
    world.insert_resource(NextGameState::new());
    world.insert_resource(HookLog::default());
    world.spawn((Observer::new(observe_gamestate_change_event), Persistent));
    world.flush();
    world
}

fn request(world: &mut World, state: GameStates) {
    world.resource_mut::<NextGameState>().set(state);
    let mut schedule = Schedule::default();
    schedule.add_systems(check_pending_state);
    schedule.run(world);
    world.flush();
}

fn run_hook<M>(world: &mut World, hook: impl IntoScheduleConfigs<ScheduleSystem, M>) {
    let mut schedule = Schedule::default();
    schedule.add_systems(hook);
    schedule.run(world);
}

#[test]
fn test_transition_runs_exit_then_enter_hooks() {
    let mut world = make_world();
    let mut store = SystemsStore::new();
    store.register(&mut world, "enter_title", log_enter_title);
    store.register(&mut world, "enter_play", log_enter_play);
    store.register(&mut world, "clean_scene", log_clean_scene);
    world.insert_resource(store);

    request(&mut world, GameStates::Title);
    assert_eq!(world.resource::<GameState>().get(), &GameStates::Title);
    assert_eq!(world.resource::<HookLog>().0, vec!["enter_title"]);
    assert_eq!(world.resource::<NextGameState>().get(), &NextGameStates::Unchanged);

    request(&mut world, GameStates::Playing);
    assert_eq!(world.resource::<GameState>().get(), &GameStates::Playing);
    assert_eq!(
        world.resource::<HookLog>().0,
        vec!["enter_title", "clean_scene", "enter_play"]
    );
}

#[test]
fn test_missing_hook_still_changes_state() {
    let mut world = make_world();
    world.insert_resource(SystemsStore::new());

    request(&mut world, GameStates::GameOver);
    assert_eq!(world.resource::<GameState>().get(), &GameStates::GameOver);
    assert!(world.resource::<HookLog>().0.is_empty());
}

#[test]
fn test_registered_hooks_are_persistent() {
    let mut world = make_world();
    let mut store = SystemsStore::new();
    let id = store.register(&mut world, "clean_scene", game::clean_scene);
    world.insert_resource(store);

    world.spawn(Star::new(1.0, 1.0, 0.0, 500.0, 0.5));
    world.spawn(Word::new("cat", 0.02, 0, 0));
    world.run_system(id).expect("clean_scene runs");

    assert!(world.get_entity(id.entity()).is_ok());
    assert_eq!(world.query::<&Star>().iter(&world).count(), 0);
    assert_eq!(world.query::<&Word>().iter(&world).count(), 0);
}

// ==================== SCENE HOOKS ====================

fn make_scene_world() -> World {
    let mut world = World::new();
    world.insert_resource(ScreenSize { w: 1280, h: 720 });
    world.insert_resource(GameConfig::new());
    world.insert_resource(GameRng::with_seed(3));
    world.insert_resource(NextGameState::new());
    world.insert_resource(TitleMenu::default());
    world
}

#[test]
fn test_setup_goes_to_title_without_selection() {
    let mut world = make_scene_world();
    run_hook(&mut world, game::setup);

    assert_eq!(
        world.resource::<NextGameState>().get(),
        &NextGameStates::Pending(GameStates::Title)
    );
    assert_eq!(world.resource::<SelectedDifficulty>().0, Difficulty::Easy);
}

#[test]
fn test_setup_skips_title_with_selection() {
    let mut world = make_scene_world();
    world.insert_resource(SelectedDifficulty(Difficulty::Hard));
    run_hook(&mut world, game::setup);

    assert_eq!(
        world.resource::<NextGameState>().get(),
        &NextGameStates::Pending(GameStates::Playing)
    );
}

#[test]
fn test_enter_title_spawns_a_button_per_difficulty() {
    let mut world = make_scene_world();
    run_hook(&mut world, game::enter_title);

    let mut difficulties: Vec<(f32, Difficulty)> = world
        .query::<&MaskedButton>()
        .iter(&world)
        .map(|b| (b.center.y, b.difficulty))
        .collect();
    difficulties.sort_by(|a, b| a.0.total_cmp(&b.0));
    assert_eq!(
        difficulties,
        vec![
            (90.0, Difficulty::Easy),
            (270.0, Difficulty::Normal),
            (450.0, Difficulty::Hard),
            (630.0, Difficulty::Insane),
        ]
    );
    assert_eq!(world.query::<&Star>().iter(&world).count(), 100);
}

#[test]
fn test_enter_play_starts_a_round() {
    let mut world = make_scene_world();
    world.insert_resource(SelectedDifficulty(Difficulty::Normal));
    world.resource_mut::<GameConfig>().dictionary_path = "./does-not-exist.json".into();
    run_hook(&mut world, game::enter_play);

    let session = world.resource::<Session>();
    assert_eq!(session.difficulty, Difficulty::Normal);
    assert!(session.is_in_progress());
    assert_eq!(session.next_serial, 1);
    let dictionary = world.resource::<Dictionary>();
    assert!(!dictionary.is_empty());
    assert!(!dictionary.contains("astronomer")); // too long for Normal
    assert_eq!(world.query::<&Turret>().iter(&world).count(), 1);
    assert_eq!(world.query::<&Word>().iter(&world).count(), 1);
}

#[test]
fn test_enter_game_over_consumes_report_once() {
    let mut world = make_scene_world();
    world.insert_resource(GameOverReport {
        game_time: 120_000,
        num_words: 10,
        num_chars: 57,
        difficulty: Difficulty::Hard,
        stars: vec![Star::new(5.0, 5.0, 0.0, 300.0, 0.2); 3],
    });

    run_hook(&mut world, game::enter_game_over);
    assert!(!world.contains_resource::<GameOverReport>());
    assert_eq!(world.query::<&Star>().iter(&world).count(), 3);
    assert_eq!(
        world
            .query_filtered::<&Label, With<Blinker>>()
            .iter(&world)
            .count(),
        2
    );
    assert!(!world.resource::<NextGameState>().is_pending());

    // 57 chars in two minutes is 5.7 words per minute, shown rounded down.
    let texts: Vec<LabelText> = world
        .query::<&Label>()
        .iter(&world)
        .map(|label| label.text.clone())
        .collect();
    assert!(texts.contains(&LabelText::Static("WPM: 5".into())));
    assert!(texts.contains(&LabelText::Static("Time: 02:00".into())));

    run_hook(&mut world, game::enter_game_over);
    assert_eq!(
        world.resource::<NextGameState>().get(),
        &NextGameStates::Pending(GameStates::Title)
    );
}
