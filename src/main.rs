//! Wordstorm main entry point.
//!
//! An arcade typing game written in Rust using:
//! - **raylib** for windowing, drawing and input
//! - **bevy_ecs** for entity-component-system architecture
//!
//! Ships carrying words fly in from the right. Typing aims the turret at the
//! closest match; pressing Enter fires at every ship whose word was typed
//! exactly. A ship that gets past the left edge ends the round.
//!
//! # Project Structure
//!
//! - [`components`] – ECS components (words, turret, stars, tweens, labels, etc.)
//! - [`events`] – Event types and observers (state transitions, solved words)
//! - [`game`] – Scene enter/exit hooks
//! - [`resources`] – ECS resources (session, dictionary, input, config, etc.)
//! - [`systems`] – ECS systems (gameplay, menus, input, rendering)
//!
//! # Main Loop
//!
//! 1. Load `config.ini`, open the window, build the ECS world and resources
//! 2. Register observers and scene hooks, then enter the Setup state
//! 3. Each frame: poll input, apply pending state changes, run the systems of
//!    the active screen, then draw
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --difficulty normal
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

mod components;
mod events;
mod game;
mod resources;
mod systems;

use crate::components::persistent::Persistent;
use crate::events::gamestate::GameStateChangedEvent;
use crate::events::gamestate::observe_gamestate_change_event;
use crate::events::wordsolved::observe_word_solved;
use crate::resources::gameconfig::{DEFAULT_CONFIG_PATH, GameConfig};
use crate::resources::gamestate::{GameState, GameStates, NextGameState};
use crate::resources::input::InputState;
use crate::resources::rng::GameRng;
use crate::resources::screensize::ScreenSize;
use crate::resources::session::{Difficulty, SelectedDifficulty};
use crate::resources::systemsstore::SystemsStore;
use crate::resources::worldtime::WorldTime;
use crate::systems::gameover::{blinker_system, game_over_input_system};
use crate::systems::gamestate::{
    check_pending_state, state_is_game_over, state_is_playing, state_is_title, state_shows_stars,
};
use crate::systems::input::update_input_state;
use crate::systems::menu::title_menu_system;
use crate::systems::gameplay_systems;
use crate::systems::render::render_frame;
use crate::systems::star::star_system;
use crate::systems::time::update_world_time;
use crate::systems::tween::button_tween_system;
use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use clap::Parser;
use log::{error, info, warn};
use std::path::PathBuf;

/// Wordstorm
#[derive(Parser)]
#[command(version, about = "Type the words before their ships get past you.")]
struct Cli {
    /// Configuration file (default: ./config.ini).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Skip the title screen and play at this difficulty
    /// (easy, normal, hard, insane).
    #[arg(long, value_name = "NAME")]
    difficulty: Option<String>,

    /// Seed for word sampling and star layout.
    #[arg(long, value_name = "N")]
    seed: Option<u64>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
    let mut config = GameConfig::with_path(config_path);
    if let Err(e) = config.load_from_file() {
        warn!("{}; using default configuration", e);
    }

    let selected = match cli.difficulty.as_deref() {
        Some(name) => {
            let difficulty = Difficulty::from_name(name);
            if difficulty.is_none() {
                warn!("Unknown difficulty '{}', showing the title screen", name);
            }
            difficulty
        }
        None => None,
    };

    // --------------- Raylib window ---------------
    let (window_width, window_height) = config.window_size();
    let mut builder = raylib::init();
    builder
        .size(window_width as i32, window_height as i32)
        .title("Wordstorm");
    if config.vsync {
        builder.vsync();
    }
    let (mut rl, thread) = builder.build();
    rl.set_target_fps(config.target_fps);
    // Escape belongs to the game
    rl.set_exit_key(None);

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default().with_time_scale(1.0));
    world.insert_resource(ScreenSize {
        w: window_width as i32,
        h: window_height as i32,
    });
    world.insert_resource(match cli.seed {
        Some(seed) => {
            info!("Using seed {}", seed);
            GameRng::with_seed(seed)
        }
        None => GameRng::default(),
    });
    if let Some(difficulty) = selected {
        world.insert_resource(SelectedDifficulty(difficulty));
    }
    world.insert_resource(config);
    world.insert_resource(InputState::default());
    world.insert_resource(GameState::new());
    world.insert_resource(NextGameState::new());
    world.insert_non_send_resource(rl);

    world.spawn((Observer::new(observe_gamestate_change_event), Persistent));
    world.spawn((Observer::new(observe_word_solved), Persistent));

    // Scene hooks are registered systems, which live on Persistent entities.
    let mut systems_store = SystemsStore::new();
    systems_store.register(&mut world, "setup", game::setup);
    systems_store.register(&mut world, "enter_title", game::enter_title);
    systems_store.register(&mut world, "enter_play", game::enter_play);
    systems_store.register(&mut world, "enter_game_over", game::enter_game_over);
    systems_store.register(&mut world, "clean_scene", game::clean_scene);
    systems_store.register(&mut world, "quit_game", game::quit_game);
    world.insert_resource(systems_store);

    world.flush();

    world.resource_mut::<NextGameState>().set(GameStates::Setup);
    world.trigger(GameStateChangedEvent {});
    world.flush();

    let mut update = Schedule::default();
    update.add_systems((update_input_state, check_pending_state).chain());
    update.add_systems(
        gameplay_systems()
            .after(check_pending_state)
            .run_if(state_is_playing),
    );
    update.add_systems(
        star_system
            .after(check_pending_state)
            .run_if(state_shows_stars),
    );
    update.add_systems(
        (button_tween_system, title_menu_system)
            .chain()
            .after(check_pending_state)
            .run_if(state_is_title),
    );
    update.add_systems(
        (blinker_system, game_over_input_system)
            .chain()
            .after(check_pending_state)
            .run_if(state_is_game_over),
    );

    if let Err(e) = update.initialize(&mut world) {
        error!("Failed to initialize schedule: {}", e);
        return;
    }

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
        && *world.resource::<GameState>().get() != GameStates::Quitting
    {
        let dt = world
            .non_send_resource::<raylib::RaylibHandle>()
            .get_frame_time()
            * 1000.0;
        update_world_time(&mut world, dt);

        update.run(&mut world);

        world.clear_trackers(); // Clear changed components for next frame

        let Some(mut rl) = world.remove_non_send_resource::<raylib::RaylibHandle>() else {
            error!("Raylib handle missing from the world");
            break;
        };
        {
            let mut d = rl.begin_drawing(&thread);
            render_frame(&mut world, &mut d);
        }
        world.insert_non_send_resource(rl);
    }
    info!("Bye!");
}
