//! Scene hooks.
//!
//! Each function here is registered in the
//! [`SystemsStore`](crate::resources::systemsstore::SystemsStore) and run by
//! the game state observer when its state is entered (or, for
//! [`clean_scene`], left). They build and tear down the entities and
//! per-round resources of each screen.

use bevy_ecs::prelude::*;
use log::{error, info, warn};
use raylib::prelude::{Color, Vector2};

use crate::components::button::{ButtonTweens, MaskedButton};
use crate::components::label::{Anchor, Blinker, Label, LabelText};
use crate::components::mapposition::MapPosition;
use crate::components::persistent::Persistent;
use crate::components::star::Star;
use crate::components::turret::{Turret, barrel_center};
use crate::components::word::WORD_WIDTH;
use crate::resources::dictionary::Dictionary;
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::{GameStates, NextGameState};
use crate::resources::hud::{DefinitionPanel, TitleMenu};
use crate::resources::input::TextInput;
use crate::resources::rng::GameRng;
use crate::resources::screensize::ScreenSize;
use crate::resources::session::{Difficulty, GameOverReport, SelectedDifficulty, Session, time_format};
use crate::resources::tweens::GameplayTweens;
use crate::systems::render::DASHBOARD_HEIGHT;
use crate::systems::star::random_stars;
use crate::systems::word::spawn_random_word;

const HUD_FONT: i32 = 24;
const DEFINITION_FONT: i32 = 20;
const DEFINITION_COLOR: Color = Color { r: 200, g: 200, b: 200, a: 255 };

/// Insert the UI resources every screen relies on, then go to the title
/// screen. A difficulty chosen on the command line skips straight to play.
pub fn setup(
    mut commands: Commands,
    selected: Option<Res<SelectedDifficulty>>,
    mut next_state: ResMut<NextGameState>,
) {
    commands.insert_resource(TitleMenu::default());
    commands.insert_resource(DefinitionPanel::default());
    commands.insert_resource(TextInput::default());
    commands.insert_resource(GameplayTweens::default());

    if let Some(selected) = selected {
        info!("Starting a {} round", selected.0.name());
        next_state.set(GameStates::Playing);
    } else {
        commands.insert_resource(SelectedDifficulty::default());
        next_state.set(GameStates::Title);
    }
}

fn spawn_stars(commands: &mut Commands, stars: impl IntoIterator<Item = Star>) {
    for star in stars {
        commands.spawn(star);
    }
}

/// Stars and one button per difficulty, stacked down the middle.
pub fn enter_title(
    mut commands: Commands,
    screen: Res<ScreenSize>,
    config: Res<GameConfig>,
    mut rng: ResMut<GameRng>,
    mut menu: ResMut<TitleMenu>,
) {
    spawn_stars(
        &mut commands,
        random_stars(config.star_count, &screen, &mut rng.0),
    );

    let center_x = screen.width() * 0.5;
    for (i, difficulty) in Difficulty::ALL.iter().enumerate() {
        let center = Vector2 {
            x: center_x,
            y: 90.0 + 180.0 * i as f32,
        };
        commands.spawn((
            MaskedButton::new(center, WORD_WIDTH, *difficulty),
            ButtonTweens::default(),
        ));
    }

    commands.spawn(Label::new(
        "UP/DOWN + ENTER or click to choose - ESC to quit",
        Vector2 {
            x: screen.width() - 20.0,
            y: screen.height() - 12.0,
        },
        Anchor::TopRight,
        16,
    ));
    *menu = TitleMenu::default();
}

/// Start a round at the selected difficulty.
pub fn enter_play(
    mut commands: Commands,
    screen: Res<ScreenSize>,
    config: Res<GameConfig>,
    selected: Res<SelectedDifficulty>,
    mut rng: ResMut<GameRng>,
) {
    let (w, h) = (screen.width(), screen.height());
    let mut session = Session::new(selected.0, w);
    let max_length = session.params.max_length;

    let dictionary = match Dictionary::load(&config.dictionary_path, max_length) {
        Ok(dictionary) if !dictionary.is_empty() => dictionary,
        Ok(_) => {
            warn!(
                "Dictionary {} has no playable words, using the built-in list",
                config.dictionary_path.display()
            );
            Dictionary::builtin(max_length)
        }
        Err(e) => {
            error!("{}; using the built-in list", e);
            Dictionary::builtin(max_length)
        }
    };

    spawn_stars(&mut commands, random_stars(config.star_count, &screen, &mut rng.0));
    commands.spawn((Turret::new(), MapPosition::from(barrel_center(w, h))));
    spawn_random_word(&mut commands, &mut session, &dictionary, &mut rng.0);

    let hud_y = h - DASHBOARD_HEIGHT * 0.5 - HUD_FONT as f32 * 0.5;
    commands.spawn(Label::bound(
        LabelText::WordsSolved,
        Vector2 { x: 20.0, y: hud_y },
        Anchor::TopLeft,
        HUD_FONT,
    ));
    commands.spawn(Label::bound(
        LabelText::CharsScored,
        Vector2 { x: 200.0, y: hud_y },
        Anchor::TopLeft,
        HUD_FONT,
    ));
    commands.spawn(Label::bound(
        LabelText::GameTime,
        Vector2 { x: w - 20.0, y: hud_y },
        Anchor::TopRight,
        HUD_FONT,
    ));
    commands.spawn(
        Label::bound(
            LabelText::Definition,
            Vector2 { x: 20.0, y: 20.0 },
            Anchor::TopLeft,
            DEFINITION_FONT,
        )
        .with_color(DEFINITION_COLOR),
    );

    info!(
        "Round started: {} with {} words",
        session.difficulty.name(),
        dictionary.len()
    );
    commands.insert_resource(session);
    commands.insert_resource(dictionary);
    commands.insert_resource(GameplayTweens::default());
    commands.insert_resource(DefinitionPanel::default());
    commands.insert_resource(TextInput::default());
}

/// Show the results of the round that just ended. The report is removed so
/// it is read only once.
pub fn enter_game_over(
    mut commands: Commands,
    report: Option<Res<GameOverReport>>,
    screen: Res<ScreenSize>,
    mut next_state: ResMut<NextGameState>,
) {
    let Some(report) = report else {
        warn!("No game over report available, back to the title screen");
        next_state.set(GameStates::Title);
        return;
    };
    commands.remove_resource::<GameOverReport>();

    let (w, h) = (screen.width(), screen.height());
    spawn_stars(&mut commands, report.stars.iter().copied());

    commands.spawn((
        Label::new("GAME OVER", Vector2 { x: w * 0.5, y: h * 0.2 }, Anchor::Center, 80),
        Blinker::new(600.0).with_recolor(),
    ));
    commands.spawn((
        Label::new(
            "SPACE to continue - ESC to quit",
            Vector2 { x: w * 0.5, y: h - 40.0 },
            Anchor::MidBottom,
            24,
        ),
        Blinker::new(900.0),
    ));

    let lines = [
        format!("Time: {}", time_format(report.game_time)),
        format!("Difficulty: {}", report.difficulty.name()),
        format!("Words: {}", report.num_words),
        format!("Chars: {}", report.num_chars),
        // Whole words per minute, rounded down.
        format!("WPM: {}", report.words_per_minute() as u32),
    ];
    for (i, line) in lines.into_iter().enumerate() {
        commands.spawn(Label::new(
            line,
            Vector2 {
                x: w * 0.5,
                y: h * 0.35 + 50.0 * i as f32,
            },
            Anchor::MidTop,
            36,
        ));
    }
}

/// Despawn everything that is not [`Persistent`] and drop round state.
pub fn clean_scene(mut commands: Commands, query: Query<Entity, Without<Persistent>>) {
    let mut count = 0;
    for entity in query.iter() {
        commands.entity(entity).try_despawn();
        count += 1;
    }
    commands.remove_resource::<Session>();
    commands.insert_resource(GameplayTweens::default());
    info!("Scene cleaned, {} entities despawned", count);
}

pub fn quit_game() {
    info!("Quitting game");
}
