//! Drawing.
//!
//! Everything is drawn with Raylib primitives and the default font, back to
//! front: stars, hills, title buttons, word ships, lazers, the turret, the
//! dashboard and finally screen-space labels and the text box. The pass reads
//! the ECS world directly inside Raylib's drawing scope.

use std::ffi::CString;

use bevy_ecs::prelude::*;
use raylib::ffi;
use raylib::prelude::*;

use crate::components::animation::FrameAnimation;
use crate::components::button::MaskedButton;
use crate::components::label::{Anchor, Label, LabelText};
use crate::components::lazer::Lazer;
use crate::components::mapposition::MapPosition;
use crate::components::star::Star;
use crate::components::turret::{BARREL_LENGTH, Turret, barrel_center, turret_base_rect};
use crate::components::word::{Doomed, SHIP_COLORS, Word, label_center, word_rect};
use crate::resources::gamestate::{GameState, GameStates};
use crate::resources::hud::DefinitionPanel;
use crate::resources::input::TextInput;
use crate::resources::screensize::ScreenSize;
use crate::resources::session::{Session, time_format};

const SPACE: Color = Color { r: 6, g: 8, b: 24, a: 255 };
const STAR_COLOR: Color = Color { r: 224, g: 255, b: 255, a: 255 };
const HALO_COLOR: Color = Color { r: 255, g: 255, b: 255, a: 64 };
const HILL_COLOR: Color = Color { r: 24, g: 30, b: 52, a: 255 };
const DASHBOARD_COLOR: Color = Color { r: 40, g: 44, b: 64, a: 255 };
const HULL_SHADE: Color = Color { r: 0, g: 0, b: 0, a: 90 };
const LAZER_COLOR: Color = Color { r: 255, g: 60, b: 60, a: 255 };
const TEXTBOX_COLOR: Color = Color { r: 16, g: 18, b: 32, a: 255 };

/// Height of the dashboard strip along the bottom edge.
pub const DASHBOARD_HEIGHT: f32 = 65.0;
const WORD_FONT: i32 = 20;
const BUTTON_FONT: i32 = 30;
const TEXTBOX_FONT: i32 = 28;
const TEXTBOX_WIDTH: f32 = 360.0;
const TEXTBOX_HEIGHT: f32 = 40.0;

/// Pixel width of `text` in the default font.
fn text_width(text: &str, font_size: i32) -> i32 {
    let Ok(c_text) = CString::new(text) else {
        return 0;
    };
    unsafe { ffi::MeasureText(c_text.as_ptr(), font_size) }
}

/// Top-left corner of a `width`x`height` box placed at `pos` with `anchor`.
pub fn anchored_origin(anchor: Anchor, pos: Vector2, width: f32, height: f32) -> Vector2 {
    let (fx, fy) = match anchor {
        Anchor::TopLeft => (0.0, 0.0),
        Anchor::TopRight => (1.0, 0.0),
        Anchor::MidTop => (0.5, 0.0),
        Anchor::MidBottom => (0.5, 1.0),
        Anchor::Center => (0.5, 0.5),
    };
    Vector2 {
        x: pos.x - width * fx,
        y: pos.y - height * fy,
    }
}

fn draw_text_anchored(
    d: &mut RaylibDrawHandle,
    text: &str,
    pos: Vector2,
    anchor: Anchor,
    font_size: i32,
    color: Color,
) {
    let width = text_width(text, font_size) as f32;
    let origin = anchored_origin(anchor, pos, width, font_size as f32);
    d.draw_text(text, origin.x as i32, origin.y as i32, font_size, color);
}

/// Text a label shows this frame.
fn resolve_label(text: &LabelText, session: Option<&Session>) -> String {
    match (text, session) {
        (LabelText::Static(s), _) => s.clone(),
        (LabelText::GameTime, Some(s)) => time_format(s.elapsed_ms()),
        (LabelText::WordsSolved, Some(s)) => format!("Words: {}", s.num_solved),
        (LabelText::CharsScored, Some(s)) => format!("Chars: {}", s.points),
        _ => String::new(),
    }
}

/// Draw one full frame.
pub fn render_frame(world: &mut World, d: &mut RaylibDrawHandle) {
    let screen = *world.resource::<ScreenSize>();
    let (w, h) = (screen.width(), screen.height());
    let playing = matches!(
        world.get_resource::<GameState>().map(|s| s.get()),
        Some(GameStates::Playing)
    );

    d.clear_background(SPACE);

    let mut stars = world.query::<&Star>();
    for star in stars.iter(world) {
        if star.twinkling {
            d.draw_rectangle(star.x as i32 - 1, star.y as i32 - 1, 4, 4, HALO_COLOR);
        }
        d.draw_rectangle(star.x as i32, star.y as i32, 2, 2, STAR_COLOR);
    }

    if playing {
        draw_hills(d, w, h);
    }

    let mut buttons = world.query::<&MaskedButton>();
    for button in buttons.iter(world) {
        draw_button(d, button);
    }

    let mut words =
        world.query::<(&Word, &MapPosition, Option<&FrameAnimation>, Has<Doomed>)>();
    for (word, position, animation, doomed) in words.iter(world) {
        let frame = animation.map_or(0, |a| a.frame_index);
        draw_ship(d, word, position.pos, frame, doomed);
    }

    let mut lazers = world.query::<(&Lazer, &MapPosition)>();
    for (lazer, head) in lazers.iter(world) {
        let origin = Vector2 {
            x: lazer.origin_x,
            y: lazer.origin_y,
        };
        d.draw_line_ex(origin, head.pos, 3.0, LAZER_COLOR);
    }

    let mut turrets = world.query::<&Turret>();
    for turret in turrets.iter(world) {
        draw_turret(d, turret, w, h);
    }

    if playing {
        d.draw_rectangle(
            0,
            (h - DASHBOARD_HEIGHT) as i32,
            w as i32,
            DASHBOARD_HEIGHT as i32,
            DASHBOARD_COLOR,
        );
        if let Some(text_input) = world.get_resource::<TextInput>() {
            draw_text_box(d, &text_input.buffer, w, h);
        }
    }

    let mut labels = world.query::<&Label>();
    let session = world.get_resource::<Session>();
    let panel = world.get_resource::<DefinitionPanel>();
    for label in labels.iter(world) {
        if !label.visible {
            continue;
        }
        if label.text == LabelText::Definition {
            if let Some(panel) = panel {
                let step = (label.font_size + 4) as f32;
                for (i, line) in panel.lines.iter().enumerate() {
                    let pos = Vector2 {
                        x: label.pos.x,
                        y: label.pos.y + step * i as f32,
                    };
                    draw_text_anchored(d, line, pos, label.anchor, label.font_size, label.color);
                }
            }
            continue;
        }
        let text = resolve_label(&label.text, session);
        draw_text_anchored(d, &text, label.pos, label.anchor, label.font_size, label.color);
    }
}

fn draw_hills(d: &mut RaylibDrawHandle, w: f32, h: f32) {
    let base = h - DASHBOARD_HEIGHT;
    let mut x = 0.0;
    let mut radius = 90.0;
    while x < w + radius {
        d.draw_circle_v(Vector2 { x, y: base }, radius, HILL_COLOR);
        x += radius * 1.4;
        radius = if radius > 100.0 { 80.0 } else { 130.0 };
    }
}

fn draw_button(d: &mut RaylibDrawHandle, button: &MaskedButton) {
    let color = SHIP_COLORS[button.difficulty as usize % SHIP_COLORS.len()];
    let rect = Rectangle {
        x: button.center.x - button.size * 0.5,
        y: button.center.y - button.size * 0.5,
        width: button.size,
        height: button.size,
    };
    d.draw_rectangle_rec(rect, color);
    if button.hovered {
        d.draw_rectangle_lines_ex(rect, 4.0, Color::WHITE);
    }
    draw_text_anchored(
        d,
        button.difficulty.name(),
        button.center,
        Anchor::Center,
        BUTTON_FONT,
        Color::BLACK,
    );
}

/// A ship is a hull pointing left with a flickering exhaust; the frame index
/// drives the flicker. A ship with a lazer on its way has its word lit up.
fn draw_ship(d: &mut RaylibDrawHandle, word: &Word, pos: Vector2, frame: usize, doomed: bool) {
    let rect = word_rect(pos);
    let hull = SHIP_COLORS[word.palette % SHIP_COLORS.len()];
    let nose = Vector2 {
        x: rect.x + 24.0,
        y: rect.y + 56.0,
    };
    let tail_top = Vector2 {
        x: rect.x + 150.0,
        y: rect.y + 20.0,
    };
    let tail_bottom = Vector2 {
        x: rect.x + 150.0,
        y: rect.y + 92.0,
    };
    d.draw_triangle(nose, tail_bottom, tail_top, hull);
    d.draw_circle_v(
        Vector2 {
            x: rect.x + 84.0,
            y: rect.y + 56.0,
        },
        12.0,
        HULL_SHADE,
    );

    let flame = 10.0 + (frame % 4) as f32 * 6.0;
    d.draw_triangle(
        Vector2 {
            x: tail_top.x,
            y: rect.y + 44.0,
        },
        Vector2 {
            x: tail_top.x,
            y: rect.y + 68.0,
        },
        Vector2 {
            x: tail_top.x + flame,
            y: rect.y + 56.0,
        },
        Color::ORANGE,
    );

    draw_text_anchored(
        d,
        &word.text,
        label_center(pos),
        Anchor::Center,
        WORD_FONT,
        if doomed { LAZER_COLOR } else { Color::WHITE },
    );
}

fn draw_turret(d: &mut RaylibDrawHandle, turret: &Turret, w: f32, h: f32) {
    let base = turret_base_rect(w, h);
    let pivot = barrel_center(w, h);
    let tip = Vector2 {
        x: pivot.x + turret.angle.cos() * BARREL_LENGTH,
        y: pivot.y - turret.angle.sin() * BARREL_LENGTH,
    };
    d.draw_line_ex(pivot, tip, 8.0, Color::LIGHTGRAY);
    d.draw_rectangle_rec(base, Color::GRAY);
    d.draw_circle_v(pivot, 9.0, Color::DARKGRAY);
}

fn draw_text_box(d: &mut RaylibDrawHandle, buffer: &str, w: f32, h: f32) {
    let rect = Rectangle {
        x: w * 0.5 - TEXTBOX_WIDTH * 0.5,
        y: h - TEXTBOX_HEIGHT - 12.0,
        width: TEXTBOX_WIDTH,
        height: TEXTBOX_HEIGHT,
    };
    d.draw_rectangle_rec(rect, TEXTBOX_COLOR);
    d.draw_rectangle_lines_ex(rect, 2.0, Color::LIGHTGRAY);
    let center = Vector2 {
        x: rect.x + rect.width * 0.5,
        y: rect.y + rect.height * 0.5,
    };
    draw_text_anchored(d, buffer, center, Anchor::Center, TEXTBOX_FONT, Color::WHITE);
}
