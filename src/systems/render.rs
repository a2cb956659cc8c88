use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::boundary::Boundary;
use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::components::sprite::Sprite;
use crate::components::zindex::ZIndex;
use crate::resources::camera2d::Camera2DRes;
use crate::resources::debugmode::DebugMode;
use crate::resources::dialogue::DialogueBox;
use crate::resources::gameconfig::GameConfig;
use crate::resources::texturestore::TextureStore;

/// Scene background, #311047.
pub const BACKGROUND: Color = Color::new(0x31, 0x10, 0x47, 0xff);

const DIALOGUE_FONT_SIZE: i32 = 24;
const DIALOGUE_MARGIN: i32 = 24;
const DIALOGUE_PADDING: i32 = 16;
const DIALOGUE_LINES: i32 = 4;

/// Draw one frame.
///
/// The Raylib handle and thread are taken out of the World while drawing so
/// the passes below can still query it, then put back.
pub fn render_system(world: &mut World) {
    let Some(mut rl) = world.remove_non_send_resource::<RaylibHandle>() else {
        return;
    };
    let Some(thread) = world.remove_non_send_resource::<RaylibThread>() else {
        world.insert_non_send_resource(rl);
        return;
    };

    {
        let camera = world.resource::<Camera2DRes>().0;
        let mut d = rl.begin_drawing(&thread);
        d.clear_background(BACKGROUND);
        {
            let mut d2 = d.begin_mode2D(camera);
            render_pass(world, &mut d2);
        }
        render_dialogue(world, &mut d);
        render_debug_ui(world, &mut d);
    }

    world.insert_non_send_resource(thread);
    world.insert_non_send_resource(rl);
}

/// World-space pass: sprites by z-index, then boundary and collider outlines.
pub fn render_pass(world: &mut World, d2: &mut RaylibMode2D<RaylibDrawHandle>) {
    let mut to_draw: Vec<(Sprite, MapPosition, ZIndex)> = {
        let mut q = world.query::<(&Sprite, &MapPosition, &ZIndex)>();
        q.iter(world)
            .map(|(s, p, z)| (s.clone(), *p, *z))
            .collect()
    };
    to_draw.sort_by_key(|(_, _, z)| *z);

    let textures = world.resource::<TextureStore>();
    for (sprite, pos, _z) in to_draw.iter() {
        let Some(tex) = textures.get(&sprite.tex_key) else {
            continue;
        };
        // Source rect selects a frame; a negative width mirrors it in place.
        let src = Rectangle {
            x: sprite.offset.x,
            y: sprite.offset.y,
            width: if sprite.flip_h {
                -sprite.width
            } else {
                sprite.width
            },
            height: sprite.height,
        };
        let size = sprite.world_size();
        let dest = Rectangle {
            x: pos.pos.x,
            y: pos.pos.y,
            width: size.x,
            height: size.y,
        };
        let origin = Vector2 {
            x: sprite.origin.x * sprite.scale,
            y: sprite.origin.y * sprite.scale,
        };
        d2.draw_texture_pro(tex, src, dest, origin, 0.0, Color::WHITE);
    }

    let debug = world.contains_resource::<DebugMode>();
    let show_boundaries = debug || world.resource::<GameConfig>().show_boundaries;

    if show_boundaries {
        let fill = Color::new(0, 255, 0, 128);
        let mut boundaries = world.query_filtered::<(&BoxCollider, &MapPosition), With<Boundary>>();
        for (collider, position) in boundaries.iter(world) {
            let (x, y, w, h) = collider.get_aabb(position.pos);
            d2.draw_rectangle(x as i32, y as i32, w as i32, h as i32, fill);
        }
    }

    if debug {
        let mut colliders = world.query_filtered::<(&BoxCollider, &MapPosition), With<Player>>();
        for (collider, position) in colliders.iter(world) {
            let (x, y, w, h) = collider.get_aabb(position.pos);
            d2.draw_rectangle_lines(x as i32, y as i32, w as i32, h as i32, Color::RED);

            // Small cross at the pivot
            let (px, py) = (position.pos.x as i32, position.pos.y as i32);
            d2.draw_line(px - 5, py, px + 5, py, Color::GREEN);
            d2.draw_line(px, py - 5, px, py + 5, Color::GREEN);
        }
    }
}

/// Screen-space dialogue panel along the bottom of the window.
pub fn render_dialogue(world: &mut World, d: &mut RaylibDrawHandle) {
    let dialogue_box = world.resource::<DialogueBox>();
    if !dialogue_box.is_showing() {
        return;
    }

    let screen_w = d.get_screen_width();
    let screen_h = d.get_screen_height();
    let line_height = DIALOGUE_FONT_SIZE + 6;
    let panel_h = DIALOGUE_PADDING * 2 + line_height * DIALOGUE_LINES + 20;
    let panel = Rectangle {
        x: DIALOGUE_MARGIN as f32,
        y: (screen_h - panel_h - DIALOGUE_MARGIN) as f32,
        width: (screen_w - DIALOGUE_MARGIN * 2).max(0) as f32,
        height: panel_h as f32,
    };
    d.draw_rectangle_rec(panel, Color::new(0, 0, 0, 210));
    d.draw_rectangle_lines_ex(panel, 2.0, Color::WHITE);

    // Glyph width is roughly half the font size with the default font.
    let max_chars = ((panel.width as i32 - DIALOGUE_PADDING * 2) / (DIALOGUE_FONT_SIZE / 2)).max(1);
    let text_x = panel.x as i32 + DIALOGUE_PADDING;
    let mut text_y = panel.y as i32 + DIALOGUE_PADDING;
    for line in wrap_text(dialogue_box.visible_text(), max_chars as usize)
        .iter()
        .take(DIALOGUE_LINES as usize)
    {
        d.draw_text(line, text_x, text_y, DIALOGUE_FONT_SIZE, Color::WHITE);
        text_y += line_height;
    }

    let hint = if dialogue_box.is_fully_revealed() {
        "Space/Enter: close"
    } else {
        "Space/Enter: skip   Esc: close"
    };
    d.draw_text(
        hint,
        text_x,
        (panel.y + panel.height) as i32 - DIALOGUE_PADDING - 10,
        10,
        Color::LIGHTGRAY,
    );
}

/// Greedy word wrap to at most `max_chars` characters per line. Words longer
/// than a line are split.
pub fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let mut line = String::new();
        let mut line_len = 0;
        for word in paragraph.split_whitespace() {
            let mut word: Vec<char> = word.chars().collect();
            while word.len() > max_chars {
                if line_len > 0 {
                    lines.push(std::mem::take(&mut line));
                    line_len = 0;
                }
                let rest = word.split_off(max_chars);
                lines.push(word.into_iter().collect());
                word = rest;
            }
            let needed = if line_len == 0 {
                word.len()
            } else {
                line_len + 1 + word.len()
            };
            if needed > max_chars {
                lines.push(std::mem::take(&mut line));
                line_len = 0;
            }
            if line_len > 0 {
                line.push(' ');
                line_len += 1;
            }
            line.extend(word.iter());
            line_len += word.len();
        }
        lines.push(line);
    }
    lines
}

pub fn render_debug_ui(world: &mut World, d: &mut RaylibDrawHandle) {
    if !world.contains_resource::<DebugMode>() {
        return;
    }

    let fps = d.get_fps();
    let text = format!("DEBUG MODE (press F11 to toggle) | FPS: {}", fps);
    d.draw_text(&text, 10, 10, 10, Color::WHITE);

    let cam = world.resource::<Camera2DRes>().0;
    let cam_text = format!(
        "Camera target: ({:.1}, {:.1}) Zoom: {:.2}",
        cam.target.x, cam.target.y, cam.zoom
    );
    d.draw_text(&cam_text, 10, 30, 10, Color::WHITE);

    let mut players = world.query::<(&Player, &MapPosition)>();
    if let Some((player, position)) = players.iter(world).next() {
        let player_text = format!(
            "Player: ({:.1}, {:.1}) facing {:?} | dialogue: {}",
            position.pos.x,
            position.pos.y,
            player.direction,
            player.gate.active_key().unwrap_or("-")
        );
        d.draw_text(&player_text, 10, 50, 10, Color::WHITE);
    }

    let mouse_pos = d.get_mouse_position();
    let mouse_world = d.get_screen_to_world2D(mouse_pos, cam);
    let mouse_text = format!(
        "Mouse screen: ({:.1}, {:.1}) World: ({:.1}, {:.1})",
        mouse_pos.x, mouse_pos.y, mouse_world.x, mouse_world.y
    );
    d.draw_text(&mouse_text, 10, 70, 10, Color::WHITE);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_text_breaks_on_words() {
        let lines = wrap_text("the quick brown fox", 10);
        assert_eq!(lines, vec!["the quick", "brown fox"]);
    }

    #[test]
    fn test_wrap_text_splits_long_words_and_keeps_newlines() {
        let lines = wrap_text("abcdefgh\nhi", 3);
        assert_eq!(lines, vec!["abc", "def", "gh", "hi"]);
    }

    #[test]
    fn test_wrap_text_empty() {
        assert_eq!(wrap_text("", 10), vec![String::new()]);
    }
}
