//! Game Renderer
//!
//! Draws the simulation state with macroquad. Takes everything it draws
//! with from a [`RenderContext`] and never mutates game state.

use macroquad::prelude::*;

use super::platform::Platform;
use super::player::Player;
use super::runtime::GameState;
use crate::asset::GameAssets;

/// Score text position (top-left of the text box)
const SCORE_POS: (f32, f32) = (10.0, 10.0);
const SCORE_COLOR: Color = BLACK;

/// Drawing resources for one run
pub struct RenderContext {
    pub assets: GameAssets,
    pub screen_width: f32,
    pub screen_height: f32,
    pub score_font_size: f32,
}

impl RenderContext {
    pub fn new(assets: GameAssets, settings: &crate::settings::Settings) -> Self {
        Self {
            assets,
            screen_width: settings.screen_width,
            screen_height: settings.screen_height,
            score_font_size: settings.score_font_size,
        }
    }
}

fn draw_stretched(texture: &Texture2D, x: f32, y: f32, w: f32, h: f32) {
    draw_texture_ex(
        texture,
        x,
        y,
        WHITE,
        DrawTextureParams {
            dest_size: Some(Vec2::new(w, h)),
            ..Default::default()
        },
    );
}

/// Fill the screen with the background image
pub fn draw_background(ctx: &RenderContext) {
    clear_background(SKYBLUE);
    draw_stretched(
        &ctx.assets.background,
        0.0,
        0.0,
        ctx.screen_width,
        ctx.screen_height,
    );
}

/// Current animation frame at the player's position
pub fn draw_player(ctx: &RenderContext, player: &Player) {
    match ctx.assets.player_frame(player.current_frame) {
        Some(frame) => draw_stretched(frame, player.x, player.y, player.width, player.height),
        None => draw_rectangle(player.x, player.y, player.width, player.height, ORANGE),
    }
}

/// Platform texture stretched over the platform's box
pub fn draw_platform(ctx: &RenderContext, platform: &Platform) {
    draw_stretched(
        &ctx.assets.platform,
        platform.x,
        platform.y,
        platform.width,
        platform.height,
    );
}

/// "Score: N" in the top-left corner
pub fn draw_score(ctx: &RenderContext, score: u32) {
    let text = format!("Score: {}", score);
    let dims = measure_text(&text, None, ctx.score_font_size as u16, 1.0);
    // draw_text positions the baseline; shift down so SCORE_POS is the top
    draw_text(
        &text,
        SCORE_POS.0,
        SCORE_POS.1 + dims.offset_y,
        ctx.score_font_size,
        SCORE_COLOR,
    );
}

/// Everything drawn after the background: player, platforms in slot order,
/// then the score on top.
pub fn draw_world(ctx: &RenderContext, state: &GameState) {
    draw_player(ctx, &state.player);
    for platform in state.platforms.iter() {
        draw_platform(ctx, platform);
    }
    draw_score(ctx, state.score);
}
