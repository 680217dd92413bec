//! Per-screen frame layout

use glam::Vec2;

use super::{Frame, TextSize};
use crate::flow::Screen;
use crate::highscores::RankingTable;
use crate::sim::{GameState, Sprite};
use crate::ui::{self, Avatar, Button, NameInput, Rgb};

/// Build the frame for `screen`
pub fn build_frame(
    screen: Screen,
    state: &GameState,
    ranking: &RankingTable,
    name: &NameInput,
) -> Frame {
    let size = Vec2::new(
        state.settings.screen_width as f32,
        state.settings.screen_height as f32,
    );
    let mut frame = Frame::new(size);

    match screen {
        Screen::Menu => {
            frame.fill(Vec2::ZERO, size, ui::BACKGROUND);
            for button in [&ui::NEW_GAME, &ui::RANKING, &ui::QUIT] {
                draw_button(&mut frame, button);
            }
        }
        Screen::Ranking => {
            frame.fill(Vec2::ZERO, size, ui::BACKGROUND);
            draw_ranking(&mut frame, ranking);
            draw_button(&mut frame, &ui::BACK);
        }
        Screen::Naming => {
            frame.fill(Vec2::ZERO, size, ui::BACKGROUND);
            draw_box(
                &mut frame,
                ui::NAME_BOX_POS,
                ui::NAME_BOX_SIZE,
                ui::BUTTON,
                name.as_str(),
            );
            draw_button(&mut frame, &ui::TYPE_NAME);
            draw_button(&mut frame, &ui::OK);
        }
        Screen::CharSelect => {
            frame.fill(Vec2::ZERO, size, ui::BACKGROUND);
            for avatar in &ui::AVATARS {
                draw_avatar(&mut frame, avatar);
            }
        }
        Screen::Play => draw_play(&mut frame, state),
        Screen::Over => {
            frame.fill(Vec2::ZERO, size, ui::BACKGROUND);
            frame.text(
                "GAME OVER",
                Vec2::new(400.0, 250.0),
                ui::TEXT,
                TextSize::Large,
            );
            draw_button(&mut frame, &ui::PLAY_AGAIN);
            draw_button(&mut frame, &ui::QUIT_OVER);
            draw_score(&mut frame, state);
        }
    }

    frame
}

fn draw_box(frame: &mut Frame, pos: Vec2, size: Vec2, color: Rgb, label: &str) {
    frame.fill(pos, size, color);
    frame.text(
        label,
        ui::centered_label(pos, size, label),
        ui::TEXT,
        TextSize::Normal,
    );
}

fn draw_button(frame: &mut Frame, button: &Button) {
    draw_box(frame, button.pos, button.size, button.color, button.label);
}

fn draw_avatar(frame: &mut Frame, avatar: &Avatar) {
    frame.fill(avatar.pos, Avatar::SIZE, Avatar::COLOR);
    let mid = avatar.pos.x + Avatar::SIZE.x / 2.0;
    frame.image(
        Sprite::Avatar(avatar.species),
        Vec2::new((mid - 64.0).round(), (avatar.pos.y + 20.0).round()),
    );
    let label = avatar.species.name();
    frame.text(
        label,
        Vec2::new(
            (mid - label.chars().count() as f32 * 7.0).round(),
            (avatar.pos.y + Avatar::SIZE.y / 2.0 + 60.0).round(),
        ),
        ui::TEXT,
        TextSize::Normal,
    );
}

fn draw_ranking(frame: &mut Frame, ranking: &RankingTable) {
    for (place, entry) in ranking.entries().iter().enumerate() {
        let color = ui::place_color(place);
        let y = 100.0 + place as f32 * 60.0;
        frame.text(
            (place + 1).to_string(),
            Vec2::new(350.0, y),
            color,
            TextSize::Normal,
        );
        frame.text(entry.name.as_str(), Vec2::new(400.0, y), color, TextSize::Normal);
        frame.text(
            entry.score.to_string(),
            Vec2::new(650.0, y),
            color,
            TextSize::Normal,
        );
    }
}

fn draw_score(frame: &mut Frame, state: &GameState) {
    frame.text(
        format!("Score: {}", state.score.get()),
        ui::SCORE_POS,
        ui::TEXT,
        TextSize::Normal,
    );
}

fn draw_play(frame: &mut Frame, state: &GameState) {
    frame.image(Sprite::Background, Vec2::ZERO);
    let character = state.character();
    frame.image(character.sprite, character.pos);
    draw_score(frame, state);
    for predator in &state.predators {
        frame.image(predator.sprite, predator.pos);
    }
    for apple in &state.apples {
        frame.image(Sprite::Apple, apple.pos);
    }
}
