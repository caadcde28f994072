//! Frame renderer: the map on top, the message log underneath.
use std::io;

use delve_core::{Entity, LevelView, Position, Renderer};
use ratatui::{
    Frame, Terminal,
    backend::Backend,
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::Line,
    widgets::{Block, Paragraph, Widget},
};

use super::theme::Theme;
use crate::message::MessageLog;

/// Draws a [`LevelView`] and the message log into a ratatui terminal.
pub struct TerminalRenderer<'a, B: Backend> {
    terminal: &'a mut Terminal<B>,
    messages: &'a MessageLog,
    theme: &'a Theme,
    message_panel_height: u16,
}

impl<'a, B: Backend> TerminalRenderer<'a, B> {
    pub fn new(
        terminal: &'a mut Terminal<B>,
        messages: &'a MessageLog,
        theme: &'a Theme,
        message_panel_height: u16,
    ) -> Self {
        Self {
            terminal,
            messages,
            theme,
            message_panel_height,
        }
    }
}

impl<B: Backend> Renderer for TerminalRenderer<'_, B> {
    type Error = io::Error;

    fn render(&mut self, view: &LevelView<'_>) -> Result<(), io::Error> {
        let messages = self.messages;
        let theme = self.theme;
        let panel_height = self.message_panel_height;
        self.terminal.draw(|frame| {
            draw_frame(frame, view, messages, theme, panel_height);
        })?;
        Ok(())
    }
}

fn draw_frame(
    frame: &mut Frame,
    view: &LevelView<'_>,
    messages: &MessageLog,
    theme: &Theme,
    panel_height: u16,
) {
    let [map_area, message_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(panel_height)])
            .areas(frame.area());

    frame.render_widget(MapWidget { view, theme }, map_area);

    let capacity = usize::from(message_area.height.saturating_sub(2));
    let mut lines: Vec<Line> = messages.recent(capacity).map(Line::from).collect();
    lines.reverse();
    frame.render_widget(
        Paragraph::new(lines).block(Block::bordered().title(" Messages ")),
        message_area,
    );
}

/// Terrain backgrounds plus the glyphs of entities in view.
struct MapWidget<'v, 'a> {
    view: &'v LevelView<'a>,
    theme: &'v Theme,
}

impl Widget for MapWidget<'_, '_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let columns = clamp_to_u16(self.view.width()).min(area.width);
        let rows = clamp_to_u16(self.view.height()).min(area.height);

        for y in 0..rows {
            for x in 0..columns {
                let position = Position::new(i32::from(x), i32::from(y));
                let status = self.view.status(position);
                let Some(background) = self.theme.terrain(status, self.view.is_wall(position))
                else {
                    continue;
                };
                if let Some(cell) = buf.cell_mut((area.x + x, area.y + y)) {
                    cell.set_bg(background);
                }
            }
        }

        // Viewer last so it is never hidden under another glyph.
        let viewer = self.view.viewer().map(|entity| entity.id);
        let others = self
            .view
            .visible_entities()
            .filter(|entity| Some(entity.id) != viewer);
        let player = self
            .view
            .visible_entities()
            .filter(|entity| Some(entity.id) == viewer);
        for entity in others.chain(player) {
            self.draw_entity(entity, area, columns, rows, buf);
        }
    }
}

impl MapWidget<'_, '_> {
    fn draw_entity(&self, entity: &Entity, area: Rect, columns: u16, rows: u16, buf: &mut Buffer) {
        let (Ok(x), Ok(y)) = (
            u16::try_from(entity.position.x),
            u16::try_from(entity.position.y),
        ) else {
            return;
        };
        if x >= columns || y >= rows {
            return;
        }
        if let Some(cell) = buf.cell_mut((area.x + x, area.y + y)) {
            cell.set_char(entity.glyph).set_fg(self.theme.entity(entity.color));
        }
    }
}

fn clamp_to_u16(value: u32) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use delve_core::{DungeonConfig, Entities, EntitySpec, MonsterKind, Session, TileGrid};
    use ratatui::backend::TestBackend;

    fn small_session() -> Session {
        let mut grid = TileGrid::new(10, 5);
        grid.carve_rect(1, 1, 8, 3);
        let mut entities = Entities::new();
        let player = entities.spawn(EntitySpec::player(Position::new(2, 2)));
        entities.spawn(EntitySpec::monster(MonsterKind::Orc, Position::new(4, 2)));
        Session::from_parts(DungeonConfig::new(), grid, entities, player)
    }

    fn row_text(buffer: &Buffer, y: u16) -> String {
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn draws_entities_terrain_and_messages() {
        let mut session = small_session();
        let mut messages = MessageLog::new(8);
        messages.push_text("hello");
        let theme = Theme::new();
        let mut terminal = Terminal::new(TestBackend::new(20, 12)).unwrap();

        let mut renderer = TerminalRenderer::new(&mut terminal, &messages, &theme, 5);
        session.render_with(&mut renderer).unwrap();

        let buffer = terminal.backend().buffer();
        assert_eq!(buffer[(2, 2)].symbol(), "@");
        assert_eq!(buffer[(4, 2)].symbol(), "o");
        assert_eq!(buffer[(3, 2)].bg, theme.light_ground);
        assert_eq!(buffer[(0, 0)].bg, theme.light_wall);
        assert!(row_text(buffer, 8).contains("hello"));
    }
}
