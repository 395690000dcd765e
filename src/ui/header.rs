//! Header and common widget rendering
//!
//! This module contains the title bar with the gender toggle, the status
//! line, and the confirmation toast.

use crate::routes::Route;
use crate::theme::{Styles, UiText};
use crate::types::Gender;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};
use strum::IntoEnumIterator;

/// Header renderer for the title bar
pub struct HeaderRenderer {
    app_name: &'static str,
}

impl Default for HeaderRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl HeaderRenderer {
    /// Create a new header renderer
    pub fn new() -> Self {
        Self {
            app_name: UiText::APP_NAME,
        }
    }

    /// Render the title bar: app name and screen title left, gender toggle right
    pub fn render(&self, f: &mut Frame, area: Rect, route: &Route, gender: Gender) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Styles::border_active(gender));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let [title_area, toggle_area] =
            Layout::horizontal([Constraint::Min(10), Constraint::Length(20)]).areas(inner);

        let title = Line::from(vec![
            Span::styled(self.app_name, Styles::title(gender)),
            Span::styled("  ·  ", Styles::text_muted()),
            Span::styled(route.title(), Styles::text_bold()),
        ]);
        f.render_widget(Paragraph::new(title), title_area);
        f.render_widget(
            Paragraph::new(gender_toggle(gender)).alignment(Alignment::Right),
            toggle_area,
        );
    }
}

/// Men / Women toggle with the active tab highlighted
pub fn gender_toggle(active: Gender) -> Line<'static> {
    let mut spans = Vec::new();
    for gender in Gender::iter() {
        if gender == active {
            spans.push(Span::styled(
                format!(" {} ", gender.tab_label()),
                Styles::selected(active),
            ));
        } else {
            spans.push(Span::styled(
                format!(" {} ", gender.tab_label()),
                Styles::text_secondary(),
            ));
        }
    }
    spans.push(Span::styled(" (g)", Styles::nav_hint()));
    Line::from(spans)
}

/// Status line: the current message, or the help hint when there is none
pub fn render_status(f: &mut Frame, area: Rect, message: &str) {
    let line = if message.is_empty() {
        Line::from(Span::styled(UiText::PRESS_HELP, Styles::text_muted()))
    } else {
        Line::from(Span::styled(message.to_string(), Styles::warning()))
    };
    f.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

/// Toast box pinned to the top of `area`
pub fn render_toast(f: &mut Frame, area: Rect, message: &str) {
    let width = (message.chars().count() as u16 + 6).min(area.width);
    let [row] = Layout::vertical([Constraint::Length(3)]).areas(area);
    let [toast_area] = Layout::horizontal([Constraint::Length(width)])
        .flex(ratatui::layout::Flex::Center)
        .areas(row);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Styles::success())
        .style(Styles::panel_bg_alt());
    f.render_widget(Clear, toast_area);
    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("✓ ", Styles::success()),
            Span::styled(message.to_string(), Styles::text_bold()),
        ]))
        .alignment(Alignment::Center)
        .block(block),
        toast_area,
    );
}

/// Section heading in the accent color
pub fn section_title(text: impl Into<String>, gender: Gender) -> Line<'static> {
    Line::from(Span::styled(text.into(), Styles::title(gender)))
}
