//! Bottom bars: the tab navigation and the key hint line.

use super::keybindings::NavBarItem;
use crate::routes::{Route, BOTTOM_NAV_TABS};
use crate::theme::{Styles, Theme};
use crate::types::Gender;
use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Tab bar line: `[1] Home  [2] At Home ...`, active tab in the accent color
pub fn tab_line(route: &Route, gender: Gender) -> Line<'static> {
    let active = route.nav_tab();
    let mut spans = Vec::new();
    for (i, tab) in BOTTOM_NAV_TABS.iter().enumerate() {
        let style = if active == Some(*tab) {
            Styles::title(gender).add_modifier(Modifier::UNDERLINED)
        } else {
            Styles::text_secondary()
        };
        spans.push(Span::styled(format!("[{}] ", i + 1), Styles::nav_hint()));
        spans.push(Span::styled(tab.label(), style));
        spans.push(Span::raw("   "));
    }
    Line::from(spans).centered()
}

/// Hint line built from the keybinding registry
pub fn hint_line(items: &[NavBarItem], gender: Gender) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Styles::nav_hint()));
        }
        spans.push(Span::styled(
            item.key_display.clone(),
            Styles::nav_hint().fg(Theme::accent(gender)),
        ));
        spans.push(Span::styled(
            format!(" {}", item.action_label),
            Styles::nav_hint(),
        ));
    }
    Line::from(spans)
}

/// Render the tab bar into a one-line area
pub fn render_tabs(f: &mut Frame, area: Rect, route: &Route, gender: Gender) {
    f.render_widget(
        Paragraph::new(tab_line(route, gender)).style(Styles::panel_bg_alt()),
        area,
    );
}

/// Render the hint line into a one-line area
pub fn render_hints(f: &mut Frame, area: Rect, items: &[NavBarItem], gender: Gender) {
    f.render_widget(Paragraph::new(hint_line(items, gender)), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_tab_line_lists_all_tabs() {
        let line = tab_line(&Route::Explore, Gender::Male);
        let rendered = text(&line);
        for tab in BOTTOM_NAV_TABS {
            assert!(rendered.contains(tab.label()));
        }
    }

    #[test]
    fn test_hint_line_separators() {
        let items = vec![
            NavBarItem {
                key_display: "Q".into(),
                action_label: "Quit".into(),
            },
            NavBarItem {
                key_display: "?".into(),
                action_label: "Help".into(),
            },
        ];
        assert_eq!(text(&hint_line(&items, Gender::Female)), "Q Quit │ ? Help");
    }
}
