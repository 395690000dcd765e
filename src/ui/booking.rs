//! Booking screens
//!
//! The at-home booking wizard (step indicator, date strip, slot grid,
//! checklist, summary and confirmation) and the salon booking recap.

use super::header::section_title;
use crate::app::{SalonBookingScreen, WizardScreen};
use crate::booking_state::{BookingStep, BookingWizard, Confirmation};
use crate::cart::CartLine;
use crate::pricing::{format_rupees, PriceBreakdown, TAX_RATE_PERCENT};
use crate::theme::{Styles, Theme, UiConstants, UiText};
use crate::types::Gender;
use chrono::NaiveDate;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

/// Width of one date cell in the date strip, separator included
const DATE_CELL_WIDTH: u16 = 9;

/// Time slots per row in the slot grid
const SLOTS_PER_ROW: usize = 4;

/// Render the at-home booking wizard
pub fn render_wizard(f: &mut Frame, area: Rect, screen: &WizardScreen, gender: Gender) {
    if let Some(confirmation) = &screen.confirmation {
        render_confirmation(f, area, confirmation, gender);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(6),
            Constraint::Length(UiConstants::ACTION_BAR_HEIGHT),
        ])
        .split(area);

    let wizard = &screen.wizard;
    f.render_widget(step_indicator(wizard, gender), chunks[0]);

    match wizard.step() {
        BookingStep::DateTime => render_date_time(f, chunks[1], screen, gender),
        BookingStep::Checklist => render_checklist(f, chunks[1], screen, gender),
        BookingStep::Summary => render_summary(f, chunks[1], wizard, gender),
    }

    let button_style = if wizard.can_continue() {
        Styles::button_active(gender)
    } else {
        Styles::button_disabled()
    };
    let button = Paragraph::new(Line::from(Span::styled(
        format!(" {} ", wizard.continue_label()),
        button_style,
    )))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).border_style(Styles::border_inactive()));
    f.render_widget(button, chunks[2]);
}

/// `✓ Select Date & Time ── ● Home Checklist ── ○ Booking Summary`
fn step_indicator<'a>(wizard: &BookingWizard<'_>, gender: Gender) -> Paragraph<'a> {
    let mut spans = Vec::new();
    for (i, step) in BookingStep::all_steps().iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" ── ", Styles::nav_hint()));
        }
        let status = wizard.step_status(*step);
        let style = Theme::step_style(status, gender);
        spans.push(Span::styled(format!("{} ", Theme::step_icon(status)), style));
        spans.push(Span::styled(step.title(), style));
    }

    Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Styles::border_active(gender))
                .title(format!(
                    " {} · Step {} of {} ",
                    wizard.artist().name,
                    wizard.step().step_number(),
                    BookingStep::TOTAL_STEPS
                )),
        )
}

/// First date shown in a strip of `visible` cells so that `selected` stays on screen
fn strip_start(dates: &[NaiveDate], selected: NaiveDate, visible: usize) -> usize {
    let index = dates.iter().position(|d| *d == selected).unwrap_or(0);
    let visible = visible.max(1);
    if index < visible {
        0
    } else {
        (index + 1 - visible).min(dates.len().saturating_sub(visible))
    }
}

fn render_date_time(f: &mut Frame, area: Rect, screen: &WizardScreen, gender: Gender) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(3)])
        .split(area);

    let wizard = &screen.wizard;
    let dates = wizard.booking_dates();
    let selected = wizard.selected_date();
    let visible = usize::from(chunks[0].width.saturating_sub(2) / DATE_CELL_WIDTH);
    let start = strip_start(&dates, selected, visible);

    let mut weekdays = Vec::new();
    let mut days = Vec::new();
    for date in dates.iter().skip(start).take(visible.max(1)) {
        let style = if *date == selected {
            Styles::selected(gender)
        } else {
            Styles::text_secondary()
        };
        weekdays.push(Span::styled(format!(" {:^7} ", date.format("%a").to_string()), style));
        days.push(Span::styled(format!(" {:^7} ", date.format("%b %-d").to_string()), style));
    }
    let strip = Paragraph::new(vec![Line::from(weekdays), Line::from(days)]).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Date (←/→) ")
            .title_style(Styles::title(gender))
            .border_style(Styles::border_inactive()),
    );
    f.render_widget(strip, chunks[0]);

    let mut lines = Vec::new();
    for (row, slots) in wizard.time_slots().chunks(SLOTS_PER_ROW).enumerate() {
        let mut spans = Vec::new();
        for (col, slot) in slots.iter().enumerate() {
            let index = row * SLOTS_PER_ROW + col;
            let mut style = if wizard.selected_time() == Some(slot.label) {
                Styles::selected(gender)
            } else if !slot.available {
                Styles::strikethrough()
            } else {
                Styles::text()
            };
            if index == screen.slot_cursor.index {
                style = style.add_modifier(Modifier::UNDERLINED | Modifier::BOLD);
            }
            spans.push(Span::styled(format!(" {:^10} ", slot.label), style));
            spans.push(Span::raw("  "));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(
        "Crossed-out slots are already taken",
        Styles::text_muted(),
    )));

    let grid = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Time Slot (↑/↓, Space to pick) ")
            .title_style(Styles::title(gender))
            .border_style(Styles::border_inactive()),
    );
    f.render_widget(grid, chunks[1]);
}

fn render_checklist(f: &mut Frame, area: Rect, screen: &WizardScreen, gender: Gender) {
    let wizard = &screen.wizard;
    let items: Vec<ListItem> = wizard
        .checklist()
        .iter()
        .map(|item| {
            let checked = wizard.is_checked(item.id);
            let (mark, mark_style) = if checked {
                ("[x] ", Styles::success())
            } else {
                ("[ ] ", Styles::text_muted())
            };
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(mark, mark_style),
                    Span::styled(item.label, Styles::text_bold()),
                ]),
                Line::from(Span::styled(
                    format!("    {}", item.description),
                    Styles::text_secondary(),
                )),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(
                    " Prepare your space ({}/{} checked) ",
                    wizard.checked_count(),
                    wizard.checklist().len()
                ))
                .title_style(Styles::title(gender))
                .border_style(Styles::border_inactive()),
        )
        .highlight_style(Styles::highlight().add_modifier(Modifier::BOLD))
        .highlight_symbol(">> ");

    let mut list_state = ListState::default();
    list_state.select(Some(screen.check_cursor.index));
    f.render_stateful_widget(list, area, &mut list_state);
}

fn line_rows(lines: &[CartLine<'_>]) -> Vec<Line<'static>> {
    lines
        .iter()
        .map(|line| {
            Line::from(vec![
                Span::styled(
                    format!("  {:<28}", format!("{} × {}", line.service.name, line.quantity)),
                    Styles::text(),
                ),
                Span::styled(format!("{:>8}", format_rupees(line.amount())), Styles::text()),
            ])
        })
        .collect()
}

/// Label/amount rows of a price breakdown
fn breakdown_rows(breakdown: &PriceBreakdown) -> Vec<Line<'static>> {
    let row = |label: String, amount: u64, bold: bool| {
        let style = if bold { Styles::text_bold() } else { Styles::text_secondary() };
        Line::from(vec![
            Span::styled(format!("  {:<28}", label), style),
            Span::styled(format!("{:>8}", format_rupees(amount)), style),
        ])
    };
    vec![
        row("Subtotal".to_string(), breakdown.subtotal, false),
        row("Travel fee".to_string(), breakdown.travel_fee, false),
        row(format!("GST ({}%)", TAX_RATE_PERCENT), breakdown.tax, false),
        Line::from(Span::styled(format!("  {}", "─".repeat(36)), Styles::nav_hint())),
        row("Total".to_string(), breakdown.total, true),
    ]
}

fn render_summary(f: &mut Frame, area: Rect, wizard: &BookingWizard<'_>, gender: Gender) {
    let mut lines = vec![
        section_title(wizard.artist().name, gender),
        Line::from(vec![
            Span::styled("  Date  ", Styles::text_muted()),
            Span::styled(
                wizard.selected_date().format("%A, %b %-d").to_string(),
                Styles::text(),
            ),
        ]),
        Line::from(vec![
            Span::styled("  Time  ", Styles::text_muted()),
            Span::styled(wizard.selected_time().unwrap_or("-"), Styles::text()),
        ]),
        Line::from(""),
        section_title("Services", gender),
    ];
    lines.extend(line_rows(&wizard.lines()));
    lines.push(Line::from(""));
    lines.extend(breakdown_rows(&wizard.price_breakdown()));

    f.render_widget(
        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Booking Summary ")
                    .title_style(Styles::title(gender))
                    .border_style(Styles::border_inactive()),
            )
            .wrap(Wrap { trim: false }),
        area,
    );
}

fn render_confirmation(f: &mut Frame, area: Rect, confirmation: &Confirmation, gender: Gender) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "✓",
            Styles::success().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(UiText::AT_HOME_CONFIRMED, Styles::title(gender))),
        Line::from(""),
        Line::from(Span::styled(confirmation.recap(), Styles::text())),
        Line::from(Span::styled(
            format!("Total {}", format_rupees(confirmation.breakdown.total)),
            Styles::highlight(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Taking you to My Bookings...",
            Styles::text_muted(),
        )),
    ];
    f.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Styles::success()),
        ),
        area,
    );
}

/// Render the salon booking recap
pub fn render_salon_booking(
    f: &mut Frame,
    area: Rect,
    screen: &SalonBookingScreen,
    gender: Gender,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(6),
            Constraint::Length(UiConstants::ACTION_BAR_HEIGHT),
        ])
        .split(area);

    let salon = screen.salon;
    let mut lines = vec![
        section_title(salon.name, gender),
        Line::from(Span::styled(
            format!("  {} · {}", salon.address, salon.distance),
            Styles::text_secondary(),
        )),
        Line::from(""),
    ];
    if screen.cart.is_empty() {
        lines.push(Line::from(Span::styled(
            "  No services selected",
            Styles::text_muted(),
        )));
    } else {
        lines.extend(line_rows(&screen.cart.lines()));
        lines.push(Line::from(Span::styled(
            format!("  {}", "─".repeat(36)),
            Styles::nav_hint(),
        )));
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<28}", "Total"), Styles::text_bold()),
            Span::styled(
                format!("{:>8}", format_rupees(screen.cart.total())),
                Styles::text_bold(),
            ),
        ]));
    }

    f.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Your Appointment ")
                .title_style(Styles::title(gender))
                .border_style(Styles::border_inactive()),
        ),
        chunks[0],
    );

    let action = if screen.confirmed {
        Span::styled(
            format!("✓ {} Taking you to My Bookings...", UiText::SALON_CONFIRMED),
            Styles::success(),
        )
    } else if screen.cart.is_empty() {
        Span::styled(" Confirm Booking ", Styles::button_disabled())
    } else {
        Span::styled(
            format!(
                " [Enter] Confirm Booking • {} ",
                format_rupees(screen.cart.total())
            ),
            Styles::button_active(gender),
        )
    };
    f.render_widget(
        Paragraph::new(Line::from(action))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).border_style(Styles::border_inactive())),
        chunks[1],
    );
}
