//! TUI rendering
//!
//! Probar: Visual feedback makes state visible

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
    Frame,
};

use super::app::UnitPriceApp;
use super::keypad::KeypadWidget;
use crate::core::{FieldId, FieldKind, Slot, ViewModel};

/// Width reserved for the field labels inside a product card
const LABEL_WIDTH: u16 = 8;

/// Renders the comparator UI to the frame
pub fn render(app: &UnitPriceApp, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(UnitPriceUI::new(app), area);
}

/// Screen regions, shared by rendering and mouse hit-testing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Product cards, A then B
    pub cards: [(Slot, Rect); 2],
    /// Verdict banner
    pub banner: Rect,
    /// Keypad
    pub keypad: Rect,
    /// Help sidebar
    pub help: Rect,
}

impl ScreenLayout {
    /// Splits the full terminal area
    #[must_use]
    pub fn new(area: Rect) -> Self {
        let h_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .margin(1)
            .constraints([
                Constraint::Min(30),    // Product cards + banner
                Constraint::Length(26), // Keypad
                Constraint::Length(20), // Help sidebar
            ])
            .split(area);

        let v_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // Product A
                Constraint::Length(5), // Product B
                Constraint::Length(3), // Banner
                Constraint::Min(0),
            ])
            .split(h_chunks[0]);

        let keypad = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(10), Constraint::Min(0)])
            .split(h_chunks[1])[0];

        Self {
            cards: [(Slot::A, v_chunks[0]), (Slot::B, v_chunks[1])],
            banner: v_chunks[2],
            keypad,
            help: h_chunks[2],
        }
    }

    /// Card area of a product
    #[must_use]
    pub fn card(&self, slot: Slot) -> Rect {
        match slot {
            Slot::A => self.cards[0].1,
            Slot::B => self.cards[1].1,
        }
    }

    /// Row of a field inside its card
    #[must_use]
    pub fn field_row(&self, id: FieldId) -> u16 {
        let card = self.card(id.slot);
        match id.field {
            FieldKind::Price => card.y + 1,
            FieldKind::Amount => card.y + 2,
        }
    }

    /// Field under a mouse position
    #[must_use]
    pub fn field_at(&self, x: u16, y: u16) -> Option<FieldId> {
        self.cards.iter().find_map(|&(slot, card)| {
            if x <= card.x || x + 1 >= card.x + card.width {
                return None;
            }
            FieldKind::ALL
                .iter()
                .map(|&field| FieldId::new(slot, field))
                .find(|&id| self.field_row(id) == y)
        })
    }
}

/// Comparator UI widget
#[derive(Debug)]
pub struct UnitPriceUI<'a> {
    app: &'a UnitPriceApp,
    view: ViewModel,
}

impl<'a> UnitPriceUI<'a> {
    /// Creates a new comparator UI widget
    #[must_use]
    pub fn new(app: &'a UnitPriceApp) -> Self {
        Self {
            app,
            view: app.view(),
        }
    }

    fn render_card(&self, slot: Slot, area: Rect, buf: &mut Buffer) {
        let Some(card) = self.view.slot(slot) else {
            return;
        };

        let (title, border) = if card.winner {
            (
                format!(" Product {} ✓ ", slot.label()),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            (
                format!(" Product {} ", slot.label()),
                Style::default().fg(Color::DarkGray),
            )
        };

        let mut lines: Vec<Line> = FieldKind::ALL
            .iter()
            .filter_map(|&field| self.view.field(FieldId::new(slot, field)))
            .map(|field| {
                let value_style = if field.active {
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };
                Line::from(vec![
                    Span::styled(
                        format!("{:<width$}", field.id.field.label(), width = LABEL_WIDTH as usize),
                        Style::default().fg(Color::Gray),
                    ),
                    Span::styled(field.text.clone(), value_style),
                ])
            })
            .collect();
        lines.push(Line::from(Span::styled(
            card.unit_price.clone(),
            Style::default().fg(Color::Cyan),
        )));

        Paragraph::new(lines)
            .block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_style(border),
            )
            .render(area, buf);
    }

    fn render_banner(&self, area: Rect, buf: &mut Buffer) {
        let style = if self.view.neutral {
            Style::default().fg(Color::Gray)
        } else {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD)
        };

        Paragraph::new(Span::styled(self.view.message.clone(), style))
            .block(
                Block::default()
                    .title(" Result ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            )
            .render(area, buf);
    }

    fn render_help_sidebar(area: Rect, buf: &mut Buffer) {
        let shortcuts: Vec<ListItem> = HELP_SHORTCUTS
            .iter()
            .map(|(key, desc)| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{key:>5}"), Style::default().fg(Color::Yellow)),
                    Span::raw(" "),
                    Span::styled(*desc, Style::default().fg(Color::Gray)),
                ]))
            })
            .collect();

        List::new(shortcuts)
            .block(
                Block::default()
                    .title(" Help ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .render(area, buf);
    }
}

impl Widget for UnitPriceUI<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(TITLE)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .render(area, buf);

        let layout = ScreenLayout::new(area);
        for (slot, card) in layout.cards {
            self.render_card(slot, card, buf);
        }
        self.render_banner(layout.banner, buf);
        KeypadWidget::new(self.app.keypad()).render(layout.keypad, buf);
        Self::render_help_sidebar(layout.help, buf);
    }
}

/// Title drawn on the outer border
pub const TITLE: &str = " Unit Price Comparator ";

/// Keyboard shortcuts shown in the sidebar
pub const HELP_SHORTCUTS: &[(&str, &str)] = &[
    ("0-9", "Digits"),
    (".", "Point"),
    ("z", "Double zero"),
    ("Esc", "AC"),
    ("Bksp", "BS"),
    ("Tab", "Next field"),
    ("S-Tab", "Prev field"),
    ("Mouse", "Tap/press"),
    ("q", "Quit"),
];
