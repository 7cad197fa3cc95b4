//! On-screen keypad for the TUI comparator
//!
//! Probar: Visual feedback - Visual buttons make the last key press obvious
//!
//! The keypad can be:
//! - Clicked with the mouse (TUI mouse events)
//! - Highlighted when the corresponding key is pressed on the keyboard

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Paragraph, Widget},
};

use crate::core::Key;

/// A single keypad button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// The key this button sends
    pub key: Key,
    /// Whether the button is currently highlighted
    pub pressed: bool,
}

impl KeypadButton {
    /// Creates a released button for `key`
    #[must_use]
    pub const fn new(key: Key) -> Self {
        Self {
            key,
            pressed: false,
        }
    }

    /// Label drawn on the button
    #[must_use]
    pub fn label(&self) -> &'static str {
        self.key.symbol()
    }

    /// Sets the pressed state
    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }
}

/// The keypad layout - a 4x4 grid with the last cell empty
/// ```text
/// [ 7 ] [ 8 ] [ 9 ] [ AC ]
/// [ 4 ] [ 5 ] [ 6 ] [ BS ]
/// [ 1 ] [ 2 ] [ 3 ] [NEXT]
/// [ 0 ] [00 ] [ . ]
/// ```
#[derive(Debug, Clone)]
pub struct Keypad {
    /// Buttons in row-major order
    buttons: Vec<KeypadButton>,
    cols: usize,
    rows: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard comparator keypad
    #[must_use]
    pub fn new() -> Self {
        let keys = [
            // Row 1: 7 8 9 AC
            Key::Digit(7),
            Key::Digit(8),
            Key::Digit(9),
            Key::Clear,
            // Row 2: 4 5 6 BS
            Key::Digit(4),
            Key::Digit(5),
            Key::Digit(6),
            Key::Backspace,
            // Row 3: 1 2 3 NEXT
            Key::Digit(1),
            Key::Digit(2),
            Key::Digit(3),
            Key::Next,
            // Row 4: 0 00 .
            Key::Digit(0),
            Key::DoubleZero,
            Key::Point,
        ];

        Self {
            buttons: keys.into_iter().map(KeypadButton::new).collect(),
            cols: 4,
            rows: 4,
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Gets a button by index
    #[must_use]
    pub fn get_button(&self, index: usize) -> Option<&KeypadButton> {
        self.buttons.get(index)
    }

    /// Gets a button by row and column
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        if row < self.rows && col < self.cols {
            self.buttons.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Finds the button that sends `key`
    #[must_use]
    pub fn find_button(&self, key: Key) -> Option<usize> {
        self.buttons.iter().position(|b| b.key == key)
    }

    /// Releases all buttons
    pub fn release_all(&mut self) {
        for btn in &mut self.buttons {
            btn.set_pressed(false);
        }
    }

    /// Highlights only the button for `key`
    pub fn highlight(&mut self, key: Key) {
        self.release_all();
        if let Some(btn) = self
            .find_button(key)
            .and_then(|idx| self.buttons.get_mut(idx))
        {
            btn.set_pressed(true);
        }
    }

    /// Returns the highlighted key, if any
    #[must_use]
    pub fn highlighted(&self) -> Option<Key> {
        self.buttons.iter().find(|b| b.pressed).map(|b| b.key)
    }

    /// Screen cell of every button, in row-major order
    ///
    /// `area` includes the border. Rendering and mouse hit-testing both use
    /// this, so a click always lands on the button that was drawn there.
    pub fn cells(&self, area: Rect) -> impl Iterator<Item = (Rect, &KeypadButton)> {
        let inner = Block::bordered().inner(area);
        let rows = Layout::vertical(ratios(self.rows)).split(inner);
        let grid: Vec<Rect> = rows
            .iter()
            .flat_map(|row| Layout::horizontal(ratios(self.cols)).split(*row).to_vec())
            .collect();
        grid.into_iter().zip(&self.buttons)
    }

    /// Converts a click position inside the bordered `area` to a key
    #[must_use]
    pub fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<Key> {
        let target = Position::new(x, y);
        self.cells(area)
            .find(|(cell, _)| cell.contains(target))
            .map(|(_, btn)| btn.key)
    }
}

fn ratios(n: usize) -> Vec<Constraint> {
    let n = u32::try_from(n).unwrap_or(1).max(1);
    (0..n).map(|_| Constraint::Ratio(1, n)).collect()
}

/// Keypad widget for rendering
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a new keypad widget
    #[must_use]
    pub fn new(keypad: &'a Keypad) -> Self {
        Self { keypad }
    }
}

fn button_style(btn: &KeypadButton) -> Style {
    if btn.pressed {
        return Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD);
    }
    match btn.key {
        Key::Digit(_) | Key::DoubleZero | Key::Point => Style::default().fg(Color::White),
        Key::Clear => Style::default().fg(Color::Red),
        Key::Backspace => Style::default().fg(Color::Yellow),
        Key::Next => Style::default().fg(Color::Green),
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title(" Keypad ")
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width < MIN_INNER || inner.height < MIN_INNER {
            return;
        }

        for (cell, btn) in self.keypad.cells(area) {
            let label = if cell.width >= 6 {
                format!("[{}]", btn.label())
            } else {
                btn.label().to_string()
            };
            let line = Rect {
                y: cell.y + cell.height / 2,
                height: 1,
                ..cell
            };
            Paragraph::new(Span::styled(label, button_style(btn)))
                .alignment(Alignment::Center)
                .render(line, buf);
        }
    }
}

/// Smallest inner width/height that still fits one character per button
const MIN_INNER: u16 = 4;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    // ===== KeypadButton tests =====

    #[test]
    fn test_button_new_is_released() {
        let btn = KeypadButton::new(Key::Digit(4));
        assert!(!btn.pressed);
        assert_eq!(btn.label(), "4");
    }

    #[test]
    fn test_button_labels() {
        assert_eq!(KeypadButton::new(Key::DoubleZero).label(), "00");
        assert_eq!(KeypadButton::new(Key::Clear).label(), "AC");
        assert_eq!(KeypadButton::new(Key::Next).label(), "NEXT");
    }

    #[test]
    fn test_button_pressed_state() {
        let mut btn = KeypadButton::new(Key::Point);
        btn.set_pressed(true);
        assert!(btn.pressed);
        btn.set_pressed(false);
        assert!(!btn.pressed);
    }

    // ===== Keypad tests =====

    #[test]
    fn test_keypad_has_every_key() {
        let keypad = Keypad::new();
        assert_eq!(keypad.button_count(), Key::ALL.len());
        for key in Key::ALL {
            assert!(keypad.find_button(key).is_some(), "missing {key}");
        }
    }

    #[test]
    fn test_keypad_dimensions() {
        assert_eq!(Keypad::default().dimensions(), (4, 4));
    }

    #[test]
    fn test_keypad_rows() {
        let keypad = Keypad::new();
        let row = |r: usize| -> Vec<&str> {
            (0..4)
                .filter_map(|c| keypad.get_button_at(r, c))
                .map(KeypadButton::label)
                .collect()
        };
        assert_eq!(row(0), vec!["7", "8", "9", "AC"]);
        assert_eq!(row(1), vec!["4", "5", "6", "BS"]);
        assert_eq!(row(2), vec!["1", "2", "3", "NEXT"]);
        assert_eq!(row(3), vec!["0", "00", "."]);
    }

    #[test]
    fn test_keypad_empty_cell() {
        let keypad = Keypad::new();
        assert!(keypad.get_button_at(3, 3).is_none());
        assert!(keypad.get_button_at(4, 0).is_none());
        assert!(keypad.get_button(15).is_none());
    }

    #[test]
    fn test_keypad_highlight() {
        let mut keypad = Keypad::new();
        keypad.highlight(Key::Digit(5));
        assert_eq!(keypad.highlighted(), Some(Key::Digit(5)));
        keypad.highlight(Key::Clear);
        assert_eq!(keypad.highlighted(), Some(Key::Clear));
        keypad.release_all();
        assert!(keypad.highlighted().is_none());
    }

    // ===== hit_test tests =====

    #[test]
    fn test_keypad_hit_test_inside() {
        let keypad = Keypad::new();
        // inner 20x8, buttons 5x2
        let area = Rect::new(0, 0, 22, 10);
        assert_eq!(keypad.hit_test(area, 1, 1), Some(Key::Digit(7)));
        assert_eq!(keypad.hit_test(area, 16, 1), Some(Key::Clear));
        assert_eq!(keypad.hit_test(area, 16, 5), Some(Key::Next));
        assert_eq!(keypad.hit_test(area, 6, 7), Some(Key::DoubleZero));
    }

    #[test]
    fn test_cells_follow_grid() {
        let keypad = Keypad::new();
        let cells: Vec<(Rect, Key)> = keypad
            .cells(Rect::new(0, 0, 22, 10))
            .map(|(r, b)| (r, b.key))
            .collect();
        assert_eq!(cells.len(), 15);
        assert_eq!(cells[0], (Rect::new(1, 1, 5, 2), Key::Digit(7)));
        assert_eq!(cells[14], (Rect::new(11, 7, 5, 2), Key::Point));
    }

    #[test]
    fn test_keypad_hit_test_empty_cell() {
        let keypad = Keypad::new();
        let area = Rect::new(0, 0, 22, 10);
        assert!(keypad.hit_test(area, 16, 7).is_none());
    }

    #[test]
    fn test_keypad_hit_test_outside_and_border() {
        let keypad = Keypad::new();
        let area = Rect::new(10, 10, 22, 10);
        assert!(keypad.hit_test(area, 0, 0).is_none());
        assert!(keypad.hit_test(area, 100, 100).is_none());
        assert!(keypad.hit_test(area, 10, 10).is_none());
    }

    // ===== Widget tests =====

    #[test]
    fn test_keypad_widget_render() {
        let keypad = Keypad::new();
        let area = Rect::new(0, 0, 26, 10);
        let mut buf = Buffer::empty(area);
        KeypadWidget::new(&keypad).render(area, &mut buf);
        let content: String = buf.content().iter().map(|c| c.symbol()).collect();
        assert!(content.contains("Keypad"));
        assert!(content.contains("AC"));
        assert!(content.contains("NEXT"));
        assert!(content.contains("00"));
    }

    #[test]
    fn test_keypad_widget_too_small() {
        let keypad = Keypad::new();
        let area = Rect::new(0, 0, 4, 4);
        let mut buf = Buffer::empty(area);
        KeypadWidget::new(&keypad).render(area, &mut buf);
        let content: String = buf.content().iter().map(|c| c.symbol()).collect();
        assert!(!content.contains("NEXT"));
    }
}
