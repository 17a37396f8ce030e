//! Centered modal dialog

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Horizontal padding inside the borders (both sides together)
const PADDING: u16 = 4;

pub struct DialogConfig<'a> {
    pub title: &'a str,
    pub accent: Color,
    /// Message content, may contain `\n`
    pub message: &'a str,
    /// Hint line shown under the message
    pub hint: Vec<Span<'a>>,
    pub max_width: u16,
}

/// Render a dialog centered on the whole frame
pub fn render_dialog(frame: &mut Frame, config: DialogConfig) {
    let (dialog_area, wrapped) = layout(frame.area(), &config);

    let mut content = vec![
        Line::from(Span::styled(
            config.title,
            Style::default()
                .fg(config.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    content.extend(wrapped.into_iter().map(Line::from));
    content.push(Line::from(""));
    content.push(Line::from(config.hint));

    let dialog = Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(config.accent)),
        )
        .style(Style::default().bg(Color::Black));

    frame.render_widget(Clear, dialog_area);
    frame.render_widget(dialog, dialog_area);
}

/// Centered dialog rectangle inside `area` and the wrapped message lines
fn layout(area: Rect, config: &DialogConfig) -> (Rect, Vec<String>) {
    let max_width = config.max_width.min(area.width).max(PADDING + 3);
    let wrapped = wrap_text(config.message, usize::from(max_width - PADDING - 2));

    let content_width = wrapped
        .iter()
        .map(|l| l.chars().count())
        .chain([config.title.chars().count()])
        .max()
        .unwrap_or(0) as u16;
    // never wider than the frame, however narrow
    let width = (content_width + PADDING + 2)
        .min(max_width)
        .min(area.width);

    // title + blank + message + blank + hint, plus borders
    let height = (wrapped.len() as u16 + 4 + 2).min(area.height);

    let dialog_area = Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    };
    (dialog_area, wrapped)
}

/// Greedy word wrap; words longer than a line are split
pub(super) fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let max_width = max_width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            let mut word: Vec<char> = word.chars().collect();
            while word.len() > max_width {
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                }
                lines.push(word.drain(..max_width).collect());
            }
            let word: String = word.into_iter().collect();

            let needed = current.chars().count() + word.chars().count() + 1;
            if needed > max_width && !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(&word);
        }
        lines.push(current);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use ratatui::{backend::TestBackend, Terminal};

    fn config() -> DialogConfig<'static> {
        DialogConfig {
            title: "Error",
            accent: Color::Red,
            message: "employee 4 not found",
            hint: vec![Span::raw("Enter")],
            max_width: 60,
        }
    }

    #[test]
    fn test_dialog_stays_inside_tiny_frames() {
        for (width, height) in [(1, 1), (3, 2), (6, 3), (7, 4)] {
            let area = Rect::new(0, 0, width, height);
            let (dialog, _) = layout(area, &config());
            assert!(dialog.right() <= area.right(), "{width}x{height}: {dialog:?}");
            assert!(dialog.bottom() <= area.bottom(), "{width}x{height}: {dialog:?}");

            let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
            terminal.draw(|frame| render_dialog(frame, config())).unwrap();
        }
    }

    #[test]
    fn test_dialog_is_centered() {
        let (dialog, wrapped) = layout(Rect::new(0, 0, 80, 24), &config());
        assert_eq!(wrapped, vec!["employee 4 not found"]);
        assert_eq!(dialog, Rect::new(27, 8, 26, 7));
    }

    #[test]
    fn test_wrap_text_breaks_on_words() {
        assert_eq!(
            wrap_text("employee 4 not found", 10),
            vec!["employee 4", "not found"]
        );
    }

    #[test]
    fn test_wrap_text_keeps_blank_lines() {
        assert_eq!(wrap_text("a\n\nb", 10), vec!["a", "", "b"]);
    }

    #[test]
    fn test_wrap_text_splits_long_words() {
        assert_eq!(
            wrap_text("http://localhost:3000/employees", 12),
            vec!["http://local", "host:3000/em", "ployees"]
        );
    }
}
