// ABOUTME: Help overlay component displaying keyboard shortcuts for each wizard step

use ratatui::{
    prelude::*,
    style::{Modifier, Style},
    widgets::{Block, Borders, Clear, List, ListItem},
};

use crate::config::Theme;

pub struct HelpComponent;

impl HelpComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let popup_area = self.centered_rect(60, 80, area);

        frame.render_widget(Clear, popup_area);

        let section = Style::default().fg(theme.primary).add_modifier(Modifier::BOLD);
        let help_items = vec![
            ListItem::new("Navigation:").style(section),
            ListItem::new("  1/2/3      Jump to a completed step"),
            ListItem::new("  click      Jump to a completed step"),
            ListItem::new("  Enter/→    Next"),
            ListItem::new("  ←/b        Back"),
            ListItem::new(""),
            ListItem::new("Profile:").style(section),
            ListItem::new("  Enter      Use this profile"),
            ListItem::new("  u          Update profile"),
            ListItem::new("  Esc/c      Cancel update"),
            ListItem::new("  j/k        Scroll profile"),
            ListItem::new(""),
            ListItem::new("General:").style(section),
            ListItem::new("  ?          Toggle this help"),
            ListItem::new("  q          Quit application"),
            ListItem::new("  Ctrl+C     Force quit"),
        ];

        let help_list = List::new(help_items).style(theme.body().bg(theme.paper)).block(
            Block::default()
                .title("Help - Press ? or Esc to close")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.primary)),
        );

        frame.render_widget(help_list, popup_area);
    }

    fn centered_rect(&self, percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }
}

impl Default for HelpComponent {
    fn default() -> Self {
        Self::new()
    }
}
