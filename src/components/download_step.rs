// ABOUTME: Step 3 view: placeholder for CV and cover letter download with a Back control

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::{key_hint, panel_block, placeholder_box};
use crate::config::Theme;

pub struct DownloadStepComponent;

impl DownloadStepComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let block = panel_block(theme, " Step 3: Download CV/Resume ");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(1)
            .constraints([
                Constraint::Length(2),
                Constraint::Min(3),
                Constraint::Length(1),
            ])
            .split(inner);

        frame.render_widget(
            Paragraph::new(Span::styled(
                "Download your personalized CV and cover letter",
                theme.muted(),
            )),
            chunks[0],
        );
        frame.render_widget(
            placeholder_box("Download interface will be implemented here", theme),
            chunks[1],
        );

        let actions = Line::from(vec![key_hint("←", theme), Span::styled(" Back", theme.body())]);
        frame.render_widget(Paragraph::new(actions).alignment(Alignment::Right), chunks[2]);
    }
}

impl Default for DownloadStepComponent {
    fn default() -> Self {
        Self::new()
    }
}
