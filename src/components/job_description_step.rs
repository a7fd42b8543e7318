// ABOUTME: Step 2 view: placeholder for job description input with Back/Next controls

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::{key_hint, panel_block, placeholder_box};
use crate::config::Theme;

pub struct JobDescriptionStepComponent;

impl JobDescriptionStepComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let block = panel_block(theme, " Step 2: Job Description ");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(1)
            .constraints([
                Constraint::Length(2), // Subtitle
                Constraint::Min(3),    // Input area
                Constraint::Length(1), // Actions
            ])
            .split(inner);

        frame.render_widget(
            Paragraph::new(Span::styled(
                "Enter the job description to personalize your application",
                theme.muted(),
            )),
            chunks[0],
        );
        frame.render_widget(
            placeholder_box("Job description input will be implemented here", theme),
            chunks[1],
        );

        let actions = Line::from(vec![
            key_hint("←", theme),
            Span::styled(" Back   ", theme.body()),
            key_hint("Enter", theme),
            Span::styled(" Next", theme.body()),
        ]);
        frame.render_widget(Paragraph::new(actions).alignment(Alignment::Right), chunks[2]);
    }
}

impl Default for JobDescriptionStepComponent {
    fn default() -> Self {
        Self::new()
    }
}
