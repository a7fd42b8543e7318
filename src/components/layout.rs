// ABOUTME: Main layout component composing the step indicator, active step view, and key hint bar

use ratatui::{
    prelude::*,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::{
    key_hint, DownloadStepComponent, HelpComponent, JobDescriptionStepComponent,
    ProfileStepComponent, StepIndicatorComponent,
};
use crate::app::{AppState, ProfileStatus};
use crate::models::Step;

pub struct LayoutComponent {
    step_indicator: StepIndicatorComponent,
    profile_step: ProfileStepComponent,
    job_description_step: JobDescriptionStepComponent,
    download_step: DownloadStepComponent,
    help: HelpComponent,
}

impl LayoutComponent {
    pub fn new() -> Self {
        Self {
            step_indicator: StepIndicatorComponent::new(),
            profile_step: ProfileStepComponent::new(),
            job_description_step: JobDescriptionStepComponent::new(),
            download_step: DownloadStepComponent::new(),
            help: HelpComponent::new(),
        }
    }

    pub fn render(&mut self, frame: &mut Frame, state: &AppState) {
        let theme = &state.theme;
        let area = frame.size();

        frame.render_widget(Block::default().style(Style::default().bg(theme.background)), area);

        let main_layout = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(2), // Step indicator
                Constraint::Min(0),    // Active step
                Constraint::Length(2), // Bottom key hints
            ])
            .split(area);

        let indicator_area = Rect {
            height: 1,
            ..main_layout[0]
        };
        self.step_indicator
            .render(frame, indicator_area, state.current_step(), theme);

        match state.current_step() {
            Step::Profile => self.profile_step.render(
                frame,
                main_layout[1],
                &state.profile_step,
                theme,
                state.spinner_frame,
            ),
            Step::JobDescription => self.job_description_step.render(frame, main_layout[1], theme),
            Step::Download => self.download_step.render(frame, main_layout[1], theme),
        }

        self.render_bottom_bar(frame, main_layout[2], state);

        if state.help_visible {
            self.help.render(frame, area, theme);
        }
    }

    /// Step the user clicked on, if the cell belongs to a completed step label
    pub fn step_at(&self, column: u16, row: u16) -> Option<Step> {
        self.step_indicator.step_at(column, row)
    }

    fn render_bottom_bar(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let theme = &state.theme;
        let mut spans = Vec::new();

        let step_hints: &[(&str, &str)] = match state.current_step() {
            Step::Profile => match state.profile_step.status() {
                ProfileStatus::Loading => &[],
                ProfileStatus::HasProfile => &[("Enter", "use"), ("u", "pdate"), ("j/k", "scroll")],
                ProfileStatus::Updating => &[("Esc", "cancel")],
                ProfileStatus::NoProfile => &[],
            },
            Step::JobDescription => &[("←", "back"), ("Enter", "next")],
            Step::Download => &[("←", "back")],
        };

        for (key, label) in step_hints
            .iter()
            .chain([("1-3", "jump"), ("?", "help"), ("q", "uit")].iter())
        {
            spans.push(key_hint(key, theme));
            spans.push(Span::styled(format!("{label} "), theme.muted()));
        }

        let bar = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(theme.border()),
        );
        frame.render_widget(bar, area);
    }
}

impl Default for LayoutComponent {
    fn default() -> Self {
        Self::new()
    }
}
