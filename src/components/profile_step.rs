// ABOUTME: Step 1 view: loading spinner, existing profile display, or the document upload skeleton

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use super::profile_view::{render_sections, section_lines};
use super::{banner, key_hint, panel_block, placeholder_box};
use crate::app::{ProfileStatus, ProfileStepState};
use crate::config::Theme;
use crate::models::Profile;

const SPINNER: [&str; 4] = ["◐", "◓", "◑", "◒"];

pub struct ProfileStepComponent;

impl ProfileStepComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        state: &ProfileStepState,
        theme: &Theme,
        spinner_frame: usize,
    ) {
        match state.status() {
            ProfileStatus::Loading => self.render_loading(frame, area, theme, spinner_frame),
            ProfileStatus::HasProfile => {
                if let Some(profile) = state.profile.as_ref() {
                    self.render_existing(frame, area, state, profile, theme);
                }
            }
            ProfileStatus::NoProfile | ProfileStatus::Updating => {
                self.render_upload(frame, area, state, theme);
            }
        }
    }

    fn render_loading(&self, frame: &mut Frame, area: Rect, theme: &Theme, spinner_frame: usize) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme.border())
            .style(theme.panel());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let spinner = SPINNER[spinner_frame % SPINNER.len()];
        let loading = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(spinner, Style::default().fg(theme.primary))),
            Line::from(""),
            Line::from(Span::styled("Checking for existing profile...", theme.muted())),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(loading, inner);
    }

    fn render_existing(
        &self,
        frame: &mut Frame,
        area: Rect,
        state: &ProfileStepState,
        profile: &Profile,
        theme: &Theme,
    ) {
        let block = panel_block(theme, " Step 1: User Profile ");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut constraints = vec![Constraint::Length(1)]; // Subtitle
        if state.error.is_some() {
            constraints.push(Constraint::Length(3));
        }
        constraints.push(Constraint::Length(3)); // Info banner
        constraints.push(Constraint::Min(3)); // Profile
        constraints.push(Constraint::Length(1)); // Actions

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(1)
            .constraints(constraints)
            .split(inner);
        let mut idx = 0;

        frame.render_widget(
            Paragraph::new(Span::styled("Your existing profile has been loaded", theme.muted())),
            chunks[idx],
        );
        idx += 1;

        if let Some(error) = &state.error {
            frame.render_widget(banner(error, theme.error, theme), chunks[idx]);
            idx += 1;
        }

        frame.render_widget(
            banner(
                "You have an existing profile. You can use it or update it with new documents.",
                theme.info,
                theme,
            ),
            chunks[idx],
        );
        idx += 1;

        let profile_area = chunks[idx];
        let lines = section_lines(&render_sections(profile), theme, profile_area.width);
        let max_scroll = u16::try_from(lines.len().saturating_sub(1)).unwrap_or(u16::MAX);
        let profile_view = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((state.scroll.min(max_scroll), 0));
        frame.render_widget(profile_view, profile_area);
        idx += 1;

        let actions = Line::from(vec![
            key_hint("u", theme),
            Span::styled(" Update Profile   ", theme.body()),
            key_hint("Enter", theme),
            Span::styled(
                " Use this Profile",
                Style::default().fg(theme.primary).add_modifier(Modifier::BOLD),
            ),
        ]);
        frame.render_widget(
            Paragraph::new(actions).alignment(Alignment::Right),
            chunks[idx],
        );
    }

    fn render_upload(&self, frame: &mut Frame, area: Rect, state: &ProfileStepState, theme: &Theme) {
        let block = panel_block(theme, " Step 1: User Profile ");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut constraints = vec![Constraint::Length(1)]; // Subtitle
        if state.error.is_some() {
            constraints.push(Constraint::Length(3));
        }
        if state.is_updating {
            constraints.push(Constraint::Length(3));
        }
        constraints.extend([
            Constraint::Length(2), // Upload heading + description
            Constraint::Length(3), // Upload area
            Constraint::Length(2), // Profile information heading + description
            Constraint::Min(3),    // Extracted profile area
            Constraint::Length(1), // Actions
        ]);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(1)
            .constraints(constraints)
            .split(inner);
        let mut idx = 0;

        let subtitle = if state.is_updating {
            "Upload new documents to update your profile"
        } else {
            "Upload your documents to build your profile"
        };
        frame.render_widget(Paragraph::new(Span::styled(subtitle, theme.muted())), chunks[idx]);
        idx += 1;

        if let Some(error) = &state.error {
            frame.render_widget(banner(error, theme.error, theme), chunks[idx]);
            idx += 1;
        }

        if state.is_updating {
            frame.render_widget(
                banner("Updating your profile will replace the existing one.", theme.info, theme),
                chunks[idx],
            );
            idx += 1;
        }

        frame.render_widget(
            Paragraph::new(vec![
                Line::from(Span::styled("Upload Documents", theme.heading())),
                Line::from(Span::styled(
                    "Upload your CV, project descriptions, and other relevant documents",
                    theme.muted(),
                )),
            ]),
            chunks[idx],
        );
        idx += 1;
        frame.render_widget(
            placeholder_box("Document upload area will be implemented here", theme),
            chunks[idx],
        );
        idx += 1;

        frame.render_widget(
            Paragraph::new(vec![
                Line::from(Span::styled("Profile Information", theme.heading())),
                Line::from(Span::styled(
                    "Your extracted profile information will appear here",
                    theme.muted(),
                )),
            ]),
            chunks[idx],
        );
        idx += 1;
        frame.render_widget(
            placeholder_box(
                "Profile information will be displayed here after extraction",
                theme,
            ),
            chunks[idx],
        );
        idx += 1;

        let mut actions = Vec::new();
        if state.is_updating {
            actions.push(key_hint("Esc", theme));
            actions.push(Span::styled(" Cancel   ", theme.body()));
        }
        let next_style = if state.next_enabled() {
            theme.body()
        } else {
            theme.disabled()
        };
        actions.push(Span::styled("[Enter]", next_style));
        actions.push(Span::styled(" Next: Job Description", next_style));
        frame.render_widget(
            Paragraph::new(Line::from(actions)).alignment(Alignment::Right),
            chunks[idx],
        );
    }
}

impl Default for ProfileStepComponent {
    fn default() -> Self {
        Self::new()
    }
}
