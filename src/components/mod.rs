// ABOUTME: UI components for the wizard: step indicator, step views, profile view, and help

pub mod download_step;
pub mod help;
pub mod job_description_step;
pub mod layout;
pub mod profile_step;
pub mod profile_view;
pub mod step_indicator;

pub use download_step::DownloadStepComponent;
pub use help::HelpComponent;
pub use job_description_step::JobDescriptionStepComponent;
pub use layout::LayoutComponent;
pub use profile_step::ProfileStepComponent;
pub use profile_view::{render_sections, sections_to_text, ProfileSection, SectionBlock, SectionKind};
pub use step_indicator::{indicator_items, IndicatorItem, StepIndicatorComponent, StepVisualState};

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use crate::config::Theme;

/// Rounded paper panel with a bold title, shared by every step view
pub(crate) fn panel_block<'a>(theme: &Theme, title: &'a str) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.border())
        .style(theme.panel())
        .title(title)
        .title_style(theme.title())
}

/// Bordered single-message alert in the given accent color
pub(crate) fn banner<'a>(message: &'a str, accent: Color, theme: &Theme) -> Paragraph<'a> {
    Paragraph::new(Span::styled(message, theme.body()))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(accent)),
        )
}

/// Empty content area holding a "will be implemented here" notice
pub(crate) fn placeholder_box<'a>(message: &'a str, theme: &Theme) -> Paragraph<'a> {
    Paragraph::new(Span::styled(message, theme.muted()))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(theme.border()),
        )
}

/// `[key]` span in the accent style used by footers and action rows
pub(crate) fn key_hint(key: &str, theme: &Theme) -> Span<'static> {
    Span::styled(
        format!("[{key}]"),
        Style::default().fg(theme.primary).add_modifier(Modifier::BOLD),
    )
}
