// ABOUTME: Breadcrumb-style step indicator; completed steps are clickable, future steps disabled

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::config::Theme;
use crate::models::Step;

const SEPARATOR: &str = " › ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepVisualState {
    Completed,
    Active,
    Future,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndicatorItem {
    pub step: Step,
    pub state: StepVisualState,
}

impl IndicatorItem {
    pub fn clickable(&self) -> bool {
        self.state == StepVisualState::Completed
    }
}

/// Visual state of every step, purely a function of the current step
pub fn indicator_items(current: Step) -> [IndicatorItem; 3] {
    Step::ALL.map(|step| IndicatorItem {
        step,
        state: match step.cmp(&current) {
            std::cmp::Ordering::Less => StepVisualState::Completed,
            std::cmp::Ordering::Equal => StepVisualState::Active,
            std::cmp::Ordering::Greater => StepVisualState::Future,
        },
    })
}

pub struct StepIndicatorComponent {
    /// Screen areas of clickable labels from the last render
    hit_areas: Vec<(Step, Rect)>,
}

impl StepIndicatorComponent {
    pub fn new() -> Self {
        Self {
            hit_areas: Vec::new(),
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, current: Step, theme: &Theme) {
        self.hit_areas.clear();

        let mut spans = Vec::new();
        let mut x = area.x;
        let items = indicator_items(current);

        for (idx, item) in items.iter().enumerate() {
            let label = item.step.title();
            let style = match item.state {
                StepVisualState::Completed => Style::default()
                    .fg(theme.text_secondary)
                    .add_modifier(Modifier::UNDERLINED),
                StepVisualState::Active => {
                    Style::default().fg(theme.primary).add_modifier(Modifier::BOLD)
                }
                StepVisualState::Future => Style::default().fg(theme.text_disabled),
            };

            let width = u16::try_from(label.chars().count()).unwrap_or(u16::MAX);
            if item.clickable() {
                self.hit_areas.push((
                    item.step,
                    Rect {
                        x,
                        y: area.y,
                        width: width.min(area.right().saturating_sub(x)),
                        height: 1,
                    },
                ));
            }
            spans.push(Span::styled(label, style));
            x = x.saturating_add(width);

            if idx < items.len() - 1 {
                spans.push(Span::styled(SEPARATOR, theme.muted()));
                x = x.saturating_add(3);
            }
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    /// Completed step whose label contains the given cell, if any
    pub fn step_at(&self, column: u16, row: u16) -> Option<Step> {
        self.hit_areas
            .iter()
            .find(|(_, rect)| {
                column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
            })
            .map(|(step, _)| *step)
    }
}

impl Default for StepIndicatorComponent {
    fn default() -> Self {
        Self::new()
    }
}
