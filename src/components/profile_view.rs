// ABOUTME: Read-only profile view: maps a profile to display sections, then to styled lines
// Sections are produced by a fixed table of (predicate, render) pairs in display order

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::config::Theme;
use crate::models::Profile;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    PersonalInfo,
    WorkExperience,
    Education,
    Skills,
    Projects,
    AboutMe,
    Certifications,
}

impl SectionKind {
    pub const fn title(self) -> &'static str {
        match self {
            Self::PersonalInfo => "Personal Information",
            Self::WorkExperience => "Work Experience",
            Self::Education => "Education",
            Self::Skills => "Skills",
            Self::Projects => "Projects",
            Self::AboutMe => "About Me",
            Self::Certifications => "Certifications",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionBlock {
    /// `label: value` line
    Field { label: &'static str, value: String },
    /// Bold heading with secondary lines and optional tags
    Entry {
        heading: String,
        lines: Vec<String>,
        tags: Vec<String>,
    },
    /// Divider between consecutive entries
    Separator,
    Tags(Vec<String>),
    Text(String),
    Item(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileSection {
    pub kind: SectionKind,
    pub blocks: Vec<SectionBlock>,
}

type Predicate = fn(&Profile) -> bool;
type Render = fn(&Profile) -> Vec<SectionBlock>;

const SECTIONS: [(SectionKind, Predicate, Render); 7] = [
    (SectionKind::PersonalInfo, |p| p.personal_info.is_some(), personal_info_blocks),
    (SectionKind::WorkExperience, |p| !p.work_experience.is_empty(), work_experience_blocks),
    (SectionKind::Education, |p| !p.education.is_empty(), education_blocks),
    (SectionKind::Skills, |p| !p.skills.is_empty(), |p| vec![SectionBlock::Tags(p.skills.clone())]),
    (SectionKind::Projects, |p| !p.projects.is_empty(), project_blocks),
    (SectionKind::AboutMe, |p| p.about_me().is_some(), about_me_blocks),
    (SectionKind::Certifications, |p| !p.certifications.is_empty(), certification_blocks),
];

/// One section per populated top-level field, in fixed display order.
/// Source ordering within each section is preserved.
pub fn render_sections(profile: &Profile) -> Vec<ProfileSection> {
    SECTIONS
        .iter()
        .filter(|(_, present, _)| present(profile))
        .map(|(kind, _, render)| ProfileSection {
            kind: *kind,
            blocks: render(profile),
        })
        .collect()
}

fn personal_info_blocks(profile: &Profile) -> Vec<SectionBlock> {
    profile
        .personal_info
        .iter()
        .flat_map(|info| info.present_fields())
        .map(|(label, value)| SectionBlock::Field {
            label,
            value: value.to_string(),
        })
        .collect()
}

fn work_experience_blocks(profile: &Profile) -> Vec<SectionBlock> {
    separated(profile.work_experience.iter().map(|exp| SectionBlock::Entry {
        heading: format!("{} at {}", exp.role, exp.company),
        lines: vec![exp.duration.clone(), exp.description.clone()],
        tags: Vec::new(),
    }))
}

fn education_blocks(profile: &Profile) -> Vec<SectionBlock> {
    profile
        .education
        .iter()
        .map(|edu| {
            let detail = match edu.year() {
                Some(year) => format!("{} • {}", edu.institution, year),
                None => edu.institution.clone(),
            };
            SectionBlock::Entry {
                heading: edu.degree.clone(),
                lines: vec![detail],
                tags: Vec::new(),
            }
        })
        .collect()
}

fn project_blocks(profile: &Profile) -> Vec<SectionBlock> {
    separated(profile.projects.iter().map(|project| SectionBlock::Entry {
        heading: project.name.clone(),
        lines: vec![project.description.clone()],
        tags: project.technologies.clone(),
    }))
}

fn about_me_blocks(profile: &Profile) -> Vec<SectionBlock> {
    profile
        .about_me()
        .map(|text| SectionBlock::Text(text.to_string()))
        .into_iter()
        .collect()
}

fn certification_blocks(profile: &Profile) -> Vec<SectionBlock> {
    profile
        .certifications
        .iter()
        .map(|cert| SectionBlock::Item(cert.clone()))
        .collect()
}

/// Interleave a separator between consecutive entries, none after the last
fn separated(entries: impl Iterator<Item = SectionBlock>) -> Vec<SectionBlock> {
    let mut blocks = Vec::new();
    for entry in entries {
        if !blocks.is_empty() {
            blocks.push(SectionBlock::Separator);
        }
        blocks.push(entry);
    }
    blocks
}

/// Styled lines for the TUI, `width` bounds separator length
pub fn section_lines(sections: &[ProfileSection], theme: &Theme, width: u16) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let rule = "─".repeat(usize::from(width.saturating_sub(4)).max(4));

    for (idx, section) in sections.iter().enumerate() {
        if idx > 0 {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(Span::styled(section.kind.title(), theme.heading())));

        for block in &section.blocks {
            match block {
                SectionBlock::Field { label, value } => lines.push(Line::from(vec![
                    Span::styled(format!("  {label}: "), theme.body().add_modifier(Modifier::BOLD)),
                    Span::styled(value.clone(), theme.body()),
                ])),
                SectionBlock::Entry {
                    heading,
                    lines: detail,
                    tags,
                } => {
                    lines.push(Line::from(Span::styled(
                        format!("  {heading}"),
                        theme.body().add_modifier(Modifier::BOLD),
                    )));
                    for text in detail {
                        lines.push(Line::from(Span::styled(format!("    {text}"), theme.muted())));
                    }
                    if !tags.is_empty() {
                        lines.push(tag_line(tags, Style::default().fg(theme.secondary), "    "));
                    }
                }
                SectionBlock::Separator => {
                    lines.push(Line::from(Span::styled(format!("  {rule}"), theme.border())));
                }
                SectionBlock::Tags(tags) => {
                    lines.push(tag_line(tags, Style::default().fg(theme.primary), "  "));
                }
                SectionBlock::Text(text) => {
                    lines.push(Line::from(Span::styled(format!("  {text}"), theme.body())));
                }
                SectionBlock::Item(item) => {
                    lines.push(Line::from(vec![
                        Span::styled("  • ", Style::default().fg(theme.primary)),
                        Span::styled(item.clone(), theme.body()),
                    ]));
                }
            }
        }
    }

    lines
}

fn tag_line(tags: &[String], style: Style, indent: &'static str) -> Line<'static> {
    let mut spans = vec![Span::raw(indent)];
    for tag in tags {
        spans.push(Span::styled(format!("[{tag}]"), style));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

/// Plain-text rendering for non-interactive output
pub fn sections_to_text(sections: &[ProfileSection]) -> String {
    let mut out = String::new();

    for (idx, section) in sections.iter().enumerate() {
        if idx > 0 {
            out.push('\n');
        }
        out.push_str(section.kind.title());
        out.push('\n');

        for block in &section.blocks {
            match block {
                SectionBlock::Field { label, value } => {
                    out.push_str(&format!("  {label}: {value}\n"));
                }
                SectionBlock::Entry { heading, lines, tags } => {
                    out.push_str(&format!("  {heading}\n"));
                    for line in lines {
                        out.push_str(&format!("    {line}\n"));
                    }
                    if !tags.is_empty() {
                        out.push_str(&format!("    [{}]\n", tags.join(", ")));
                    }
                }
                SectionBlock::Separator => out.push_str("  ---\n"),
                SectionBlock::Tags(tags) => out.push_str(&format!("  {}\n", tags.join(", "))),
                SectionBlock::Text(text) => out.push_str(&format!("  {text}\n")),
                SectionBlock::Item(item) => out.push_str(&format!("  - {item}\n")),
            }
        }
    }

    out
}
