//! Authored page content.
//!
//! Two static tables ([`TECH_STACK_GROUPS`], [`PROJECTS`]) plus the profile
//! text. Nothing here changes at runtime.

mod profile;
mod projects;
mod tech_stack;

use std::collections::HashSet;

use pulldown_cmark::{html, Parser};
use serde::Serialize;

use crate::error::{PortfolioError, PortfolioResult};

pub use profile::{Education, Links, Profile, PROFILE};
pub use projects::{Project, PROJECTS};
pub use tech_stack::{Skill, TechStackGroup, TECH_STACK_GROUPS};

/// Borrowed view over every authored table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Portfolio {
    pub profile: &'static Profile,
    pub tech_stack: &'static [TechStackGroup],
    pub projects: &'static [Project],
}

impl Portfolio {
    /// The content shipped with the page
    pub fn authored() -> Self {
        Self {
            profile: &PROFILE,
            tech_stack: TECH_STACK_GROUPS,
            projects: PROJECTS,
        }
    }

    /// Check the authored invariants, returning the first violation.
    pub fn validate(&self) -> PortfolioResult<()> {
        match self.violations().into_iter().next() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Every authored invariant violation, in table order.
    pub fn violations(&self) -> Vec<PortfolioError> {
        let mut errors = Vec::new();
        let mut seen = HashSet::new();

        for group in self.tech_stack {
            if !seen.insert(group.title) {
                errors.push(PortfolioError::DuplicateGroup(group.title.to_string()));
            }
            if group.stacks.is_empty() {
                errors.push(PortfolioError::EmptyGroup(group.title.to_string()));
            }
            for skill in group.stacks {
                if skill.level > 100 {
                    errors.push(PortfolioError::LevelOutOfRange {
                        group: group.title.to_string(),
                        skill: skill.name.to_string(),
                        level: skill.level,
                    });
                }
            }
        }

        for (index, project) in self.projects.iter().enumerate() {
            if project.title.trim().is_empty() {
                errors.push(PortfolioError::EmptyProjectTitle(index));
            }
        }

        errors
    }

    /// Serialize all tables as pretty JSON
    pub fn to_json(&self) -> PortfolioResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Render an authored Markdown fragment to HTML.
pub fn render_markdown(source: &str) -> String {
    let parser = Parser::new(source);
    let mut out = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authored_content_is_valid() {
        assert!(Portfolio::authored().validate().is_ok());
    }

    #[test]
    fn duplicate_titles_are_reported() {
        static GROUPS: &[TechStackGroup] = &[
            TechStackGroup {
                title: "Tools",
                stacks: &[Skill { name: "Git", level: 85 }],
            },
            TechStackGroup {
                title: "Tools",
                stacks: &[Skill { name: "Vim", level: 50 }],
            },
        ];
        let portfolio = Portfolio {
            tech_stack: GROUPS,
            ..Portfolio::authored()
        };

        let err = portfolio.validate().unwrap_err();
        assert!(matches!(err, PortfolioError::DuplicateGroup(ref t) if t == "Tools"));
    }

    #[test]
    fn out_of_range_level_and_empty_group() {
        static GROUPS: &[TechStackGroup] = &[
            TechStackGroup {
                title: "Odd",
                stacks: &[Skill { name: "Overflow", level: 130 }],
            },
            TechStackGroup {
                title: "Empty",
                stacks: &[],
            },
        ];
        let portfolio = Portfolio {
            tech_stack: GROUPS,
            ..Portfolio::authored()
        };

        let errors = portfolio.violations();
        assert_eq!(errors.len(), 2);
        assert!(matches!(
            errors[0],
            PortfolioError::LevelOutOfRange { level: 130, .. }
        ));
        assert!(matches!(errors[1], PortfolioError::EmptyGroup(_)));
    }

    #[test]
    fn json_export_contains_tables() {
        let json = Portfolio::authored().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["tech_stack"].as_array().unwrap().len(), 4);
        assert_eq!(value["projects"].as_array().unwrap().len(), 4);
        assert_eq!(value["profile"]["links"]["portrait"], "/SK.png");
    }

    #[test]
    fn markdown_renders_strong() {
        let html = render_markdown(PROFILE.education.degree);
        assert!(html.contains("<strong>Bachelor of Engineering</strong>"));
        assert!(html.contains("Computer Science &amp; Engineering"));
    }
}
