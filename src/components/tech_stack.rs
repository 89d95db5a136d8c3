//! Tech Stack Component
//!
//! One accordion item per group, one animated bar per skill. Any number of
//! groups may be open at once.

use dioxus::prelude::*;
use portfolio_core::{dom_id, skill_fill_percent, AccordionState, TechStackGroup};
use portfolio_ui::{Accordion, AccordionItem, ProgressBar};

#[component]
pub fn TechStack(groups: &'static [TechStackGroup]) -> Element {
    let mut state = use_signal(AccordionState::new);

    rsx! {
        div { class: "section tech-stack",
            h1 { class: "section-title", "Tech Stack" }
            Accordion {
                for group in groups.iter() {
                    AccordionItem {
                        key: "{group.title}",
                        value: group.title.to_string(),
                        title: group.title.to_string(),
                        open: state.read().is_open(group.title),
                        on_toggle: move |key: String| {
                            let open = state.write().toggle(&key);
                            tracing::debug!(group = %key, open, "tech stack group toggled");
                        },
                        SkillList { group: *group }
                    }
                }
            }
        }
    }
}

#[component]
fn SkillList(group: TechStackGroup) -> Element {
    rsx! {
        div { class: "skill-list",
            for skill in group.stacks.iter() {
                div { key: "{skill.name}", class: "skill-card",
                    div { class: "skill-header",
                        span { class: "skill-name", "{skill.name}" }
                        span { class: "skill-level", {format!("{}%", skill_fill_percent(skill.level))} }
                    }
                    ProgressBar {
                        id: dom_id(&["skill", group.title, skill.name]),
                        percent: skill.level,
                        label: skill.name.to_string(),
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portfolio_core::{Skill, TECH_STACK_GROUPS};

    use crate::components::test_support::render;

    #[test]
    fn one_group_per_table_entry() {
        fn app() -> Element {
            rsx! { TechStack { groups: TECH_STACK_GROUPS } }
        }
        let html = render(app);

        assert_eq!(html.matches("class=\"accordion-item\"").count(), TECH_STACK_GROUPS.len());
        for group in TECH_STACK_GROUPS {
            assert!(html.contains(group.title));
        }
        // Everything starts collapsed
        assert!(!html.contains("aria-expanded=\"true\""));
    }

    #[test]
    fn one_bar_per_skill_at_authored_width() {
        fn app() -> Element {
            rsx! { TechStack { groups: TECH_STACK_GROUPS } }
        }
        let html = render(app);

        let skills: usize = TECH_STACK_GROUPS.iter().map(|g| g.stacks.len()).sum();
        assert_eq!(html.matches("role=\"progressbar\"").count(), skills);
        assert!(html.contains("id=\"skill-frontend-html5\""));
        assert!(html.contains("--fill: 95%;"));
        assert!(html.contains("id=\"skill-tools-visual-studio-code\""));
    }

    #[test]
    fn level_above_hundred_is_clamped() {
        static GROUPS: &[TechStackGroup] = &[TechStackGroup {
            title: "Odd",
            stacks: &[Skill { name: "Overflow", level: 140 }],
        }];
        fn app() -> Element {
            rsx! { TechStack { groups: GROUPS } }
        }
        let html = render(app);

        assert!(html.contains("--fill: 100%;"));
        assert!(html.contains("100%"));
        assert!(!html.contains("140"));
    }
}
