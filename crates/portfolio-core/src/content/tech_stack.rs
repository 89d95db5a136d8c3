//! Tech Stack Table
//!
//! Authored skill groups with a display proficiency per skill.
//! Levels are authored constants, not measurements.

use serde::Serialize;

/// A single skill with its display proficiency (percent)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Skill {
    pub name: &'static str,
    pub level: u8,
}

/// A titled group of skills, rendered as one collapsible section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TechStackGroup {
    /// Group label, unique across the table
    pub title: &'static str,
    /// Skills in display order
    pub stacks: &'static [Skill],
}

const fn skill(name: &'static str, level: u8) -> Skill {
    Skill { name, level }
}

pub static TECH_STACK_GROUPS: &[TechStackGroup] = &[
    TechStackGroup {
        title: "Frontend",
        stacks: &[
            skill("HTML5", 95),
            skill("CSS3", 90),
            skill("JavaScript", 93),
            skill("TypeScript", 80),
            skill("React.js", 92),
            skill("Next.js", 85),
            skill("Tailwind CSS", 90),
        ],
    },
    TechStackGroup {
        title: "Backend",
        stacks: &[
            skill("Node.js", 88),
            skill("Express.js", 86),
            skill("PHP", 80),
        ],
    },
    TechStackGroup {
        title: "Database",
        stacks: &[skill("MySQL", 87), skill("MongoDB", 80)],
    },
    TechStackGroup {
        title: "Tools",
        stacks: &[skill("Visual Studio Code", 90), skill("Git", 85)],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_in_authored_order() {
        let titles: Vec<_> = TECH_STACK_GROUPS.iter().map(|g| g.title).collect();
        assert_eq!(titles, ["Frontend", "Backend", "Database", "Tools"]);
    }

    #[test]
    fn frontend_has_seven_skills() {
        let frontend = &TECH_STACK_GROUPS[0];
        assert_eq!(frontend.stacks.len(), 7);
        assert_eq!(frontend.stacks[0], skill("HTML5", 95));
        assert_eq!(frontend.stacks[6], skill("Tailwind CSS", 90));
    }
}
