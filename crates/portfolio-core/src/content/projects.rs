//! Project Table
//!
//! Static project summaries shown as cards in the gallery.

use serde::Serialize;

/// A project card record.
///
/// `id` is shown to nobody and identifies nothing; the gallery keys cards
/// on their position in [`PROJECTS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub technology: &'static [&'static str],
    pub description: &'static str,
}

pub static PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "Army Welfare Donation Website",
        technology: &["HTML", "CSS", "MySQL", "PHP"],
        description: "A dynamic Army Website where people can  donate money directly to the Army\u{2019}s Welfare Fund.",
    },
    Project {
        id: 2,
        title: "Portfolio Website",
        technology: &["Next.js", "TypeScript", "TailwindCSS", "Framer Motion"],
        description: "Personal portfolio website showcasing my skills, education & projects with beautiful animations.",
    },
    Project {
        id: 3,
        title: "Gym Website",
        technology: &["React.js", "Email.js"],
        description: "A modern Gym Website with a various membership plans and services.",
    },
    Project {
        id: 4,
        title: "ZEST - Restaurant Website",
        technology: &["React.js", "MySQL", "PHP"],
        description: "A fully responsive website for a restaurant including key features like menu display, opening hours and contact information.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_projects_in_order() {
        let ids: Vec<_> = PROJECTS.iter().map(|p| p.id).collect();
        assert_eq!(ids, [1, 2, 3, 4]);
        assert_eq!(PROJECTS[3].title, "ZEST - Restaurant Website");
    }

    #[test]
    fn technology_tags_keep_order() {
        assert_eq!(
            PROJECTS[1].technology,
            ["Next.js", "TypeScript", "TailwindCSS", "Framer Motion"]
        );
    }
}
