//! Profile Content
//!
//! Authored biography, education, and outbound link targets.
//! Link targets and asset paths are published verbatim.

use serde::Serialize;

/// Outbound links and static asset paths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Links {
    /// LinkedIn profile URL
    pub linkedin: &'static str,
    /// Label shown on the LinkedIn button
    pub linkedin_label: &'static str,
    /// GitHub profile URL
    pub github: &'static str,
    /// Label shown on the GitHub button
    pub github_label: &'static str,
    /// Contact email address (without scheme)
    pub email: &'static str,
    /// Downloadable resume, served as an opaque file
    pub resume: &'static str,
    /// Profile illustration, served as an opaque image
    pub portrait: &'static str,
}

impl Links {
    /// `mailto:` target for the contact action
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

/// Education block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Education {
    pub year_line: &'static str,
    /// Degree line, Markdown
    pub degree: &'static str,
    pub institution: &'static str,
    pub focus: &'static str,
}

/// Everything authored about the person behind the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Profile {
    /// Document title
    pub name: &'static str,
    /// Value of the `og:title` meta tag
    pub og_title: &'static str,
    pub greeting: &'static str,
    pub tagline: &'static [&'static str],
    /// Fixed text before the rotating roles
    pub role_prefix: &'static str,
    /// Phrases cycled by the typewriter
    pub roles: &'static [&'static str],
    /// About paragraph, Markdown
    pub about: &'static str,
    pub education: Education,
    pub copyright: &'static str,
    pub links: Links,
}

pub static PROFILE: Profile = Profile {
    name: "Sahil Kalarkar",
    og_title: "My page title",
    greeting: "Hi, I'm Sahil \u{1F44B}",
    tagline: &[
        "Engineer by craft, entrepreneur by vision.",
        "Building modern, fast, and responsive websites.",
        "Your vision, my code.",
    ],
    role_prefix: "I'm a\u{a0}",
    roles: &["Software Engineer", "Web Developer", "MERN Enthusiast"],
    about: "I am a passioanate **Software Developer** with an excellent \
            problem-solving skills and a deep enthusiasm for bulding scalable, \
            responsive & user-friendly websites. Specializing in \
            **MERN stack (MongoDB, Express.js, React.js, Node.js).**",
    education: Education {
        year_line: "2025 - Passout \u{1F468}\u{200D}\u{1F393}",
        degree: "**Bachelor of Engineering** in **Computer Science & Engineering**",
        institution: "College of Engineering and Technology, Akola",
        focus: "Focused on software engineering, data structures, and full-stack web development.",
    },
    copyright: "\u{a9} 2025 Sahil Kalarkar. All rights reserved.",
    links: Links {
        linkedin: "https://www.linkedin.com/in/sahil-kalarkar-b09b79233",
        linkedin_label: "linkedIn/sahil-kalarkar",
        github: "https://github.com/SahilKalarkar",
        github_label: "github/SahilKalarkar",
        email: "sahilkalarkar@gmail.com",
        resume: "/RESUME(SAHIL KALARKAR).pdf",
        portrait: "/SK.png",
    },
};
