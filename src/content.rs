//! What the portfolio shows. Everything here is fixed at compile time.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    Skills,
    Projects,
    Contact,
}

impl Section {
    /// Sections reachable from the navigation, in display order.
    pub const NAV: [Section; 3] = [Section::Skills, Section::Projects, Section::Contact];

    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }

    pub fn from_id(id: &str) -> Option<Section> {
        [Section::Home, Section::Skills, Section::Projects, Section::Contact]
            .into_iter()
            .find(|s| s.id() == id)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub link: &'static str,
}

pub const OWNER: &str = "Zidanni Clerigo";
pub const FIRST_NAME: &str = "Zidanni";

pub const TAGLINE: [&str; 2] = [
    "I like building things and telling stories. Somebody once told me that was a deadly combo. I guess I'm here to prove it to them :)",
    "If you wanna make something cool with me, HMU",
];

pub const PROJECTS_BLURB: &str = "What I do for fun.";
pub const CONTACT_BLURB: &str = "Project in mind? Need a new friend? Want an anime rec?";
pub const GITHUB_PROFILE: &str = "https://github.com/zClerigo";

pub const SOCIAL_LINKS: [SocialLink; 4] = [
    SocialLink { label: "GitHub", href: GITHUB_PROFILE },
    SocialLink { label: "LinkedIn", href: "https://www.linkedin.com/in/zidanni-clerigo/" },
    SocialLink { label: "Email", href: "mailto:zidanni.clerigo@gmail.com" },
    SocialLink { label: "X (Twitter)", href: "https://x.com/zidanni_clerigo" },
];

pub const SKILLS: [&str; 12] = [
    "JavaScript",
    "TypeScript",
    "React",
    "Python",
    "HTML/CSS",
    "Tailwind CSS",
    "Django",
    "Flask",
    "Supabase",
    "PostgreSQL",
    "Git",
    "Godot",
];

pub const PROJECTS: [Project; 4] = [
    Project {
        title: "NJ-Track",
        description: "2nd place winner @ HackRU Fall 2024. Allows vehicle conductors to manage the locations of passengers.",
        link: "https://github.com/zClerigo/nj-track",
    },
    Project {
        title: "Sharky",
        description: "Best Web Application winner @ Fungi Studio Hackathon 2025. SMMT that strives for virality in each post.",
        link: "https://github.com/zClerigo/sharky",
    },
    Project {
        title: "DramaBrew",
        description: "Mobile app that lets you talk to any character in any scenario.",
        link: "https://github.com/zClerigo/DramaBrew",
    },
    Project {
        title: "Hairstyle Helper",
        description: "Analyzes your hair type and provides advice on maintenance.",
        link: "https://github.com/zClerigo/hairstyle-helper",
    },
];
