//! Static page content.
//!
//! The whole site is fixed marketing-style copy; there is no data source
//! behind it. Content lives here as plain structs so presenters and tests
//! can reach it without any I/O.

use serde::Serialize;

// ---------------------------------------------------------------------------
// Routes
// ---------------------------------------------------------------------------

/// The five site routes, in navigation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Route {
    Home,
    About,
    Projects,
    Travel,
    Contact,
}

impl Route {
    pub const ALL: [Route; 5] = [
        Route::Home,
        Route::About,
        Route::Projects,
        Route::Travel,
        Route::Contact,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::About => "/about",
            Route::Projects => "/projects",
            Route::Travel => "/travel",
            Route::Contact => "/contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::About => "About",
            Route::Projects => "Projects",
            Route::Travel => "Travel",
            Route::Contact => "Contact",
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        Route::ALL.into_iter().find(|r| r.path() == path)
    }

    /// Content for this route.
    pub fn page(self) -> Page {
        match self {
            Route::Home => Page::Home(hero()),
            Route::About => Page::About(about()),
            Route::Projects => Page::Projects(projects()),
            Route::Travel => Page::Travel(travel_log()),
            Route::Contact => Page::Contact(contact_info()),
        }
    }
}

// ---------------------------------------------------------------------------
// Content model
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, Serialize)]
pub enum Page {
    Home(Hero),
    About(About),
    Projects(Vec<Project>),
    Travel(Vec<TravelEntry>),
    Contact(ContactInfo),
}

impl Page {
    pub fn title(&self) -> &'static str {
        match self {
            Page::Home(_) => "Hello",
            Page::About(_) => "About Me",
            Page::Projects(_) => "Projects & Experience",
            Page::Travel(_) => "Travel Stories",
            Page::Contact(_) => "Get In Touch",
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct Hero {
    pub greeting: &'static str,
    pub name: &'static str,
    pub tagline: &'static str,
}

#[derive(Clone, Debug, Serialize)]
pub struct About {
    pub intro: &'static str,
    pub stack_note: &'static str,
    pub tech_stack: Vec<&'static str>,
}

#[derive(Clone, Debug, Serialize)]
pub struct Project {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub technologies: Vec<&'static str>,
}

#[derive(Clone, Debug, Serialize)]
pub struct TravelEntry {
    pub location: &'static str,
    pub country: &'static str,
    pub description: &'static str,
    pub highlights: Vec<&'static str>,
}

#[derive(Clone, Debug, Serialize)]
pub struct ContactInfo {
    pub blurb: &'static str,
    pub email: &'static str,
    pub github: &'static str,
    pub linkedin: &'static str,
}

// ---------------------------------------------------------------------------
// Content data
// ---------------------------------------------------------------------------

pub fn hero() -> Hero {
    Hero {
        greeting: "Hello, I'm",
        name: "A Developer",
        tagline: "Full-Stack Developer | React, Rust, AI Integration | Travel",
    }
}

pub fn about() -> About {
    About {
        intro: "Developer and traveller, building things for the web by day \
                and chasing night skies the rest of the time.",
        stack_note: "Currently looking to join a cross-functional team that \
                     values improving people's lives through accessible design.",
        tech_stack: vec![
            "React", "Next.js", "TypeScript", "Rust", "PostgreSQL", "Tailwind CSS",
        ],
    }
}

pub fn projects() -> Vec<Project> {
    vec![
        Project {
            title: "Social Platform",
            subtitle: "Founding Engineer",
            description: "Role-based social networking platform with secure \
                          authentication, real-time chat, and a scalable \
                          PostgreSQL schema.",
            technologies: vec!["Next.js", "Supabase", "PostgreSQL", "Real-time"],
        },
        Project {
            title: "AI Client Platform",
            subtitle: "Frontend & API Integration",
            description: "Responsive AI client platform integrating multiple \
                          AI APIs with real-time analytics dashboards.",
            technologies: vec!["React", "AI Integration", "Analytics"],
        },
        Project {
            title: "Video Format Converter",
            subtitle: "Open Source Tool",
            description: "Efficient video conversion tool solving the \
                          limitations of free online converters.",
            technologies: vec!["Python", "FFmpeg", "CLI", "Open Source"],
        },
        Project {
            title: "Smart Recipe Assistant",
            subtitle: "Hackathon Build",
            description: "AI-powered recipe assistant suggesting personalized \
                          recipes from available pantry ingredients, with \
                          real-time pantry tracking.",
            technologies: vec!["Flask", "AI/ML", "Prompt Engineering"],
        },
    ]
}

pub fn travel_log() -> Vec<TravelEntry> {
    vec![TravelEntry {
        location: "Varkala",
        country: "Kerala, India",
        description: "An unforgettable journey to the cliffs of Varkala that \
                      began with a scenic train ride and turned into an \
                      incredible cultural immersion.",
        highlights: vec![
            "Scenic train journey through lush green countryside",
            "Cliffside sunsets over the Arabian Sea",
        ],
    }]
}

pub fn contact_info() -> ContactInfo {
    ContactInfo {
        blurb: "Have a project in mind? Let's work together to create \
                something amazing.",
        email: "your.email@example.com",
        github: "github.com/your-username",
        linkedin: "linkedin.com/in/your-profile",
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
