// static page content
//
// technical names and project blurbs stay in english regardless of the selected
// language; the translated copy lives in common::i18n

pub struct Skill {
    pub icon: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
}

pub const SKILLS: &[Skill] = &[
    Skill {
        icon: "🌐",
        name: "HTML & CSS",
        description: "Semantic HTML5, CSS3, Flexbox, Grid, responsive design, and modern CSS features",
        tags: &["HTML5", "CSS3", "Flexbox", "Grid"],
    },
    Skill {
        icon: "⚡",
        name: "JavaScript",
        description: "ES6+ features, DOM manipulation, async programming, and modern JavaScript patterns",
        tags: &["ES6+", "Async/Await", "DOM APIs"],
    },
    Skill {
        icon: "⚛",
        name: "React",
        description: "Component-based architecture, hooks, state management, and building interactive UIs",
        tags: &["Hooks", "Components", "TypeScript"],
    },
    Skill {
        icon: "⎇",
        name: "Git & GitHub",
        description: "Version control, branching strategies, pull requests, and collaborative workflows",
        tags: &["Git", "GitHub", "Version Control"],
    },
    Skill {
        icon: "⇄",
        name: "API Integration",
        description: "RESTful APIs, React Query, handling responses, and integrating third-party services",
        tags: &["React Query", "REST", "Axios"],
    },
    Skill {
        icon: "▤",
        name: "State Management",
        description: "Managing application state with Zustand, Context API, and other solutions",
        tags: &["Zustand", "Context API", "Redux"],
    },
];

pub struct Project {
    pub icon: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub tech_stack: &'static [&'static str],
    pub repo: &'static str,
    pub live: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        icon: "📊",
        name: "E-Commerce Dashboard",
        description: "A modern admin dashboard for managing products, orders, and customers. Built with React and features real-time data visualization.",
        tech_stack: &["React", "TailwindCSS", "Chart.js", "REST API"],
        repo: "https://github.com/",
        live: "#",
    },
    Project {
        icon: "✅",
        name: "Task Management App",
        description: "A productivity app for organizing tasks with drag-and-drop functionality, categories, and deadline reminders.",
        tech_stack: &["React", "Zustand", "LocalStorage", "CSS"],
        repo: "https://github.com/",
        live: "#",
    },
    Project {
        icon: "☀",
        name: "Weather Application",
        description: "Real-time weather app with location-based forecasts, beautiful UI animations, and detailed weather metrics.",
        tech_stack: &["JavaScript", "Weather API", "CSS3", "Geolocation"],
        repo: "https://github.com/",
        live: "#",
    },
    Project {
        icon: "🍽",
        name: "Recipe Finder",
        description: "Search and discover recipes from around the world. Save favorites and get detailed cooking instructions.",
        tech_stack: &["React", "API Integration", "Responsive Design"],
        repo: "https://github.com/",
        live: "#",
    },
];

// (icon, label) pairs under the about text
pub const HIGHLIGHTS: &[(&str, &str)] = &[
    ("◎", "Clean Code"),
    ("▯", "Responsive Design"),
    ("🚀", "Performance"),
    ("✎", "UI/UX Focus"),
];

// headline numbers for the about section, labelled from the stats strings
pub const EXPERIENCE_YEARS: &str = "2+";
pub const PROJECT_COUNT: &str = "5+";
pub const TECHNOLOGY_COUNT: &str = "7+";
