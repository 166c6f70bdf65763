use std::fmt;

use serde::{Deserialize, Serialize};

// page sections
//
// the registry is the fixed, ordered list of anchors on the page.  the order here is
// the document order, which the scroll tracker relies on when breaking ties and when
// forcing the first/last section at the scroll boundaries
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Home,
    About,
    Skills,
    Projects,
    Experience,
    Contact,
}

pub const SECTIONS: [Section; 6] = [
    Section::Home,
    Section::About,
    Section::Skills,
    Section::Projects,
    Section::Experience,
    Section::Contact,
];

impl Section {
    // element id of the section in the document
    pub fn id(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Experience => "experience",
            Section::Contact => "contact",
        }
    }

    pub fn href(&self) -> String {
        format!("#{}", self.id())
    }

    pub fn from_id(id: &str) -> Option<Section> {
        let id = id.trim_start_matches('#');
        SECTIONS.into_iter().find(|s| s.id() == id)
    }
}

impl Default for Section {
    fn default() -> Self {
        Section::Home
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_starts_at_home_and_ends_at_contact() {
        assert_eq!(SECTIONS.first(), Some(&Section::Home));
        assert_eq!(SECTIONS.last(), Some(&Section::Contact));
    }

    #[test]
    fn anchors_resolve_with_or_without_hash() {
        assert_eq!(Section::from_id("#skills"), Some(Section::Skills));
        assert_eq!(Section::from_id("experience"), Some(Section::Experience));
        assert_eq!(Section::from_id("#blog"), None);
        assert_eq!(Section::Projects.href(), "#projects");
    }
}
