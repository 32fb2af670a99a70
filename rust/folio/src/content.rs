//! Static page content
//!
//! The About Me and CV fragments are opaque HTML, embedded at compile time
//! and injected verbatim into their containers.

use serde::{Deserialize, Serialize};

pub const INTRO_HTML: &str = include_str!("../assets/intro.html");
pub const CV_HTML: &str = include_str!("../assets/cv.html");

/// A tab of the single-page layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Intro,
    Cv,
}

impl Section {
    pub const ALL: [Section; 2] = [Section::Intro, Section::Cv];

    /// Id of the section element
    pub fn id(&self) -> &'static str {
        match self {
            Section::Intro => "intro",
            Section::Cv => "cv",
        }
    }

    /// Id of the element the fragment is injected into
    pub fn container_id(&self) -> &'static str {
        match self {
            Section::Intro => "intro-content",
            Section::Cv => "cv-content",
        }
    }

    pub fn html(&self) -> &'static str {
        match self {
            Section::Intro => INTRO_HTML,
            Section::Cv => CV_HTML,
        }
    }

    pub fn from_id(id: &str) -> Option<Section> {
        Section::ALL.into_iter().find(|s| s.id() == id)
    }
}
