//! Tab navigation state
//!
//! Showing a section deactivates every section and nav button, activates the
//! requested section and the button that asked for it, and (for known
//! sections) re-injects that section's content.

use crate::content::Section;

/// What the DOM has to do for one `show` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationUpdate {
    /// Element id to mark active
    pub section_id: String,
    /// Container id and HTML to inject, when the section has content
    pub inject: Option<(&'static str, &'static str)>,
}

/// Which tab is currently shown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    active: String,
}

impl Default for Navigator {
    fn default() -> Self {
        Self {
            active: Section::Intro.id().to_string(),
        }
    }
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> &str {
        &self.active
    }

    /// Switch to `section_id`
    ///
    /// Ids without embedded content (e.g. a notes tab) still become active;
    /// they just get nothing injected.
    pub fn show(&mut self, section_id: &str) -> NavigationUpdate {
        self.active = section_id.to_string();

        NavigationUpdate {
            section_id: section_id.to_string(),
            inject: Section::from_id(section_id).map(|s| (s.container_id(), s.html())),
        }
    }

    /// Content loaded when the page first opens
    pub fn initial_content() -> (&'static str, &'static str) {
        (Section::Intro.container_id(), Section::Intro.html())
    }
}
