use crate::content::{self, PROFILE, Project, SkillSection};
use crate::navigator::NavigationItem;

/// Top-level route, shown as a tab in the header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Analytics,
}

impl Route {
    pub const ALL: [Route; 2] = [Route::Home, Route::Analytics];

    #[must_use]
    pub fn command(self) -> &'static str {
        match self {
            Route::Home => "~/home",
            Route::Analytics => "~/analytics",
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Route::Home => "HOME",
            Route::Analytics => "ANALYTICS",
        }
    }

    #[must_use]
    pub fn other(self) -> Route {
        match self {
            Route::Home => Route::Analytics,
            Route::Analytics => Route::Home,
        }
    }

    /// Navigator entries for this route, in display order
    #[must_use]
    pub fn items(self) -> Vec<NavigationItem> {
        match self {
            Route::Home => std::iter::once(NavigationItem::new("whoami", "whoami"))
                .chain(
                    content::SKILL_SECTIONS
                        .iter()
                        .map(|section| NavigationItem::new(section.id, section.title)),
                )
                .collect(),
            Route::Analytics => [
                NavigationItem::new("stories", "Data Stories"),
                NavigationItem::new("arsenal", "Tools Arsenal"),
                NavigationItem::new("radar", "Skill Radar"),
            ]
            .into_iter()
            .chain(
                content::PROJECTS
                    .iter()
                    .map(|project| NavigationItem::new(project.id, project.title)),
            )
            .collect(),
        }
    }

    #[must_use]
    pub fn default_page(self) -> Page {
        match self {
            Route::Home => Page::Whoami,
            Route::Analytics => Page::Stories,
        }
    }

    /// Route whose navigator lists `id`
    #[must_use]
    pub fn containing(id: &str) -> Option<Route> {
        Route::ALL
            .into_iter()
            .find(|route| route.items().iter().any(|item| item.id == id))
    }
}

/// Content shown in the page pane
#[derive(Debug, Clone, Copy)]
pub enum Page {
    Whoami,
    Skills(&'static SkillSection),
    Stories,
    Arsenal,
    Radar,
    Project(&'static Project),
}

impl Page {
    #[must_use]
    pub fn resolve(id: &str) -> Option<Page> {
        match id {
            "whoami" => Some(Page::Whoami),
            "stories" => Some(Page::Stories),
            "arsenal" => Some(Page::Arsenal),
            "radar" => Some(Page::Radar),
            other => content::skill_section(other)
                .map(Page::Skills)
                .or_else(|| content::project(other).map(Page::Project)),
        }
    }

    #[must_use]
    pub fn id(&self) -> &'static str {
        match self {
            Page::Whoami => "whoami",
            Page::Skills(section) => section.id,
            Page::Stories => "stories",
            Page::Arsenal => "arsenal",
            Page::Radar => "radar",
            Page::Project(project) => project.id,
        }
    }

    /// Shell command typed out at the top of the page
    #[must_use]
    pub fn command(&self) -> String {
        match self {
            Page::Whoami => "$ whoami".to_string(),
            Page::Skills(section) => format!("$ ls ~/skills/{}", section.id),
            Page::Stories => "$ cat ~/analytics/README.md".to_string(),
            Page::Arsenal => "$ ls ~/analytics/tools".to_string(),
            Page::Radar => "$ ./radar --plot skills.csv".to_string(),
            Page::Project(project) => format!("$ cat ~/projects/{}.md", project.id),
        }
    }

    /// Link copied by the copy shortcut on this page
    #[must_use]
    pub fn link(&self) -> Option<&'static str> {
        match self {
            Page::Project(project) => project.primary_link(),
            Page::Whoami | Page::Skills(_) | Page::Stories | Page::Arsenal | Page::Radar => {
                PROFILE.links.first().map(|link| link.url)
            }
        }
    }
}

impl PartialEq for Page {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

/// Events produced by components and drained by the main loop
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    Selected(NavigationItem),
}

#[derive(Debug, Clone)]
pub struct StatusToast {
    pub message: String,
    pub created_at: std::time::Instant,
}

impl StatusToast {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            created_at: std::time::Instant::now(),
        }
    }

    pub fn is_expired(&self, duration: std::time::Duration) -> bool {
        self.created_at.elapsed() >= duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_item_resolves_to_a_page() {
        for route in Route::ALL {
            for item in route.items() {
                let page = Page::resolve(&item.id);
                assert_eq!(page.map(|page| page.id()), Some(item.id.as_str()));
                assert_eq!(Route::containing(&item.id), Some(route));
            }
        }
    }

    #[test]
    fn test_unknown_page() {
        assert!(Page::resolve("nope").is_none());
        assert!(Route::containing("nope").is_none());
    }

    #[test]
    fn test_route_items_are_unique() {
        let mut ids: Vec<String> = Route::ALL
            .into_iter()
            .flat_map(Route::items)
            .map(|item| item.id)
            .collect();
        let total = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }

    #[test]
    fn test_project_page_links_to_project() {
        let page = Page::resolve("churn-model");
        assert_eq!(
            page.and_then(|page| page.link()),
            Some("https://github.com/lekhak03/churn-model")
        );
    }
}
