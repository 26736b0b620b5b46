//! First-launch spaces and tabs.

use super::{Space, SpaceId, Tab, TabId};

const FAVICON_SERVICE: &str = "https://www.google.com/s2/favicons?sz=64&domain=";

pub(super) fn spaces() -> Vec<Space> {
    vec![
        Space::new(SpaceId::new("space-1"), "Work", "#6B6B9C"),
        Space::new(SpaceId::new("space-2"), "Personal", "#10B981"),
        Space::new(SpaceId::new("space-3"), "Inspiration", "#F59E0B"),
    ]
}

pub(super) fn tabs() -> Vec<Tab> {
    [
        ("1", "space-1", "Linear", "linear.app", true),
        ("2", "space-1", "Notion", "notion.so", true),
        ("3", "space-1", "Figma", "figma.com", true),
        ("4", "space-1", "GitHub", "github.com", true),
        ("5", "space-1", "Slack", "slack.com", false),
        ("6", "space-2", "Twitter / X", "twitter.com", true),
        ("7", "space-2", "YouTube", "youtube.com", false),
        ("8", "space-2", "Arc Browser", "arc.net", false),
        ("9", "space-3", "Vercel", "vercel.com", true),
        ("10", "space-3", "React", "react.dev", false),
        ("11", "space-3", "Dribbble", "dribbble.com", false),
    ]
    .into_iter()
    .map(|(id, space, title, domain, pinned)| Tab {
        id: TabId::new(id),
        space_id: SpaceId::new(space),
        title: title.to_string(),
        url: format!("https://{domain}"),
        pinned,
        favicon: Some(format!("{FAVICON_SERVICE}{domain}")),
    })
    .collect()
}
