use super::{
    reduce, Bucket, BrowserState, Changes, ContextMenu, Intent, MenuTarget, Panel, Slice, Space,
    SpaceId, SpaceSwitch, Tab, TabId, Theme, UiFlags, DEFAULT_SPACE_COLOR, DEFAULT_SPACE_NAME,
};

fn space(id: &str) -> Space {
    Space::new(SpaceId::new(id), id.to_uppercase(), "#000000")
}

fn tab(id: &str, space: &str, pinned: bool) -> Tab {
    Tab {
        id: TabId::new(id),
        space_id: SpaceId::new(space),
        title: id.to_string(),
        url: format!("https://{id}.example"),
        pinned,
        favicon: None,
    }
}

fn state(spaces: &[&str], tabs: Vec<Tab>, active_space: &str, active_tab: Option<&str>) -> BrowserState {
    BrowserState::from_parts(
        spaces.iter().map(|id| space(id)).collect(),
        tabs,
        SpaceId::new(active_space),
        active_tab.map(TabId::new),
        UiFlags::default(),
    )
}

fn tab_ids(state: &BrowserState) -> Vec<&str> {
    state.tabs().iter().map(|tab| tab.id.as_str()).collect()
}

#[test]
fn deleting_the_last_space_is_a_no_op() {
    let mut state = state(&["a"], vec![tab("t1", "a", false)], "a", Some("t1"));
    let changes = state.apply(Intent::DeleteSpace(SpaceId::new("a")));
    assert!(changes.is_empty());
    assert_eq!(state.spaces().len(), 1);
    assert_eq!(state.active_space_id().as_str(), "a");
    assert_eq!(state.tabs().len(), 1);
}

#[test]
fn deleting_a_space_cascades_to_its_tabs() {
    let mut state = state(
        &["a", "b"],
        vec![tab("t1", "a", true), tab("t2", "b", false), tab("t3", "a", false)],
        "b",
        Some("t2"),
    );
    let changes = state.apply(Intent::DeleteSpace(SpaceId::new("a")));
    assert!(changes.contains(Slice::Spaces));
    assert!(changes.contains(Slice::Tabs));
    assert!(!changes.contains(Slice::ActiveSpace));
    assert_eq!(tab_ids(&state), vec!["t2"]);
    assert!(state.tabs().iter().all(|tab| tab.space_id.as_str() != "a"));
}

#[test]
fn deleting_the_active_space_activates_the_first_remaining() {
    let mut state = state(
        &["a", "b", "c"],
        vec![tab("t1", "b", false), tab("t2", "c", false)],
        "b",
        Some("t1"),
    );
    let changes = state.apply(Intent::DeleteSpace(SpaceId::new("b")));
    assert_eq!(state.active_space_id().as_str(), "a");
    assert_eq!(state.active_tab_id(), None);
    assert!(changes.contains(Slice::ActiveSpace));
    assert!(changes.contains(Slice::ActiveTab));
}

#[test]
fn create_space_appends_and_activates() {
    let mut state = state(&["a"], Vec::new(), "a", None);
    let changes = state.apply(Intent::CreateSpace);
    assert_eq!(changes, Changes::of(&[Slice::Spaces, Slice::ActiveSpace]));
    let created = state.spaces().last().expect("new space");
    assert_eq!(created.name, DEFAULT_SPACE_NAME);
    assert_eq!(created.color, DEFAULT_SPACE_COLOR);
    assert_eq!(state.active_space_id(), &created.id);
}

#[test]
fn created_ids_are_never_recycled() {
    let mut state = state(&["a"], Vec::new(), "a", None);
    state.apply(Intent::CreateTab { url: None });
    let first = state.active_tab_id().cloned().expect("first tab");
    state.apply(Intent::CloseTab(first.clone()));
    state.apply(Intent::CreateTab { url: None });
    let second = state.active_tab_id().cloned().expect("second tab");
    assert_ne!(first, second);
}

#[test]
fn rename_trims_and_rejects_blank_input() {
    let mut state = state(&["a"], Vec::new(), "a", None);
    let id = SpaceId::new("a");
    let changes = state.apply(Intent::RenameSpace {
        id: id.clone(),
        name: "  Research ".to_string(),
    });
    assert!(changes.contains(Slice::Spaces));
    assert_eq!(state.active_space().name, "Research");

    let changes = state.apply(Intent::RenameSpace {
        id,
        name: "   ".to_string(),
    });
    assert!(changes.is_empty());
    assert_eq!(state.active_space().name, "Research");
}

#[test]
fn recolor_replaces_color() {
    let mut state = state(&["a"], Vec::new(), "a", None);
    state.apply(Intent::RecolorSpace {
        id: SpaceId::new("a"),
        color: "#F472B6".to_string(),
    });
    assert_eq!(state.active_space().color, "#F472B6");
}

#[test]
fn switching_spaces_wraps_in_both_directions() {
    let mut state = state(&["a", "b", "c"], Vec::new(), "b", None);
    state.apply(Intent::SwitchSpace(SpaceSwitch::Next));
    assert_eq!(state.active_space_id().as_str(), "c");
    state.apply(Intent::SwitchSpace(SpaceSwitch::Next));
    assert_eq!(state.active_space_id().as_str(), "a");
    state.apply(Intent::SwitchSpace(SpaceSwitch::Prev));
    assert_eq!(state.active_space_id().as_str(), "c");
}

#[test]
fn switching_to_an_explicit_space_ignores_unknown_ids() {
    let mut state = state(&["a", "b", "c"], Vec::new(), "a", None);
    state.apply(Intent::SwitchSpace(SpaceSwitch::To(SpaceId::new("c"))));
    assert_eq!(state.active_space_id().as_str(), "c");
    let changes = state.apply(Intent::SwitchSpace(SpaceSwitch::To(SpaceId::new("zzz"))));
    assert!(changes.is_empty());
    assert_eq!(state.active_space_id().as_str(), "c");
}

#[test]
fn create_tab_adds_one_unpinned_active_tab_in_active_space() {
    let mut state = state(&["a", "b"], vec![tab("t1", "a", true)], "b", Some("t1"));
    state.apply(Intent::CreateTab { url: None });
    assert_eq!(state.tabs().len(), 2);
    let created = state.active_tab().expect("active tab");
    assert_eq!(created.space_id.as_str(), "b");
    assert!(!created.pinned);
    assert_eq!(created.title, "New Tab");
    assert_eq!(created.url, "https://google.com");
}

#[test]
fn create_tab_with_url_derives_title() {
    let mut state = state(&["a"], Vec::new(), "a", None);
    state.apply(Intent::CreateTab {
        url: Some("www.rust-lang.org/learn".to_string()),
    });
    let created = state.active_tab().expect("active tab");
    assert_eq!(created.url, "https://www.rust-lang.org/learn");
    assert_eq!(created.title, "rust-lang.org");
}

#[test]
fn update_url_normalizes_and_retitles() {
    let mut state = state(&["a"], vec![tab("t1", "a", false)], "a", Some("t1"));
    let id = TabId::new("t1");
    state.apply(Intent::UpdateUrl {
        id: id.clone(),
        url: "github.com".to_string(),
    });
    let updated = state.tab(&id).expect("tab");
    assert_eq!(updated.url, "https://github.com");
    assert_eq!(updated.title, "github.com");

    state.apply(Intent::UpdateUrl {
        id: id.clone(),
        url: "https://www.github.com/foo".to_string(),
    });
    assert_eq!(state.tab(&id).expect("tab").title, "github.com");
}

#[test]
fn update_url_ignores_blank_input() {
    let mut state = state(&["a"], vec![tab("t1", "a", false)], "a", Some("t1"));
    let changes = state.apply(Intent::UpdateUrl {
        id: TabId::new("t1"),
        url: "  ".to_string(),
    });
    assert!(changes.is_empty());
    assert_eq!(state.tabs()[0].url, "https://t1.example");
}

#[test]
fn reorder_inserts_before_target_and_inherits_its_bucket() {
    let mut state = state(
        &["a"],
        vec![tab("p", "a", true), tab("q", "a", false), tab("r", "a", false)],
        "a",
        None,
    );
    state.apply(Intent::Reorder {
        dragged: TabId::new("p"),
        target: TabId::new("r"),
    });
    assert_eq!(tab_ids(&state), vec!["q", "p", "r"]);
    assert!(!state.tab(&TabId::new("p")).expect("p").pinned);
}

#[test]
fn reorder_moving_backwards_lands_before_target() {
    let mut state = state(
        &["a"],
        vec![tab("p", "a", true), tab("q", "a", false), tab("r", "a", false)],
        "a",
        None,
    );
    state.apply(Intent::Reorder {
        dragged: TabId::new("r"),
        target: TabId::new("p"),
    });
    assert_eq!(tab_ids(&state), vec!["r", "p", "q"]);
    assert!(state.tab(&TabId::new("r")).expect("r").pinned);
}

#[test]
fn reorder_with_unknown_or_same_ids_is_a_no_op() {
    let mut state = state(&["a"], vec![tab("p", "a", true), tab("q", "a", false)], "a", None);
    let before = state.clone();
    assert!(state
        .apply(Intent::Reorder {
            dragged: TabId::new("p"),
            target: TabId::new("missing"),
        })
        .is_empty());
    assert!(state
        .apply(Intent::Reorder {
            dragged: TabId::new("q"),
            target: TabId::new("q"),
        })
        .is_empty());
    assert_eq!(state, before);
}

#[test]
fn closing_the_active_tab_activates_last_tab_of_its_space() {
    let mut state = state(
        &["a", "b"],
        vec![
            tab("x", "a", false),
            tab("other", "b", false),
            tab("y", "a", true),
            tab("z", "a", false),
        ],
        "a",
        Some("z"),
    );
    state.apply(Intent::CloseTab(TabId::new("z")));
    assert_eq!(state.active_tab_id().map(TabId::as_str), Some("y"));
}

#[test]
fn closing_the_last_tab_of_a_space_clears_the_active_tab() {
    let mut state = state(&["a", "b"], vec![tab("x", "a", false), tab("o", "b", false)], "a", Some("x"));
    let changes = state.apply(Intent::CloseTab(TabId::new("x")));
    assert!(changes.contains(Slice::ActiveTab));
    assert_eq!(state.active_tab_id(), None);
}

#[test]
fn closing_an_inactive_tab_keeps_the_active_pointer() {
    let mut state = state(&["a"], vec![tab("x", "a", false), tab("y", "a", false)], "a", Some("y"));
    let changes = state.apply(Intent::CloseTab(TabId::new("x")));
    assert_eq!(changes, Changes::of(&[Slice::Tabs]));
    assert_eq!(state.active_tab_id().map(TabId::as_str), Some("y"));
}

#[test]
fn set_pinned_is_idempotent() {
    let mut state = state(&["a"], vec![tab("x", "a", false)], "a", None);
    let id = TabId::new("x");
    let first = state.apply(Intent::SetPinned {
        id: id.clone(),
        pinned: true,
    });
    let snapshot = state.clone();
    let second = state.apply(Intent::SetPinned { id, pinned: true });
    assert!(first.contains(Slice::Tabs));
    assert!(second.is_empty());
    assert_eq!(state, snapshot);
    assert!(state.tabs()[0].pinned);
    assert_eq!(state.tabs().len(), 1);
}

#[test]
fn drop_on_bucket_only_affects_the_active_space() {
    let mut state = state(&["a", "b"], vec![tab("x", "a", false), tab("y", "b", false)], "a", None);
    state.apply(Intent::DropOnBucket {
        id: TabId::new("x"),
        bucket: Bucket::Pinned,
    });
    let changes = state.apply(Intent::DropOnBucket {
        id: TabId::new("y"),
        bucket: Bucket::Pinned,
    });
    assert!(state.tab(&TabId::new("x")).expect("x").pinned);
    assert!(changes.is_empty());
    assert!(!state.tab(&TabId::new("y")).expect("y").pinned);
}

#[test]
fn move_to_space_unpins_and_clears_active_tab() {
    let mut state = state(&["a", "b"], vec![tab("x", "a", true)], "a", Some("x"));
    state.apply(Intent::MoveToSpace {
        id: TabId::new("x"),
        space: SpaceId::new("b"),
    });
    let moved = state.tab(&TabId::new("x")).expect("x");
    assert_eq!(moved.space_id.as_str(), "b");
    assert!(!moved.pinned);
    assert_eq!(state.active_tab_id(), None);
}

#[test]
fn move_to_unknown_space_is_refused() {
    let mut state = state(&["a"], vec![tab("x", "a", true)], "a", Some("x"));
    let changes = state.apply(Intent::MoveToSpace {
        id: TabId::new("x"),
        space: SpaceId::new("nowhere"),
    });
    assert!(changes.is_empty());
    assert_eq!(state.tab(&TabId::new("x")).expect("x").space_id.as_str(), "a");
}

#[test]
fn buckets_partition_the_active_space_in_order() {
    let state = state(
        &["a", "b"],
        vec![
            tab("p1", "a", true),
            tab("t1", "a", false),
            tab("bx", "b", true),
            tab("p2", "a", true),
            tab("t2", "a", false),
        ],
        "a",
        None,
    );
    let pinned: Vec<_> = state.pinned_tabs().iter().map(|t| t.id.as_str()).collect();
    let today: Vec<_> = state.today_tabs().iter().map(|t| t.id.as_str()).collect();
    assert_eq!(pinned, vec!["p1", "p2"]);
    assert_eq!(today, vec!["t1", "t2"]);
}

#[test]
fn from_parts_repairs_dangling_references() {
    let state = BrowserState::from_parts(
        vec![space("a")],
        vec![tab("x", "a", false), tab("orphan", "gone", false)],
        SpaceId::new("gone"),
        Some(TabId::new("orphan")),
        UiFlags::default(),
    );
    assert_eq!(state.active_space_id().as_str(), "a");
    assert_eq!(tab_ids(&state), vec!["x"]);
    assert_eq!(state.active_tab_id(), None);
}

#[test]
fn from_parts_never_leaves_zero_spaces() {
    let state = BrowserState::from_parts(
        Vec::new(),
        Vec::new(),
        SpaceId::new("a"),
        None,
        UiFlags::default(),
    );
    assert!(!state.spaces().is_empty());
    assert_eq!(state.active_space_id(), &state.spaces()[0].id);
}

#[test]
fn seeded_state_starts_on_first_space() {
    let state = BrowserState::seeded();
    assert_eq!(state.spaces().len(), 3);
    assert_eq!(state.active_space().name, "Work");
    assert_eq!(state.pinned_tabs().len(), 4);
    assert_eq!(state.today_tabs().len(), 1);
    assert_eq!(state.active_tab().map(|tab| tab.title.as_str()), Some("Linear"));
}

#[test]
fn panel_resizes_are_clamped() {
    let mut state = state(&["a"], Vec::new(), "a", None);
    state.apply(Intent::ResizePanel {
        panel: Panel::Sidebar,
        width: 50,
    });
    assert_eq!(state.ui().sidebar_width, 200);
    state.apply(Intent::ResizePanel {
        panel: Panel::Sidebar,
        width: 9000,
    });
    assert_eq!(state.ui().sidebar_width, 480);
    state.apply(Intent::ResizePanel {
        panel: Panel::Chat,
        width: 100,
    });
    assert_eq!(state.ui().chat_width, 300);
    let changes = state.apply(Intent::ResetPanel(Panel::Chat));
    assert_eq!(changes, Changes::of(&[Slice::ChatWidth]));
    assert_eq!(state.ui().chat_width, 360);
}

#[test]
fn peek_only_applies_while_sidebar_is_hidden() {
    let mut state = state(&["a"], Vec::new(), "a", None);
    state.apply(Intent::SetPeek(true));
    assert!(!state.ui().peeking);

    state.apply(Intent::ToggleSidebar);
    state.apply(Intent::SetPeek(true));
    assert!(state.ui().peeking);
    assert!(state.ui().sidebar_shown());

    state.apply(Intent::ToggleSidebar);
    assert!(!state.ui().peeking);
    assert!(state.ui().sidebar_visible);
}

#[test]
fn transient_flags_do_not_report_persisted_changes() {
    let mut state = state(&["a"], vec![tab("x", "a", false)], "a", None);
    assert!(state.apply(Intent::OpenPalette).is_empty());
    assert!(state.ui().palette_open);
    assert!(state.apply(Intent::ToggleChat).is_empty());
    assert!(state.ui().chat_open);
    let menu = ContextMenu {
        x: 3,
        y: 4,
        target: MenuTarget::Tab(TabId::new("x")),
    };
    assert!(state.apply(Intent::OpenContextMenu(menu.clone())).is_empty());
    assert_eq!(state.ui().context_menu.as_ref(), Some(&menu));
    state.apply(Intent::CloseContextMenu);
    assert!(state.ui().context_menu.is_none());
}

#[test]
fn theme_toggle_round_trips() {
    let (state, changes) = reduce(state(&["a"], Vec::new(), "a", None), Intent::ToggleTheme);
    assert_eq!(state.ui().theme, Theme::Dark);
    assert!(changes.contains(Slice::Theme));
    let (state, _) = reduce(state, Intent::ToggleTheme);
    assert_eq!(state.ui().theme, Theme::Light);
}
