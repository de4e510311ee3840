//! Sidebar text panel: workspace switcher, menu sections with collapsible groups

use crate::layout::global_context::use_global_context;
use crate::shared::components::ui::CountBadge;
use crate::shared::icons::icon_sized;
use contracts::shared::navigation::{GROUP_DASHBOARD, GROUP_MY_REPORTS};
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuItem {
    id: &'static str,
    label: &'static str,
    badge: Option<&'static str>,
    /// Pulsing notification dot
    dot: bool,
}

const fn item(id: &'static str, label: &'static str) -> MenuItem {
    MenuItem { id, label, badge: None, dot: false }
}

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    /// Rendered as a raised card with a colored bar
    accent: bool,
    items: Vec<MenuItem>,
}

#[derive(Clone, Debug, PartialEq)]
struct MenuSection {
    title: &'static str,
    items: Vec<MenuItem>,
    group: MenuGroup,
}

fn get_menu_sections() -> Vec<MenuSection> {
    vec![
        MenuSection {
            title: "Dashboard",
            items: vec![item("sales-list", "Sales list"), item("goals", "Goals")],
            group: MenuGroup {
                id: GROUP_DASHBOARD,
                label: "Dashboard",
                accent: true,
                items: vec![
                    item("codename", "Codename"),
                    item("shared", "Shared with me"),
                    item("cargo", "Cargo2go"),
                    MenuItem { id: "cloud3r", label: "Cloud3r", badge: Some("2"), dot: true },
                    item("idioma", "Idioma"),
                    item("syllables", "Syllables"),
                    item("x0b", "x-0b"),
                ],
            },
        },
        MenuSection {
            title: "Reports",
            items: vec![item("share-reports", "Share with me")],
            group: MenuGroup {
                id: GROUP_MY_REPORTS,
                label: "My reports",
                accent: false,
                items: vec![
                    item("emails", "Emails received"),
                    item("deal-duration", "Deal duration"),
                    item("new-report", "New report"),
                    MenuItem { id: "analytics", label: "Analytics", badge: Some("7"), dot: false },
                ],
            },
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <div class="app-sidebar">
            <div class="app-sidebar__workspace">
                <span>"Codename.com"</span>
                {icon_sized("chevron-down", 16)}
            </div>

            <div class="app-sidebar__content">
                {get_menu_sections().into_iter().map(|section| {
                    view! {
                        <div class="app-sidebar__section">
                            <div class="app-sidebar__section-title">{section.title}</div>
                            {section.items.into_iter().map(|entry| {
                                view! { <SidebarItem entry=entry nested=false /> }
                            }).collect_view()}
                            <SidebarGroup group=section.group />
                        </div>
                    }
                }).collect_view()}

                <div class="app-sidebar__footer">
                    {icon_sized("folder-closed", 16)}
                    <span>"Manage folders"</span>
                </div>
            </div>
        </div>
    }
}

#[component]
fn SidebarGroup(group: MenuGroup) -> impl IntoView {
    let sidebar = use_global_context().sidebar;
    let group_id = group.id;
    let is_expanded = move || sidebar.with(|s| s.is_expanded(group_id));
    let items = StoredValue::new(group.items);

    view! {
        <div class="app-sidebar__group">
            <div
                class="app-sidebar__group-header"
                class:app-sidebar__group-header--accent=group.accent
                on:click=move |_| sidebar.update(|s| s.toggle_group(group_id))
            >
                <div class="app-sidebar__item-content">
                    {group.accent.then(|| view! { <div class="app-sidebar__accent-bar"></div> })}
                    <span>{group.label}</span>
                </div>
                {move || if is_expanded() {
                    icon_sized("chevron-down", 14)
                } else {
                    icon_sized("chevron-right", 14)
                }}
            </div>

            <Show when=is_expanded>
                <div class="app-sidebar__children">
                    {items.get_value().into_iter().map(|entry| {
                        view! { <SidebarItem entry=entry nested=true /> }
                    }).collect_view()}
                </div>
            </Show>
        </div>
    }
}

#[component]
fn SidebarItem(entry: MenuItem, nested: bool) -> impl IntoView {
    let sidebar = use_global_context().sidebar;
    let id = entry.id;
    let is_active = move || sidebar.with(|s| s.is_active(id));

    view! {
        <div
            class="app-sidebar__item"
            class:app-sidebar__item--nested=nested
            class:app-sidebar__item--active=is_active
            on:click=move |_| {
                log::debug!("Sidebar item selected: {}", id);
                sidebar.update(|s| s.activate(id));
            }
        >
            <span>{entry.label}</span>
            <div class="app-sidebar__item-extras">
                {entry.badge.map(|count| view! { <CountBadge count=count /> })}
                {entry.dot.then(|| view! { <div class="app-sidebar__dot"></div> })}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::navigation::SidebarState;

    #[test]
    fn test_menu_item_ids_are_unique() {
        let mut ids: Vec<&str> = get_menu_sections()
            .iter()
            .flat_map(|s| s.items.iter().chain(s.group.items.iter()))
            .map(|i| i.id)
            .collect();
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }

    #[test]
    fn test_default_expanded_groups_exist() {
        let groups: Vec<&str> = get_menu_sections().iter().map(|s| s.group.id).collect();
        for expanded in SidebarState::default().expanded {
            assert!(groups.contains(&expanded.as_str()), "unknown group {}", expanded);
        }
    }

    #[test]
    fn test_default_active_item_exists() {
        let found = get_menu_sections()
            .iter()
            .flat_map(|s| s.items.iter().chain(s.group.items.iter()))
            .any(|i| i.id == contracts::shared::navigation::DEFAULT_ACTIVE_ITEM);
        assert!(found);
    }
}
