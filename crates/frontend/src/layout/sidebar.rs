//! Sidebar with one entry per entity screen

use leptos::prelude::*;

use crate::layout::nav::{use_nav, Screen};
use crate::shared::icons::icon;

struct MenuGroup {
    label: &'static str,
    items: &'static [Screen],
}

static MENU: [MenuGroup; 3] = [
    MenuGroup {
        label: "Catalog",
        items: &[Screen::Categories, Screen::Suppliers, Screen::Products],
    },
    MenuGroup {
        label: "People",
        items: &[Screen::Employees, Screen::Customers],
    },
    MenuGroup {
        label: "Sales",
        items: &[Screen::Orders],
    },
];

#[component]
pub fn Sidebar() -> impl IntoView {
    let nav = use_nav();

    view! {
        <nav class="sidebar">
            {MENU
                .iter()
                .map(|group| {
                    view! {
                        <div class="sidebar__group">
                            <div class="sidebar__group-label">{group.label}</div>
                            {group
                                .items
                                .iter()
                                .map(|&screen| {
                                    view! {
                                        <button
                                            class="sidebar__item"
                                            class:sidebar__item--active=move || nav.active.get() == screen
                                            on:click=move |_| nav.open(screen)
                                        >
                                            {icon(screen.icon_name())}
                                            <span class="sidebar__item-label">{screen.title()}</span>
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                })
                .collect_view()}
        </nav>
    }
}
