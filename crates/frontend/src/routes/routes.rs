use leptos::prelude::*;

use crate::domain::a001_category::ui::list::CategoryPage;
use crate::domain::a002_supplier::ui::list::SupplierPage;
use crate::domain::a003_product::ui::list::ProductPage;
use crate::domain::a004_employee::ui::list::EmployeePage;
use crate::domain::a005_customer::ui::list::CustomerPage;
use crate::domain::a006_order::ui::list::OrderPage;
use crate::layout::nav::{use_nav, Screen};
use crate::layout::sidebar::Sidebar;
use crate::layout::Shell;
use crate::system::auth::context::use_auth;
use crate::system::pages::login::LoginPage;

/// Swaps the content area to the active entity screen.
#[component]
fn ContentRouter() -> impl IntoView {
    let nav = use_nav();

    view! {
        {move || match nav.active.get() {
            Screen::Categories => view! { <CategoryPage /> }.into_any(),
            Screen::Suppliers => view! { <SupplierPage /> }.into_any(),
            Screen::Products => view! { <ProductPage /> }.into_any(),
            Screen::Employees => view! { <EmployeePage /> }.into_any(),
            Screen::Customers => view! { <CustomerPage /> }.into_any(),
            Screen::Orders => view! { <OrderPage /> }.into_any(),
        }}
    }
}

#[component]
fn MainLayout() -> impl IntoView {
    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! { <ContentRouter /> }.into_any()
        />
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let auth = use_auth();

    view! {
        <Show
            when=move || auth.with(|state| state.session.is_some())
            fallback=|| view! { <LoginPage /> }
        >
            <MainLayout />
        </Show>
    }
}
