use leptos::prelude::*;

/// Screens reachable from the sidebar, one per entity collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Categories,
    Suppliers,
    Products,
    Employees,
    Customers,
    Orders,
}

impl Screen {
    pub fn title(self) -> &'static str {
        match self {
            Screen::Categories => "Categories",
            Screen::Suppliers => "Suppliers",
            Screen::Products => "Products",
            Screen::Employees => "Employees",
            Screen::Customers => "Customers",
            Screen::Orders => "Orders",
        }
    }

    pub fn icon_name(self) -> &'static str {
        match self {
            Screen::Categories => "categories",
            Screen::Suppliers => "suppliers",
            Screen::Products => "products",
            Screen::Employees => "employees",
            Screen::Customers => "customers",
            Screen::Orders => "orders",
        }
    }
}

/// App-wide navigation state: which entity screen is active.
#[derive(Clone, Copy)]
pub struct NavContext {
    pub active: RwSignal<Screen>,
}

impl NavContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(Screen::Categories),
        }
    }

    pub fn open(&self, screen: Screen) {
        self.active.set(screen);
    }
}

impl Default for NavContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_nav() -> NavContext {
    use_context::<NavContext>().expect("NavContext not provided in context")
}
