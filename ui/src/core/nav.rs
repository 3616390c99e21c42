//! Fixed link and tab catalogs shared by both navbar variants.

use crate::core::glyph::Glyph;

/// Links shown in the desktop bar and the dropdown panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavLink {
    Work,
    About,
    Playground,
    Resource,
}

impl NavLink {
    /// Display order.
    pub const ALL: [NavLink; 4] = [
        NavLink::Work,
        NavLink::About,
        NavLink::Playground,
        NavLink::Resource,
    ];

    pub fn name(self) -> &'static str {
        match self {
            NavLink::Work => "Work",
            NavLink::About => "About",
            NavLink::Playground => "Playground",
            NavLink::Resource => "Resource",
        }
    }

    pub fn label(self) -> String {
        match self {
            NavLink::Work => crate::t!("nav-work"),
            NavLink::About => crate::t!("nav-about"),
            NavLink::Playground => crate::t!("nav-playground"),
            NavLink::Resource => crate::t!("nav-resource"),
        }
    }

    /// In-page anchor; links never leave the page.
    pub fn href(self) -> &'static str {
        match self {
            NavLink::Work => "#work",
            NavLink::About => "#about",
            NavLink::Playground => "#playground",
            NavLink::Resource => "#resource",
        }
    }
}

/// Items of the mobile bottom tab bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TabItem {
    #[default]
    Home,
    Work,
    Playground,
    Resource,
}

impl TabItem {
    pub const ALL: [TabItem; 4] = [
        TabItem::Home,
        TabItem::Work,
        TabItem::Playground,
        TabItem::Resource,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TabItem::Home => "Home",
            TabItem::Work => "Work",
            TabItem::Playground => "Playground",
            TabItem::Resource => "Resource",
        }
    }

    pub fn label(self) -> String {
        match self {
            TabItem::Home => crate::t!("nav-home"),
            TabItem::Work => crate::t!("nav-work"),
            TabItem::Playground => crate::t!("nav-playground"),
            TabItem::Resource => crate::t!("nav-resource"),
        }
    }

    pub fn glyph(self) -> Glyph {
        match self {
            TabItem::Home => Glyph::Home,
            TabItem::Work => Glyph::Briefcase,
            TabItem::Playground => Glyph::Zap,
            TabItem::Resource => Glyph::BookOpen,
        }
    }
}

/// Per-item delay between staggered entrances, in seconds.
pub const STAGGER_SECS: f64 = 0.12;

/// A desktop bar link with its entrance delay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinkEntry {
    pub link: NavLink,
    pub delay_secs: f64,
}

pub fn desktop_links() -> Vec<LinkEntry> {
    NavLink::ALL
        .into_iter()
        .enumerate()
        .map(|(i, link)| LinkEntry {
            link,
            delay_secs: STAGGER_SECS * i as f64,
        })
        .collect()
}

/// Rows of the dropdown panel: every link, then the login action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEntry {
    Link(NavLink),
    Login,
}

impl MenuEntry {
    pub fn label(self) -> String {
        match self {
            MenuEntry::Link(link) => link.label(),
            MenuEntry::Login => crate::t!("nav-login"),
        }
    }

    pub fn href(self) -> &'static str {
        match self {
            MenuEntry::Link(link) => link.href(),
            MenuEntry::Login => LOGIN_HREF,
        }
    }

    pub fn is_login(self) -> bool {
        matches!(self, MenuEntry::Login)
    }
}

pub const LOGIN_HREF: &str = "#login";

pub fn menu_entries() -> Vec<MenuEntry> {
    NavLink::ALL
        .into_iter()
        .map(MenuEntry::Link)
        .chain(std::iter::once(MenuEntry::Login))
        .collect()
}

/// A tab bar slot and whether it carries the highlight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabEntry {
    pub item: TabItem,
    pub highlighted: bool,
}

impl TabEntry {
    pub fn css_class(&self) -> &'static str {
        if self.highlighted {
            "tabbar__item tabbar__item--active"
        } else {
            "tabbar__item"
        }
    }
}

pub fn tab_entries(active: TabItem) -> [TabEntry; 4] {
    TabItem::ALL.map(|item| TabEntry {
        item,
        highlighted: item == active,
    })
}
