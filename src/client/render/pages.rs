use std::collections::BTreeSet;

use crate::client::models::navigation::{Navigator, Tab};
use crate::client::models::user::{ProfileStats, User};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderView {
    SignedOut { label: &'static str },
    SignedIn { initial: String, name: String, status: &'static str },
}

pub fn render_header(user: Option<&User>) -> HeaderView {
    match user {
        None => HeaderView::SignedOut { label: "Login / Sign Up" },
        Some(user) => HeaderView::SignedIn { initial: user.initial(), name: user.name.clone(), status: "Online" },
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub tab: Tab,
    pub label: &'static str,
    pub active: bool,
}

/// Sidebar entries. The highlight comes from the navigator, never stored apart.
pub fn render_nav(nav: &Navigator) -> Vec<NavItem> {
    Tab::ALL
        .into_iter()
        .map(|tab| NavItem { tab, label: tab.label(), active: nav.is_highlighted(tab) })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileView {
    pub initial: String,
    pub name: String,
    pub email: String,
    pub books_read: String,
    pub pages_read: String,
    pub genres_explored: String,
    pub groups_joined: String,
}

/// `1234567` -> `1,234,567`.
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// The "groups joined" figure is the locally joined set; the backend does
/// not track community membership.
pub fn render_profile(user: &User, stats: Option<&ProfileStats>, joined: &BTreeSet<String>) -> ProfileView {
    let stats = stats.copied().unwrap_or_default();
    ProfileView {
        initial: user.initial(),
        name: user.name.clone(),
        email: user.email.clone(),
        books_read: format_thousands(stats.books_read),
        pages_read: format_thousands(stats.pages_read),
        genres_explored: format_thousands(stats.genres_explored),
        groups_joined: format_thousands(joined.len() as u64),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub name: &'static str,
    pub icon: &'static str,
}

pub const CATEGORIES: [Category; 8] = [
    Category { name: "Fantasy", icon: "🐉" },
    Category { name: "Science Fiction", icon: "🚀" },
    Category { name: "Mystery", icon: "🔍" },
    Category { name: "Romance", icon: "💕" },
    Category { name: "History", icon: "🏛" },
    Category { name: "Technology", icon: "💻" },
    Category { name: "Biography", icon: "👤" },
    Category { name: "Cooking", icon: "🍳" },
];

pub fn render_categories() -> &'static [Category] {
    &CATEGORIES
}

pub fn category_query(name: &str) -> String {
    format!("subject:\"{}\"", name)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Group {
    pub id: &'static str,
    pub name: &'static str,
    pub members: u64,
}

pub const GROUPS: [Group; 3] = [
    Group { id: "scifi", name: "Sci-Fi Enthusiasts", members: 2341 },
    Group { id: "mystery", name: "Mystery Book Club", members: 1897 },
    Group { id: "fantasy", name: "Fantasy Readers", members: 1542 },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupCard {
    pub id: &'static str,
    pub name: &'static str,
    pub members: String,
    pub joined: bool,
    pub button_label: &'static str,
}

pub fn render_groups(joined: &BTreeSet<String>) -> Vec<GroupCard> {
    GROUPS
        .iter()
        .map(|group| {
            let is_member = joined.contains(group.id);
            GroupCard {
                id: group.id,
                name: group.name,
                members: format!("{} members", format_thousands(group.members)),
                joined: is_member,
                button_label: if is_member { "Joined" } else { "Join" },
            }
        })
        .collect()
}
