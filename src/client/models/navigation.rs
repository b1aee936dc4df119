#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Home,
    Browse,
    Categories,
    Community,
    MyBooks,
    Profile,
}

impl Tab {
    pub const ALL: [Tab; 6] = [Tab::Home, Tab::Browse, Tab::Categories, Tab::Community, Tab::MyBooks, Tab::Profile];

    pub fn fragment(self) -> &'static str {
        match self {
            Tab::Home => "home",
            Tab::Browse => "browse",
            Tab::Categories => "categories",
            Tab::Community => "community",
            Tab::MyBooks => "my-books",
            Tab::Profile => "profile",
        }
    }

    /// Parses `#browse` or `browse`. Unknown fragments land on Home.
    pub fn from_fragment(fragment: &str) -> Tab {
        let name = fragment.trim().trim_start_matches('#');
        Tab::ALL.into_iter().find(|t| t.fragment() == name).unwrap_or_default()
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Browse => "Browse",
            Tab::Categories => "Categories",
            Tab::Community => "Community",
            Tab::MyBooks => "My Books",
            Tab::Profile => "Profile",
        }
    }

    pub fn requires_sign_in(self) -> bool {
        matches!(self, Tab::MyBooks | Tab::Profile)
    }
}

/// Active tab plus a back/forward history. The history entry under the
/// cursor is always the visible tab.
#[derive(Debug, Clone, PartialEq)]
pub struct Navigator {
    entries: Vec<Tab>,
    cursor: usize,
    sidebar_open: bool,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(Tab::Home)
    }
}

impl Navigator {
    pub fn new(initial: Tab) -> Self {
        Self { entries: vec![initial], cursor: 0, sidebar_open: false }
    }

    pub fn active(&self) -> Tab {
        self.entries[self.cursor]
    }

    pub fn is_highlighted(&self, tab: Tab) -> bool {
        self.active() == tab
    }

    pub fn sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    /// User-initiated switch: records a new history entry.
    pub fn switch_tab(&mut self, tab: Tab) {
        self.entries.truncate(self.cursor + 1);
        if self.active() != tab {
            self.entries.push(tab);
            self.cursor += 1;
        }
        self.show();
    }

    pub fn back(&mut self) -> Option<Tab> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        self.show();
        Some(self.active())
    }

    pub fn forward(&mut self) -> Option<Tab> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        self.show();
        Some(self.active())
    }

    pub fn can_go_back(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    pub fn history_len(&self) -> usize {
        self.entries.len()
    }

    /// Drops signed-in-only tabs from history after logout and lands on Home.
    pub fn reset_to_home(&mut self) {
        *self = Self { entries: vec![Tab::Home], cursor: 0, sidebar_open: false };
    }

    fn show(&mut self) {
        self.sidebar_open = false;
    }
}
