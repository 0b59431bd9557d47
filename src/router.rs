//! In-process history router.
//!
//! Logical paths are normalized against a fixed `app://site/` base so that
//! `problems`, `/problems/` and `/a/../problems?x=1` all name the same page.
//! History works like a browser's: navigating truncates forward entries.

use url::Url;

/// Landing route holding every scrollable section.
pub const ROOT_PATH: &str = "/";

/// Secondary route for the problem statements page.
pub const PROBLEMS_PATH: &str = "/problems";

const BASE: &str = "app://site/";

/// The routing surface the navigation controller consumes.
pub trait Router {
    fn current_path(&self) -> &str;
    fn navigate_to(&mut self, path: &str);
}

/// Page matched from a logical path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Landing,
    ProblemStatements,
    NotFound(String),
}

impl Page {
    pub fn from_path(path: &str) -> Self {
        match path {
            ROOT_PATH => Self::Landing,
            PROBLEMS_PATH => Self::ProblemStatements,
            other => Self::NotFound(other.to_string()),
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Self::Landing => "Home",
            Self::ProblemStatements => "Problem Statements",
            Self::NotFound(_) => "Not Found",
        }
    }
}

/// Normalize a logical path. Returns `None` for anything that leaves the
/// site (another scheme or host).
pub fn normalize_path(path: &str) -> Option<String> {
    let base = Url::parse(BASE).ok()?;
    let url = base.join(path.trim()).ok()?;
    if url.scheme() != base.scheme() || url.host_str() != base.host_str() {
        return None;
    }
    let p = url.path();
    let trimmed = p.trim_end_matches('/');
    if trimmed.is_empty() {
        Some(ROOT_PATH.to_string())
    } else {
        Some(trimmed.to_string())
    }
}

pub struct HistoryRouter {
    history: Vec<String>,
    history_idx: usize,
}

impl Default for HistoryRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryRouter {
    pub fn new() -> Self {
        Self {
            history: vec![ROOT_PATH.to_string()],
            history_idx: 0,
        }
    }

    pub fn page(&self) -> Page {
        Page::from_path(self.current_path())
    }

    pub fn is_root(&self) -> bool {
        self.current_path() == ROOT_PATH
    }

    pub fn can_go_back(&self) -> bool {
        self.history_idx > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.history_idx + 1 < self.history.len()
    }

    /// Step back in history. Returns whether the location changed.
    pub fn back(&mut self) -> bool {
        if !self.can_go_back() {
            return false;
        }
        self.history_idx -= 1;
        log::debug!("Route back -> {}", self.current_path());
        true
    }

    /// Step forward in history. Returns whether the location changed.
    pub fn forward(&mut self) -> bool {
        if !self.can_go_forward() {
            return false;
        }
        self.history_idx += 1;
        log::debug!("Route forward -> {}", self.current_path());
        true
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }
}

impl Router for HistoryRouter {
    fn current_path(&self) -> &str {
        &self.history[self.history_idx]
    }

    fn navigate_to(&mut self, path: &str) {
        let Some(path) = normalize_path(path) else {
            log::warn!("Ignoring navigation outside the site: {path}");
            return;
        };
        if self.history[self.history_idx] == path {
            return;
        }
        // Truncate forward history before pushing
        self.history.truncate(self.history_idx + 1);
        self.history.push(path);
        self.history_idx = self.history.len() - 1;
        log::debug!("Route -> {}", self.current_path());
    }
}
