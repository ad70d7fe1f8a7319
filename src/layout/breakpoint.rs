use crate::foundation::core::Viewport;

/// Width-based media query.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaQuery {
    /// `(min-width: Npx)`
    MinWidth(f64),
    /// `(max-width: Npx)`
    MaxWidth(f64),
}

impl MediaQuery {
    /// `(min-width: 1024px)`.
    pub const DESKTOP: Self = Self::MinWidth(1024.0);

    /// Evaluate against the viewport width.
    pub fn matches(self, viewport: Viewport) -> bool {
        match self {
            Self::MinWidth(px) => viewport.width() >= px,
            Self::MaxWidth(px) => viewport.width() <= px,
        }
    }
}

/// Tracks whether a [`MediaQuery`] matches and reports only transitions.
///
/// Starts unmatched, like a query evaluated before the first layout pass.
#[derive(Clone, Copy, Debug)]
pub struct BreakpointWatcher {
    query: MediaQuery,
    matches: bool,
}

impl BreakpointWatcher {
    /// Watcher for `query`, initially unmatched.
    pub fn new(query: MediaQuery) -> Self {
        Self {
            query,
            matches: false,
        }
    }

    /// Watched query.
    pub fn query(&self) -> MediaQuery {
        self.query
    }

    /// Match state at the last observation.
    pub fn matches(&self) -> bool {
        self.matches
    }

    /// Re-evaluate against `viewport`; `Some(new)` when the match state flipped.
    pub fn observe(&mut self, viewport: Viewport) -> Option<bool> {
        let now = self.query.matches(viewport);
        if now == self.matches {
            return None;
        }
        self.matches = now;
        Some(now)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/breakpoint.rs"]
mod tests;
