//! Console screens: a status bar plus a scrolling pane of output lines.
//!
//! These are the concrete participants in a typical inset chain: the status
//! bar sits at the top of the surface and absorbs the top inset, the pane
//! reads whatever remains into its padding bookkeeping and renders below.

use ratatui::layout::Rect;

use crate::models::{ConsoleLine, DiffItem};
use crate::navigation::NavigationHost;
use crate::state::{LoadingState, StateHolder};
use crate::view::{CompatView, InsetHandler, Insets};

use super::Screen;

/// Routes reachable from the console screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleRoute {
    /// Back to the home screen
    Home,
    /// The persisted copy of the current log
    SavedLog,
}

/// Top bar that absorbs the top inset for the screens below it.
#[derive(Debug)]
pub struct StatusBar {
    screen: Screen<LoadingState, Rect, ConsoleRoute>,
    absorbed_top: u16,
}

impl StatusBar {
    /// A bar over the given surface.
    pub fn new(surface: Rect) -> Self {
        Self {
            screen: Screen::new(surface, StateHolder::new(LoadingState::Idle)),
            absorbed_top: 0,
        }
    }

    /// Rows of top inset this bar has taken on.
    pub fn absorbed_top(&self) -> u16 {
        self.absorbed_top
    }
}

impl InsetHandler for StatusBar {
    fn consume_system_insets(&mut self, insets: &Insets) -> Option<Insets> {
        if insets.top == 0 {
            return None;
        }
        self.absorbed_top = insets.top;
        Some(insets.without_top())
    }
}

impl CompatView for StatusBar {
    type State = LoadingState;
    type Surface = Rect;
    type Route = ConsoleRoute;

    fn render_surface(&self) -> &Rect {
        self.screen.render_surface()
    }

    fn bound_state(&self) -> &StateHolder<LoadingState> {
        self.screen.bound_state()
    }

    fn bound_state_mut(&mut self) -> &mut StateHolder<LoadingState> {
        self.screen.bound_state_mut()
    }
}

/// Scrolling pane of console output rows.
///
/// Holds the loading state machine for the work whose output it shows, and
/// the diff-wrapped rows the external list engine renders from.
#[derive(Debug)]
pub struct ConsolePane {
    screen: Screen<LoadingState, Rect, ConsoleRoute>,
    rows: Vec<DiffItem<ConsoleLine>>,
    content_padding: Insets,
}

impl ConsolePane {
    /// An empty pane over the given surface.
    pub fn new(surface: Rect) -> Self {
        Self {
            screen: Screen::new(surface, StateHolder::new(LoadingState::Idle)),
            rows: Vec::new(),
            content_padding: Insets::ZERO,
        }
    }

    /// Complete the pane's wiring by binding its navigation host.
    pub fn bind_navigation(&mut self, host: NavigationHost<ConsoleRoute>) {
        self.screen.bind_navigation(host);
    }

    /// Enter the loading state and clear previous output.
    pub fn begin(&mut self) {
        self.rows.clear();
        self.screen.state_mut().set_state(LoadingState::Loading);
    }

    /// Append one line of output as a fresh diff row.
    pub fn push_line(&mut self, line: impl Into<ConsoleLine>) {
        self.rows
            .push(DiffItem::with_template(line.into(), ConsoleLine::TEMPLATE));
    }

    /// Settle the state machine once the work is done.
    pub fn finish(&mut self, success: bool) {
        let settled = if success {
            LoadingState::Loaded
        } else {
            LoadingState::Failed
        };
        self.screen.state_mut().set_state(settled);
    }

    /// The diff rows for the list engine.
    pub fn rows(&self) -> &[DiffItem<ConsoleLine>] {
        &self.rows
    }

    /// Padding recorded from the last peeked insets.
    pub fn content_padding(&self) -> Insets {
        self.content_padding
    }

    /// The surface area left after the recorded padding.
    pub fn content_area(&self) -> Rect {
        self.content_padding.shrink(*self.screen.surface())
    }

    /// Open the persisted log. Fatal when navigation was never wired.
    pub fn open_saved_log(&mut self) {
        self.screen.navigate(ConsoleRoute::SavedLog);
    }

    /// Return to the home screen. Fatal when navigation was never wired.
    pub fn close(&mut self) {
        self.screen.navigate(ConsoleRoute::Home);
    }
}

impl InsetHandler for ConsolePane {
    fn peek_system_insets(&mut self, insets: &Insets) {
        // Bookkeeping only; the bound state never moves from here.
        self.content_padding = *insets;
    }
}

impl CompatView for ConsolePane {
    type State = LoadingState;
    type Surface = Rect;
    type Route = ConsoleRoute;

    fn render_surface(&self) -> &Rect {
        self.screen.render_surface()
    }

    fn bound_state(&self) -> &StateHolder<LoadingState> {
        self.screen.bound_state()
    }

    fn bound_state_mut(&mut self) -> &mut StateHolder<LoadingState> {
        self.screen.bound_state_mut()
    }

    fn navigation(&self) -> Option<&crate::navigation::NavigationDelegate<ConsoleRoute>> {
        Some(self.screen.navigation_delegate())
    }
}
