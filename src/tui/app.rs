/// Dashboard UI state
use tracing::debug;

use super::action::Action;

/// Which card is selected and whether the loop should stop
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct App {
    pub selected: usize,
    pub card_count: usize,
    pub should_quit: bool,
}

impl App {
    pub fn new(card_count: usize) -> Self {
        Self {
            card_count,
            ..Default::default()
        }
    }

    /// Apply an action; selection always stays within the cards
    pub fn reduce(&mut self, action: Action) {
        debug!("ACTION: {:?}", action);
        let last = self.card_count.saturating_sub(1);
        match action {
            Action::Quit => self.should_quit = true,
            Action::SelectNext => self.selected = (self.selected + 1).min(last),
            Action::SelectPrevious => self.selected = self.selected.saturating_sub(1),
            Action::SelectFirst => self.selected = 0,
            Action::SelectLast => self.selected = last,
        }
    }
}
