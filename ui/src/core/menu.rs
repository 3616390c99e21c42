//! Dropdown menu state for the toggle navbar.
//!
//! `MenuState` is the user-visible flag. `Presence` tracks whether the panel
//! is still mounted: after closing, it lingers for the exit transition and is
//! unmounted by a timer. Every exit carries a generation number so a timer
//! started before a reopen cannot unmount the reopened panel.

/// Exit transition length of the dropdown panel.
pub const PANEL_EXIT_MS: u64 = 250;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Hamburger button.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Any panel entry (link or login) closes the menu.
    pub fn select(&mut self) {
        self.open = false;
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Presence {
    #[default]
    Hidden,
    Shown,
    Exiting(u64),
}

impl Presence {
    pub fn is_mounted(&self) -> bool {
        !matches!(self, Presence::Hidden)
    }

    pub fn is_exiting(&self) -> bool {
        matches!(self, Presence::Exiting(_))
    }
}

/// Mount lifecycle of the dropdown panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PanelPresence {
    phase: Presence,
    generation: u64,
}

impl PanelPresence {
    pub fn phase(&self) -> Presence {
        self.phase
    }

    /// Follow the menu flag. Returns the generation to hand to
    /// [`finish_exit`](Self::finish_exit) when an exit transition starts.
    pub fn sync(&mut self, open: bool) -> Option<u64> {
        match (open, self.phase) {
            (true, _) => {
                self.phase = Presence::Shown;
                None
            }
            (false, Presence::Shown) => {
                self.generation += 1;
                self.phase = Presence::Exiting(self.generation);
                Some(self.generation)
            }
            (false, _) => None,
        }
    }

    /// Exit timer elapsed. Stale generations are ignored.
    pub fn finish_exit(&mut self, generation: u64) -> bool {
        if self.phase == Presence::Exiting(generation) {
            self.phase = Presence::Hidden;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        assert!(!MenuState::new().is_open());
    }

    #[test]
    fn even_toggles_restore_initial_state() {
        for n in [0, 2, 4, 10] {
            let mut menu = MenuState::new();
            for _ in 0..n {
                menu.toggle();
            }
            assert!(!menu.is_open(), "{n} toggles left the menu open");
        }
    }

    #[test]
    fn odd_toggles_open() {
        let mut menu = MenuState::new();
        assert!(menu.toggle());
        menu.toggle();
        assert!(menu.toggle());
    }

    #[test]
    fn selecting_an_entry_closes() {
        for _ in crate::core::nav::menu_entries() {
            let mut menu = MenuState::new();
            menu.toggle();
            menu.select();
            assert!(!menu.is_open());
        }
    }

    #[test]
    fn selecting_while_closed_stays_closed() {
        let mut menu = MenuState::new();
        menu.select();
        assert!(!menu.is_open());
    }

    #[test]
    fn panel_lingers_until_exit_finishes() {
        let mut panel = PanelPresence::default();
        assert_eq!(panel.sync(true), None);
        assert_eq!(panel.phase(), Presence::Shown);

        let generation = panel.sync(false).expect("exit should start");
        assert!(panel.phase().is_mounted());
        assert!(panel.phase().is_exiting());

        assert!(panel.finish_exit(generation));
        assert_eq!(panel.phase(), Presence::Hidden);
    }

    #[test]
    fn reopen_during_exit_ignores_stale_timer() {
        let mut panel = PanelPresence::default();
        panel.sync(true);
        let stale = panel.sync(false).unwrap();
        panel.sync(true);

        assert!(!panel.finish_exit(stale));
        assert_eq!(panel.phase(), Presence::Shown);

        let fresh = panel.sync(false).unwrap();
        assert_ne!(stale, fresh);
        assert!(!panel.finish_exit(stale));
        assert!(panel.finish_exit(fresh));
    }

    #[test]
    fn exit_timer_matches_panel_transition() {
        let panel = crate::core::motion::menu_panel();
        assert_eq!(PANEL_EXIT_MS, crate::core::timing::secs_to_ms(panel.timing.duration));
    }

    #[test]
    fn closing_a_hidden_panel_is_a_no_op() {
        let mut panel = PanelPresence::default();
        assert_eq!(panel.sync(false), None);
        assert_eq!(panel.phase(), Presence::Hidden);
    }
}
