use crate::cards::Card;
use crate::table::{Table, TableConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Scene {
    Menu,
    Table,
}

/// High-level input actions for the TUI controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputAction {
    MenuNext,
    MenuPrev,
    MenuInc,
    MenuDec,
    MenuApply,
    MenuCancel,
    ToggleMenu,
    ToggleHelp,
    Deal,
    Draw,
    FocusNext,
    FocusPrev,
    FocusSeat(usize),
}

#[derive(Debug)]
#[non_exhaustive]
pub struct AppState {
    pub scene: Scene,
    pub table: Table,
    // Seat whose hand is highlighted and receives drawn cards
    pub focus: usize,
    // Applied settings and the copy being edited in the menu
    pub config: TableConfig,
    pub menu_index: usize,
    pub cfg: TableConfig,
    last_drawn: Option<Card>,
    help_open: bool,
    error: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        let config = TableConfig::default();
        Self::with_config(config)
    }
}

impl AppState {
    pub fn with_config(config: TableConfig) -> Self {
        let config = config.clamped();
        Self {
            scene: Scene::Menu,
            table: Table::seated(&config),
            focus: 0,
            config,
            menu_index: 0,
            cfg: config,
            last_drawn: None,
            help_open: false,
            error: None,
        }
    }

    pub fn help_open(&self) -> bool {
        self.help_open
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn last_drawn(&self) -> Option<Card> {
        self.last_drawn
    }

    pub(crate) fn close_help(&mut self) {
        self.help_open = false;
    }

    pub(crate) fn reset_round_view(&mut self) {
        self.last_drawn = None;
        self.error = None;
    }

    pub fn handle_input(&mut self, action: InputAction) -> bool {
        match action {
            InputAction::ToggleMenu => {
                self.toggle_menu();
                false
            }
            InputAction::ToggleHelp => {
                if self.scene == Scene::Table {
                    self.help_open = !self.help_open;
                }
                false
            }
            InputAction::MenuNext => {
                if self.scene == Scene::Menu {
                    self.menu_next();
                }
                false
            }
            InputAction::MenuPrev => {
                if self.scene == Scene::Menu {
                    self.menu_prev();
                }
                false
            }
            InputAction::MenuInc => {
                if self.scene == Scene::Menu {
                    self.menu_inc();
                }
                false
            }
            InputAction::MenuDec => {
                if self.scene == Scene::Menu {
                    self.menu_dec();
                }
                false
            }
            InputAction::MenuApply => {
                if self.scene == Scene::Menu {
                    self.apply_menu();
                }
                false
            }
            InputAction::MenuCancel => {
                if self.scene == Scene::Menu {
                    self.cancel_menu();
                }
                false
            }
            InputAction::Deal => self.scene == Scene::Table && self.deal(),
            InputAction::Draw => self.scene == Scene::Table && self.draw_to_focus(),
            InputAction::FocusNext => {
                if self.scene == Scene::Table {
                    self.focus_next();
                }
                false
            }
            InputAction::FocusPrev => {
                if self.scene == Scene::Table {
                    self.focus_prev();
                }
                false
            }
            InputAction::FocusSeat(idx) => {
                if self.scene == Scene::Table {
                    self.set_focus(idx);
                }
                false
            }
        }
    }

    /// Start a new round. Returns whether cards were dealt.
    pub fn deal(&mut self) -> bool {
        match self.table.start_round() {
            Ok(()) => {
                self.reset_round_view();
                true
            }
            Err(e) => {
                self.error = Some(e.to_string());
                false
            }
        }
    }

    /// Move the top card of the draw pile into the focused hand.
    pub fn draw_to_focus(&mut self) -> bool {
        if self.table.round() == 0 {
            return false;
        }
        let Some(card) = self.table.draw() else {
            self.error = Some("draw pile is empty".to_string());
            return false;
        };
        if let Some(p) = self.table.players.get_mut(self.focus) {
            p.hand.push(card);
        }
        self.last_drawn = Some(card);
        true
    }

    pub fn focus_next(&mut self) {
        if self.table.players.is_empty() {
            return;
        }
        self.focus = (self.focus + 1) % self.table.players.len();
    }

    pub fn focus_prev(&mut self) {
        if self.table.players.is_empty() {
            return;
        }
        let n = self.table.players.len();
        self.focus = (self.focus + n - 1) % n;
    }

    pub fn set_focus(&mut self, idx: usize) {
        if self.table.players.is_empty() {
            return;
        }
        self.focus = idx % self.table.players.len();
    }
}
