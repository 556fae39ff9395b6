use crate::table::{Table, MAX_PLAYERS};

use super::AppState;

#[derive(Debug, Clone, Copy)]
enum MenuItem {
    Players,
    HandSize,
    Seed,
}

const MENU_ITEMS: [MenuItem; 3] = [MenuItem::Players, MenuItem::HandSize, MenuItem::Seed];

const MAX_HAND_SIZE: usize = 10;

impl MenuItem {
    fn display(self, app: &AppState) -> String {
        match self {
            MenuItem::Players => format!("Players: {}", app.cfg.players),
            MenuItem::HandSize => format!("Hand Size: {}", app.cfg.hand_size),
            MenuItem::Seed => match app.cfg.seed {
                Some(seed) => format!("Seed: {seed}"),
                None => String::from("Seed: random"),
            },
        }
    }

    fn inc(self, app: &mut AppState) {
        match self {
            MenuItem::Players => {
                if app.cfg.players < MAX_PLAYERS {
                    app.cfg.players += 1;
                }
            }
            MenuItem::HandSize => {
                if app.cfg.hand_size < MAX_HAND_SIZE {
                    app.cfg.hand_size += 1;
                }
            }
            MenuItem::Seed => {
                app.cfg.seed = Some(app.cfg.seed.map_or(1, |s| s.saturating_add(1)));
            }
        }
    }

    fn dec(self, app: &mut AppState) {
        match self {
            MenuItem::Players => {
                if app.cfg.players > 1 {
                    app.cfg.players -= 1;
                }
            }
            MenuItem::HandSize => {
                if app.cfg.hand_size > 1 {
                    app.cfg.hand_size -= 1;
                }
            }
            MenuItem::Seed => {
                app.cfg.seed = match app.cfg.seed {
                    Some(s) if s > 1 => Some(s - 1),
                    _ => None,
                };
            }
        }
    }
}

impl AppState {
    pub fn menu_items_display(&self) -> Vec<String> {
        MENU_ITEMS.iter().map(|item| item.display(self)).collect()
    }

    pub fn toggle_menu(&mut self) {
        self.close_help();
        self.scene = match self.scene {
            super::Scene::Menu => super::Scene::Table,
            _ => {
                self.open_menu();
                super::Scene::Menu
            }
        };
    }

    // --- Menu operations ---
    pub fn open_menu(&mut self) {
        self.close_help();
        self.menu_index = 0;
        self.cfg = self.config;
        self.scene = super::Scene::Menu;
    }

    /// Apply the edited settings and seat a fresh table.
    pub fn apply_menu(&mut self) {
        self.config = self.cfg.clamped();
        self.cfg = self.config;
        self.table = Table::seated(&self.config);
        self.focus = 0;
        self.reset_round_view();
        self.scene = super::Scene::Table;
    }

    pub fn cancel_menu(&mut self) {
        self.scene = super::Scene::Table;
    }

    pub fn menu_next(&mut self) {
        self.menu_index = (self.menu_index + 1) % MENU_ITEMS.len();
    }
    pub fn menu_prev(&mut self) {
        self.menu_index = (self.menu_index + MENU_ITEMS.len() - 1) % MENU_ITEMS.len();
    }
    pub fn menu_inc(&mut self) {
        let item = MENU_ITEMS[self.menu_index % MENU_ITEMS.len()];
        item.inc(self);
    }
    pub fn menu_dec(&mut self) {
        let item = MENU_ITEMS[self.menu_index % MENU_ITEMS.len()];
        item.dec(self);
    }
}
