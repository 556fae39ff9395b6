//! Terminal deal viewer: a menu to configure the table and a table scene that
//! deals rounds and shows every hand.

pub mod app;
pub mod controller;
mod ui;
