//! Terminal front end: argument-level validation, printing, the scripted demo
//! and the interactive menu. Everything here talks to [`clientbook::api`].

pub(crate) mod demo;
pub(crate) mod input;
pub(crate) mod menu;
pub(crate) mod print;
