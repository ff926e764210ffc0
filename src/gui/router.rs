// src/gui/router.rs
use super::pages::{self, Page};

pub static PAGES: &[&'static dyn Page] = &[
    &pages::about::PAGE,
    &pages::data::PAGE,
    &pages::charts::PAGE,
];

pub fn all_pages() -> &'static [&'static dyn Page] {
    PAGES
}
