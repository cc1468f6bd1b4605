//! Text list formats: one name per line, optional quantity prefixes, and
//! `Header:` sections.

pub mod files;
pub mod list;

pub use files::{find_lists, read_names, read_sections, winner_first};
pub use list::{
    find_section, parse_names, parse_sections, render_list, render_sections, strip_quantity,
    Section,
};
