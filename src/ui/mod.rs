// UI module - handles all TUI rendering using Ratatui
//
// Architecture:
// - theme: Light/Dark palettes derived from the root theme attribute
// - layout: Screen areas for the home and detail views
// - render: Orchestrates a frame for the current route
// - header: Title bar with the theme toggle label
// - search: Search input ("Search for a country")
// - region_filter: Region selector button and dropdown
// - country_list: Country cards or the "No countries found" placeholder
// - details: Detail view with flag, attributes and border countries
// - legend: Hotkey legend

pub mod country_list;
pub mod details;
pub mod header;
pub mod layout;
pub mod legend;
pub mod region_filter;
pub mod render;
pub mod search;
pub mod theme;

pub use render::render;
