pub mod link_list;
pub mod live_region;
pub mod modal_menu;
pub mod modal_system;
pub mod profile_header;
pub mod social_icons;
pub mod theme_toggle;
