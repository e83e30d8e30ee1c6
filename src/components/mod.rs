//! UI Components for PropertyHub.

mod filter_bar;
mod mobile_menu;
mod nav_header;
mod property_card;
mod search_input;

pub use filter_bar::{FilterBar, FilterPill};
pub use mobile_menu::MobileMenu;
pub use nav_header::NavHeader;
pub use property_card::PropertyCard;
pub use search_input::SearchInput;
