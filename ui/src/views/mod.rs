pub mod listing_card;
pub mod listing_grid;
pub mod search_bar;
