//! Custom widget components

mod alert;
mod edit_form;
mod header;
mod pagination_bar;
mod product_card;
mod product_list;
mod search_panel;

pub use alert::{Alert, AlertKind};
pub use edit_form::EditForm;
pub use header::MainHeader;
pub use pagination_bar::PaginationBar;
pub use product_card::ProductCard;
pub use product_list::{scroll_for_selection, ProductList};
pub use search_panel::SearchPanel;
