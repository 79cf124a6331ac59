pub mod app_reducer;
pub mod cart_reducer;
pub mod catalog_reducer;
pub mod selection_reducer;
pub mod wish_list_reducer;
