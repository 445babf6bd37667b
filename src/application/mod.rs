pub mod cart_service;

pub use cart_service::{CartService, Page, CART_PAGE};
