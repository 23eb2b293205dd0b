pub mod seller;

pub use seller::{AdminStats, NewSeller, Seller, SellerUpdate};
