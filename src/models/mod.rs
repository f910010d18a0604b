mod message;
mod offer;

pub use message::{ChatMessage, Role};
pub use offer::{CashPrice, MilesPrice, Offer, OfferPrice, Segment};
