pub mod notification;
pub mod traveler;

pub use notification::*;
pub use traveler::*;
