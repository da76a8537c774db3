pub mod probability_badge;
pub mod segmented_toggle;
pub mod surfaces;

pub use probability_badge::probability_badge;
pub use segmented_toggle::facing_toggle;
