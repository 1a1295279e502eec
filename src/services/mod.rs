mod order_tracker;

pub use order_tracker::{OrderTracker, OrderTrackerBuilder};
