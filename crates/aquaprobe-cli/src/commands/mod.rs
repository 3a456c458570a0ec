pub mod evaluate;
pub mod template;
pub mod thresholds;
