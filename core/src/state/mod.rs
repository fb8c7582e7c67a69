pub mod suppression;

pub use suppression::SuppressionWindow;
