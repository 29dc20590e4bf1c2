pub mod settings;
pub mod weights;

pub use settings::AppConfig;
pub use weights::{CustomDeed, WeightConfig};
