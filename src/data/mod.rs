// Dataset loading and preparation

pub mod dataset;
pub mod loader;

pub use dataset::TabularDataset;
pub use loader::{load_dataset, LabelEncoder};
