pub mod dataset;
pub mod image_folder;
pub mod preprocessing;
