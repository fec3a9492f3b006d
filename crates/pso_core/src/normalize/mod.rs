pub mod status;
pub mod text;
pub mod timestamps;

pub use status::{impact_label, normalize};
