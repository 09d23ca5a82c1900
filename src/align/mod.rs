pub mod edit;
pub mod global;

pub use edit::{edit_distance, edit_distance_matrix};
pub use global::{global_align, global_alignment_score, GlobalAlignment, ScoreMatrix};
