pub mod step;
pub mod stl;
pub mod types;

pub use step::export_step;
pub use stl::{export_stl, render_mesh_to_stl, StlOptions};
pub use types::ExportError;
