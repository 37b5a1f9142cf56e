pub mod boolean;
pub mod chamfer;
pub mod curves;
pub mod extrude;
pub mod fillet;
pub mod loft;
pub mod pattern;
pub mod primitives;
pub mod profiles;
pub mod query;
pub mod revolve;
pub mod session;
pub mod shape;
pub mod shell;
pub mod sweep;
pub mod transform;
pub mod types;

pub use boolean::{cut, intersect, union};
pub use chamfer::chamfer;
pub use curves::{
    make_angle_arc, make_helix, make_point, make_polyline, make_segment, make_spline,
    make_three_point_arc,
};
pub use extrude::extrude;
pub use fillet::fillet;
pub use loft::loft;
pub use pattern::{grid_pattern, linear_pattern, radial_pattern};
pub use primitives::{make_box, make_cylinder, make_sphere};
pub use profiles::{
    make_circle, make_ellipse, make_face_from, make_rectangle, make_thread_profile, make_triangle,
};
pub use query::{compound_members, list_edges, list_faces, step_string, tessellate, volume};
pub use revolve::revolve;
pub use session::Session;
pub use shape::{select_by_tag, Shape};
pub use shell::shell;
pub use sweep::{helical_sweep, sweep};
pub use transform::{mirror, rotate, translate};
pub use types::OpError;
