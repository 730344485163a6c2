//! # Context-Sensitive Dispatch
//!
//! The same user action picks a structurally different edit depending on
//! the selection mode and, in edge mode, on the shape of the selection.
//!
//! ## Smart Delete
//!
//! | Mode   | Action                                                     |
//! |--------|------------------------------------------------------------|
//! | Object | delete the selected objects                                |
//! | Vertex | delete the vertices and everything resting on them         |
//! | Edge   | closed border loop: delete every face touching the loop   |
//! |        | otherwise: dissolve the edges                              |
//! | Face   | delete the faces                                           |
//! | Curve  | delete the selected control points                         |
//!
//! ## Smart Extrude
//!
//! | Mode          | Action                                              |
//! |---------------|-----------------------------------------------------|
//! | Object        | duplicate the selected objects                      |
//! | Edge          | all border edges: extrude them; otherwise skip      |
//! | Vertex / Face | duplicate the selected elements                     |
//! | Curve         | extrude the selected control points                 |

mod delete;
mod extrude;


pub use delete::{delete_mesh_selection, smart_delete};
pub use extrude::{extrude_mesh_selection, smart_extrude, Extruded};
