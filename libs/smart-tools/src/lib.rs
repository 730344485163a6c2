//! # Smart Tools
//!
//! Context-sensitive editing commands and modal gestures for a 3D editor,
//! built on [`smart_mesh`].
//!
//! ## Architecture
//!
//! ```text
//! PointerEvent ──► modal gestures (translate, extrude, radial editor)
//!                        │
//!                        ▼
//!               dispatch (smart delete / smart extrude) · lattice
//!                        │
//!                        ▼
//!               host seams (SceneHost, Viewport) ──► smart_mesh
//! ```
//!
//! Commands take the host as `&mut dyn SceneHost` and return a
//! [`Completion`]. Gestures are values threaded through
//! [`modal::GestureState`] one event at a time.
//!
//! ## Usage
//!
//! ```rust
//! use smart_mesh::{primitives, SelectionMode};
//! use smart_tools::host::{InMemoryScene, SceneHost};
//! use smart_tools::{dispatch, Completion};
//!
//! let mut scene = InMemoryScene::new(SelectionMode::Face);
//! let mesh = scene.add_object("Box", Some(primitives::cube(1.0))).mesh.as_mut().unwrap();
//! let (face, _) = mesh.faces().next().unwrap();
//! mesh.select_face(face, true).unwrap();
//!
//! assert_eq!(dispatch::smart_delete(&mut scene).unwrap(), Completion::Applied);
//! assert_eq!(scene.mesh().unwrap().face_count(), 5);
//! ```

pub mod dispatch;
pub mod error;
pub mod event;
pub mod host;
pub mod lattice;
pub mod modal;
pub mod radial;

pub use error::{Completion, SkipReason, ToolError, ToolResult};
pub use event::{Button, Key, Modifiers, PointerEvent};
pub use host::{InMemoryScene, OrthoViewport, SceneHost, TransformTarget, Viewport};
pub use lattice::{quick_ffd, LatticeCage};
pub use modal::{Gesture, GestureState, Invoked, Motion, SmartExtrude, SmartTranslate, ToolContext};
pub use radial::{RadialEditor, RadialModifier, RadialSymmetry};
