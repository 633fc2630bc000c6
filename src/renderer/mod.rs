//! Rendering
//!
//! `scene` turns state into a `Frame`; `pipeline` paints its shapes with
//! WebGPU. Text (score, dialog) is drawn by the host in DOM.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use scene::{DialogView, Frame, Shape, build_frame, debug_text, score_text};
