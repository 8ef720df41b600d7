//! ECS components for entities.
//!
//! Submodules overview:
//! - [`animator`] – named animation parameters written by gameplay systems
//! - [`clicktomove`] – click-to-move controller state and steering step
//! - [`destinationmarker`] – visibility of a click destination marker
//! - [`groundsurface`] – walkable ground rectangles and ray queries
//! - [`navagent`] – navigation agent that can own an entity's movement
//! - [`worldtransform`] – world-space position and orientation

pub mod animator;
pub mod clicktomove;
pub mod destinationmarker;
pub mod groundsurface;
pub mod navagent;
pub mod worldtransform;
