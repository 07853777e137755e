//! Domain layer: entities, collaborator ports and repository traits.
//!
//! Everything here is infrastructure-free. Entities enforce their own
//! invariants, while the traits in [`collaborators`] and [`repositories`]
//! describe what the application layer needs from the outside world.

pub mod collaborators;
pub mod entities;
pub mod repositories;
