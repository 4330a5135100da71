//=========================================================================
// Stock Objects
//=========================================================================
//
// Ready-made `GameObject`s for small games and tests:
//
// - `Door`:   replaces its scene when the traveller walks into it
// - `Walker`: moves with the arrow keys
//
//=========================================================================

mod door;
mod walker;

pub use door::{Destination, Door};
pub use walker::Walker;
