pub mod constants;
pub mod content;
pub mod markup;
pub mod particles;
pub mod state;
pub mod timestep;

pub use constants::*;
pub use particles::*;
pub use state::*;
pub use timestep::*;
