pub mod events;
pub mod location;
pub mod passes;
pub mod sky;

pub use events::*;
pub use location::*;
pub use passes::*;
pub use sky::*;
