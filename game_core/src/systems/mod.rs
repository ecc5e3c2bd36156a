pub mod clouds;
pub mod collision;
pub mod obstacles;
pub mod player;

pub use clouds::*;
pub use collision::*;
pub use obstacles::*;
pub use player::*;
