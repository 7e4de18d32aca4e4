pub mod ease;
pub mod player;
pub mod progress;
pub mod scene;
pub mod scroll;
pub mod snapshot;
pub mod stars;
pub mod story;
pub mod timeline;

pub use ease::*;
pub use player::*;
pub use progress::*;
pub use scene::*;
pub use snapshot::*;
pub use stars::*;
pub use story::*;
pub use timeline::*;
