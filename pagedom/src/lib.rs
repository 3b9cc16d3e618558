pub mod animation;
pub mod element;
pub mod error;
pub mod focus;
pub mod location;
pub mod page;
pub mod render;
pub mod transitions;

pub use animation::{AnimationState, SlideHandle, SlideOutcome};
pub use element::{Content, Display, Element};
pub use error::DomError;
pub use focus::FocusState;
pub use location::Location;
pub use page::{Dom, Page};
pub use transitions::{Easing, SlideDirection, TransitionConfig};
