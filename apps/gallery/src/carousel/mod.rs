// Carousel core: session order, wrap-around paging, random pages, and the
// per-session controller that drives slides between windows.

pub mod controller;
pub mod handlers;
pub mod order;
pub mod random_page;
pub mod transition;
pub mod viewport;

pub use controller::{CarouselController, CarouselError, Direction, SlideStart, ViewMode};
pub use order::PAGE_SIZE;
pub use random_page::pick_random_page;
pub use transition::{transition, PendingTransition, TransitionOutcome, TransitionSignal};
pub use viewport::Step;
