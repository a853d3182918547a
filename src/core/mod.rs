pub mod carousel;
pub mod contact;
pub mod dashboard;
pub mod forms;
pub mod session;
pub mod templates;

pub use carousel::{Carousel, CarouselConfig};
pub use contact::{ContactForm, ContactMessage};
pub use dashboard::{ActionOutcome, Dashboard, Section};
pub use forms::FormData;
pub use session::{SessionManager, SessionState};
