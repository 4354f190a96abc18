pub mod choice;
pub mod chooser;
pub mod error;
pub mod linear;
pub mod random;

pub use choice::Choice;
pub use chooser::Chooser;
pub use error::ChooserError;
pub use random::RandomSource;
