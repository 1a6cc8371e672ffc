mod traits;

pub use traits::RefereeDirectory;
