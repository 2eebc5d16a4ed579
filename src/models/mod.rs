pub mod schedule;
pub mod subject;
pub mod time;

pub use schedule::*;
pub use subject::*;
pub use time::*;
