mod compare;
mod init;

pub use self::compare::{CompareResult, compare};
pub use self::init::init;
