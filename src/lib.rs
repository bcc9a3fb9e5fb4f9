pub mod errors;
pub mod heap;
pub mod options;
pub mod ranking;
