mod clan;
mod league;
mod report;
mod war;

pub use clan::*;
pub use league::*;
pub use report::*;
pub use war::*;
