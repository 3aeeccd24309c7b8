pub mod completion;
pub mod quote;
