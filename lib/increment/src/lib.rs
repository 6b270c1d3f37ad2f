mod config;
mod error;
mod fixed;
mod incrementable;
mod random;
mod sequential;

pub use config::{Config, Strategy};
pub use error::Error;
pub use fixed::FixedIncrementer;
pub use incrementable::Incrementable;
pub use random::RandomIncrementer;
pub use sequential::SequentialIncrementer;
