use std::fmt;

use serde::{de::value, de::IntoDeserializer, Deserialize, Serialize};

use crate::random::{DEFAULT_MAX, DEFAULT_MIN};
use crate::{Error, FixedIncrementer, Incrementable, RandomIncrementer, SequentialIncrementer};

#[derive(Copy, Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    Sequential,
    Fixed,
    Random,
}

impl std::str::FromStr for Strategy {
    type Err = value::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::deserialize(s.into_deserializer())
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.serialize(f)
    }
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum Config {
    Sequential {
        #[serde(default)]
        start: u32,
    },
    Fixed {
        #[serde(default = "default_fixed_value")]
        value: u32,
    },
    Random {
        #[serde(default = "default_random_min")]
        min: u32,
        #[serde(default = "default_random_max")]
        max: u32,
    },
}

fn default_fixed_value() -> u32 {
    1
}

fn default_random_min() -> u32 {
    DEFAULT_MIN
}

fn default_random_max() -> u32 {
    DEFAULT_MAX
}

impl Config {
    pub fn strategy(&self) -> Strategy {
        match self {
            Config::Sequential { .. } => Strategy::Sequential,
            Config::Fixed { .. } => Strategy::Fixed,
            Config::Random { .. } => Strategy::Random,
        }
    }

    pub fn build(self) -> Result<Box<dyn Incrementable + Send>, Error> {
        let incrementer: Box<dyn Incrementable + Send> = match self {
            Config::Sequential { start } => Box::new(SequentialIncrementer::with_start(start)),
            Config::Fixed { value } => Box::new(FixedIncrementer::with_value(value)),
            Config::Random { min, max } => Box::new(RandomIncrementer::with_range(min, max)?),
        };

        Ok(incrementer)
    }
}
