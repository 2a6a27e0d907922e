mod common;
mod descriptors;
mod outcome;
mod points;
