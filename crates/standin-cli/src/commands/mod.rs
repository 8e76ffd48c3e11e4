pub mod demo;
pub mod sample;
pub mod synth;
pub mod token;
