pub mod cli;
pub mod error;
pub mod fact;
pub mod input;
pub mod payload;
pub mod run;
pub mod sink;
pub mod transport;
