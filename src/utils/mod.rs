mod config;
mod fps_limit;

pub use config::Config;
pub use fps_limit::{Clock, FpsLimiter, Unpaced};
