mod assignment;
mod builder;
mod line;
mod overlay;
mod question;
mod serialize;

pub use assignment::Assignment;
pub use builder::extract_questions;
pub use line::read_lines;
pub use overlay::{OverlayOutcome, is_secret, overlay};
pub use question::{Annotation, EnvQuestion};
pub use serialize::{Config, build_env, merge, parse_config};
