pub mod colors;
pub mod editor;

pub use colors::*;
pub use editor::{EditorCommand, EnvProvider, SystemEnv, launch, resolve_command};
