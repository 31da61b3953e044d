//! CLI command implementations.
//!
//! One module per subcommand:
//! - `resolve`, `join`, `relative`: combine paths
//! - `normalize`, `is_absolute`, `to_namespaced_path`: inspect or rewrite one path
//! - `dirname`, `basename`, `extname`, `parse`, `format`: path components
//! - `call`: invoke any operation by name with JSON arguments
//! - `info`: show the effective dialect and host
//! - `validate`: check a configuration file
//! - `completions`: generate shell completions

pub mod basename;
pub mod call;
pub mod completions;
pub mod dirname;
pub mod extname;
pub mod format;
pub mod info;
pub mod is_absolute;
pub mod join;
pub mod normalize;
pub mod parse;
pub mod relative;
pub mod resolve;
pub mod to_namespaced_path;
pub mod validate;

pub use basename::BasenameCommand;
pub use call::CallCommand;
pub use completions::CompletionsCommand;
pub use dirname::DirnameCommand;
pub use extname::ExtnameCommand;
pub use format::FormatCommand;
pub use info::InfoCommand;
pub use is_absolute::IsAbsoluteCommand;
pub use join::JoinCommand;
pub use normalize::NormalizeCommand;
pub use parse::ParseCommand;
pub use relative::RelativeCommand;
pub use resolve::ResolveCommand;
pub use to_namespaced_path::ToNamespacedPathCommand;
pub use validate::ValidateCommand;
