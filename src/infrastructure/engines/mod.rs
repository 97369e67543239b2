//! External CSS engines, run as child processes
//!
//! Each engine is a command prefix (`npx tailwindcss`, `pnpm exec sass`,
//! ...) plus per-call arguments. The prefix comes from `NGTW_*_CMD` when
//! set, otherwise from the package runner detected in the project.

mod process;
mod purgecss;
mod runner;
mod tailwind;

pub use process::ToolCommand;
pub use purgecss::PurgeCssCli;
pub use runner::PackageRunner;
pub use tailwind::TailwindCli;
