pub mod build;
pub mod configure;
pub mod purge;
pub mod scripts;
pub mod watch;
