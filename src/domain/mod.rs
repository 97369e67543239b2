//! Domain Layer
//!
//! Interface definitions for the external collaborators ngtw drives: the
//! CSS compiler, the purge engine, the filesystem monitor and the
//! `package.json` script injector.
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or processes directly
//! 2. **Ports & Adapters** - All I/O goes through trait-defined ports
//! 3. **Fakes in tests** - Application logic is tested against in-memory ports

pub mod ports;
