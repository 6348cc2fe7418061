//! Structure specification model and parser for vaultlint.
//!
//! A specification declares which directories and files a vault is expected
//! to contain, which of them are optional, and whether undeclared ("extra")
//! entries are tolerated at each level:
//!
//! ```yaml
//! allow_extra_dirs: false
//! allow_extra_files: true
//! structure:
//!   - type: dir
//!     name: .obsidian
//!   - type: dir
//!     name: notes
//!     allow_extra_dirs: true
//!     children:
//!       - type: file
//!         name: index.md
//!         optional: true
//! ```
//!
//! [`parse_spec`] turns loosely-typed configuration data into the typed
//! model in [`model`]; [`load_spec`] reads that data from disk.

pub mod emit;
pub mod error;
pub mod loader;
pub mod model;
pub mod parser;

pub use emit::{save_spec, to_value, to_yaml_string};
pub use error::{Result, SpecError, SpecErrorKind};
pub use loader::{load_and_parse, load_spec};
pub use model::{
    DirNode, EffectivePolicy, FileNode, GlobalSettings, Node, ROOT_NAME, RootSpec, is_valid_name,
};
pub use parser::parse_spec;
