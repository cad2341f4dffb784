//!
//! The harness generator library.
//!

pub mod bracket_scanner;
pub mod contract;
pub mod fragment;
pub mod naming;

pub use self::bracket_scanner::find_matching_close;
pub use self::contract::function::mutability::Mutability;
pub use self::contract::function::Function;
pub use self::contract::input::Input;
pub use self::contract::Contract;
pub use self::fragment::constructor::default_statement;
pub use self::fragment::handler;
pub use self::fragment::header::section_header;
pub use self::fragment::proxy;
pub use self::naming::instance_name;
