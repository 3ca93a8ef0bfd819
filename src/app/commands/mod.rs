pub mod alternate;
pub mod module_name;
