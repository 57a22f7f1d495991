mod format_options;
mod module_options;

pub use format_options::FormatOptions;
pub use module_options::ModuleOptions;
