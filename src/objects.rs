mod history;
mod js_error;
mod prefs;
mod record;

pub use history::*;
pub use js_error::*;
pub use prefs::*;
pub use record::*;
