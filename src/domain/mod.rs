mod document;
mod ledger;
mod money;
mod note;

pub use document::*;
pub use ledger::*;
pub use money::*;
pub use note::*;
