pub mod add;
pub mod del;
pub mod export;
pub mod limit;
pub mod totals;

pub use add::{AddLogic, EntryInput};
pub use del::DeleteLogic;
pub use export::ExportLogic;
pub use limit::LimitLogic;
pub use totals::TotalsLogic;
