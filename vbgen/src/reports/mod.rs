//! Report data structures for commands.
//!
//! Commands build reports, then render them to an Output target.

mod check;
mod generate;
mod init;
mod output;

pub use check::{CheckReport, CheckStatus};
pub use generate::GenerateReport;
pub use init::InitReport;
pub use output::{Report, TerminalOutput};
