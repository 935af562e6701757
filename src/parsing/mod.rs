//! Readers for batches of interchange strings.
//!
//! Input is plain text with one interchange string per line. A line may
//! start with a sample label followed by a tab:
//!
//! ```text
//! # label   profile
//! H37Rv     3481096A2C22806
//! 3481096A2C228061-2345678
//! ```
//!
//! Blank lines and `#` comments are skipped. The strings themselves are not
//! validated here; decoding them into a profile does that.

pub mod interchange;
