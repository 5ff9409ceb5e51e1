#![deny(unsafe_code)]

//! Screening session: holds the loaded dataset and user controls, reduces
//! [`Command`]s and derives a [`ScreeningView`] after each one.

pub mod command;
pub mod error;
pub mod export;
pub mod screener;
pub mod view;

pub use command::{Command, FilterChange, PageChange, ViewMode};
pub use error::{CoreError, Result};
pub use export::{EXPORT_SHEET_NAME, SCORE_EXPORT_HEADER, STATUS_EXPORT_HEADER};
pub use screener::Screener;
pub use view::ScreeningView;
