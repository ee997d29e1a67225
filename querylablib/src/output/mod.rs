//! Output: exercise reports and their text rendering.
//!
//! - **Report**: what an exercise produced (structured data + text listing)
//! - **Dumper**: renders any value as indented text up to a depth limit
//!
//! ## Example
//!
//! ```rust
//! use querylablib::output::Dumper;
//! use serde_json::json;
//!
//! let text = Dumper::new(1)
//!     .render(&json!({ "id": "ALFKI", "orders": [{ "total": 814.5 }] }))
//!     .unwrap();
//! assert_eq!(text, "id=ALFKI  orders=...\n  orders: total=814.5\n");
//! ```

pub mod dumper;
pub mod report;

pub use dumper::{format_number, render_report, write_report, Dumper, PLACEHOLDER};
pub use report::{Report, ReportEntry};
