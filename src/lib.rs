// SPDX-License-Identifier: PMPL-1.0-or-later
//! Pageauditbot - WCAG 2.2 / ABNT NBR 17225:2025 page accessibility auditor
//!
//! Audits a single HTML document: fetches it (or reads it from disk),
//! parses it leniently, runs an ordered catalogue of rules over the tree and
//! aggregates the findings into a scored report with conformance verdicts
//! and prioritized recommendations.
//!
//! ## Rules
//!
//! - **Text Alternatives** (1.1.1): image and image-input alt text
//! - **Semantic Structure** (1.3.1): headings, landmarks, list-like markup
//! - **Color Contrast** (1.4.3): inline color pairs flagged for manual review
//! - **Keyboard Operability** (2.1.1/2.4.1): clickable containers, skip links
//! - **Form Labels** (4.1.2): label association and required flags
//! - **Multimedia** (1.2.2/1.4.2): captions and autoplay
//! - **Page Title** (2.4.2): presence and length
//! - **Page Language** (3.1.1): `lang` on the root element
//! - **Link Purpose** (2.4.4/3.2.5): empty, generic and new-window links
//! - **Table Structure** (1.3.1): captions, header cells, scope
//! - **ARIA Validity** (4.1.2): roles and `aria-labelledby` targets
//! - **Responsive Viewport** (1.4.10/1.4.4): viewport presence and zoom locking
//!
//! ## Example
//!
//! ```no_run
//! use pageauditbot::auditor::Auditor;
//!
//! let report = Auditor::default().audit_html("inline", "<html lang=\"en\"></html>");
//! println!("score: {:.2}", report.score());
//! ```

pub mod auditor;
pub mod config;
pub mod document;
pub mod engine;
pub mod error;
pub mod fetch;
pub mod model;
pub mod report;
pub mod rules;
pub mod scoring;

pub use auditor::Auditor;
pub use error::{AuditError, FetchError, Result};
pub use model::{Finding, Severity, WcagLevel};
pub use report::Report;
