// SPDX-License-Identifier: PMPL-1.0-or-later
//! Criterion catalogue: WCAG 2.2 success criteria checked by the rules,
//! each mapped to its ABNT NBR 17225:2025 counterpart where one exists.

use super::ExternalReferences;

/// A WCAG success criterion as reported in findings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Criterion {
    /// Success criterion number, e.g. "1.1.1"
    pub id: &'static str,
    /// Human label, e.g. "Text Alternatives"
    pub name: &'static str,
    /// ABNT NBR 17225 reference
    pub local_ref: Option<&'static str>,
}

impl Criterion {
    /// "1.1.1 - Text Alternatives"
    pub fn label(&self) -> String {
        format!("{} - {}", self.id, self.name)
    }

    /// References attached to findings for this criterion
    pub fn references(&self) -> ExternalReferences {
        ExternalReferences {
            standard: Some(format!("WCAG 2.2 - {}", self.id)),
            local: self.local_ref.map(String::from),
        }
    }
}

pub const TEXT_ALTERNATIVES: Criterion = Criterion {
    id: "1.1.1",
    name: "Text Alternatives",
    local_ref: Some("ABNT 5.1 - Text alternatives"),
};

pub const CAPTIONS: Criterion = Criterion {
    id: "1.2.2",
    name: "Captions",
    local_ref: Some("ABNT 5.2.2 - Synchronized captions"),
};

pub const SEMANTIC_STRUCTURE: Criterion = Criterion {
    id: "1.3.1",
    name: "Semantic Structure",
    local_ref: Some("ABNT 5.3 - Semantic structure"),
};

pub const TABLE_STRUCTURE: Criterion = Criterion {
    id: "1.3.1",
    name: "Table Structure",
    local_ref: Some("ABNT 5.3 - Semantic structure"),
};

pub const AUDIO_CONTROL: Criterion = Criterion {
    id: "1.4.2",
    name: "Audio Control",
    local_ref: Some("ABNT 5.4.2 - Playback control"),
};

pub const COLOR_CONTRAST: Criterion = Criterion {
    id: "1.4.3",
    name: "Color Contrast",
    local_ref: Some("ABNT 5.4.3 - Minimum contrast"),
};

pub const RESIZE_TEXT: Criterion = Criterion {
    id: "1.4.4",
    name: "Resize Text",
    local_ref: Some("ABNT 5.4.4 - Resizing"),
};

pub const REFLOW: Criterion = Criterion {
    id: "1.4.10",
    name: "Reflow",
    local_ref: Some("ABNT 5.4.10 - Visual adaptation"),
};

pub const KEYBOARD: Criterion = Criterion {
    id: "2.1.1",
    name: "Keyboard Navigation",
    local_ref: Some("ABNT 6.1 - Keyboard navigation"),
};

pub const BYPASS_BLOCKS: Criterion = Criterion {
    id: "2.4.1",
    name: "Bypass Blocks",
    local_ref: Some("ABNT 6.4.1 - Bypass blocks"),
};

pub const PAGE_TITLED: Criterion = Criterion {
    id: "2.4.2",
    name: "Page Titled",
    local_ref: Some("ABNT 6.4.2 - Page titles"),
};

pub const LINK_PURPOSE: Criterion = Criterion {
    id: "2.4.4",
    name: "Link Purpose",
    local_ref: Some("ABNT 6.4.4 - Link purpose"),
};

pub const PAGE_LANGUAGE: Criterion = Criterion {
    id: "3.1.1",
    name: "Language of Page",
    local_ref: Some("ABNT 7.1 - Page language"),
};

pub const CHANGE_ON_REQUEST: Criterion = Criterion {
    id: "3.2.5",
    name: "Change on Request",
    local_ref: Some("ABNT 7.2 - Predictability"),
};

pub const NAME_ROLE_VALUE: Criterion = Criterion {
    id: "4.1.2",
    name: "Name, Role, Value",
    local_ref: Some("ABNT 8.2 - Name, role and value"),
};

pub const ARIA_VALID: Criterion = Criterion {
    id: "4.1.2",
    name: "Valid ARIA",
    local_ref: Some("ABNT 8.2 - Name, role and value"),
};

pub const ARIA_REFERENCES: Criterion = Criterion {
    id: "4.1.2",
    name: "ARIA References",
    local_ref: Some("ABNT 8.2 - Name, role and value"),
};

/// Local-regulation criteria tracked in the report's local conformance map
pub const LOCAL_TRACKED: &[&str] = &[
    "5.1 - Text alternatives",
    "5.3 - Semantic structure",
    "6.1 - Keyboard navigation",
    "8.2 - Field identification",
];

/// Section number of a local reference: "ABNT 5.4.3 - Minimum contrast" -> "5.4.3"
pub fn local_section(reference: &str) -> Option<&str> {
    let head = reference.split('-').next()?.trim();
    let section = head.strip_prefix("ABNT").unwrap_or(head).trim();
    (!section.is_empty()).then_some(section)
}
