// SPDX-License-Identifier: PMPL-1.0-or-later
//! Media rule - WCAG 1.2.2 Captions (Prerecorded) (Level A), 1.4.2 Audio Control (Level A)
//!
//! Checks media element accessibility:
//! - Video has at least one captions track
//! - Audio and video do not start playing on their own

use crate::document::{self, DocumentModel};
use crate::model::{criteria, Finding, Severity, WcagLevel};
use crate::rules::Rule;

/// Media accessibility rule
pub struct MediaRule;

impl Rule for MediaRule {
    fn name(&self) -> &str {
        "Multimedia"
    }

    fn description(&self) -> &str {
        "Checks video captions and autoplaying media (WCAG 1.2.2, 1.4.2)"
    }

    fn evaluate(&self, document: &DocumentModel) -> Vec<Finding> {
        let mut findings = Vec::new();

        for video in document.select("video") {
            let has_captions = video
                .descendants()
                .filter_map(scraper::ElementRef::wrap)
                .filter(|el| el.value().name() == "track")
                .any(|track| {
                    document::attr(&track, "kind")
                        .map(|kind| kind.trim().eq_ignore_ascii_case("captions"))
                        .unwrap_or(false)
                });

            if !has_captions {
                findings.push(
                    Finding::new(
                        &criteria::CAPTIONS,
                        Severity::Critical,
                        WcagLevel::A,
                        "Video without captions track",
                    )
                    .with_element(&document::snippet(&video))
                    .with_suggestion("Add a <track kind=\"captions\"> with synchronized captions")
                    .with_example(
                        "<video>\n  <track kind=\"captions\" src=\"captions.vtt\" srclang=\"en\">\n</video>",
                    ),
                );
            }

            if document::attr(&video, "autoplay").is_some() {
                findings.push(autoplay_finding(&video, "Video"));
            }
        }

        for audio in document.select("audio[autoplay]") {
            findings.push(autoplay_finding(&audio, "Audio"));
        }

        findings
    }
}

fn autoplay_finding(media: &scraper::ElementRef<'_>, kind: &str) -> Finding {
    Finding::new(
        &criteria::AUDIO_CONTROL,
        Severity::Serious,
        WcagLevel::A,
        &format!("{} starts playing automatically", kind),
    )
    .with_element(&document::snippet(media))
    .with_suggestion("Remove autoplay or provide a control to pause playback")
    .with_example(&format!("<{} controls src=\"media\"></{}>", kind.to_lowercase(), kind.to_lowercase()))
}
