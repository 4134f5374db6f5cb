use std::fmt::Write;

use crate::view_state::{
    ImagePanel, LivePanel, ModalView, ReferencePanel, ResultPanel, StatusLine, Tone, Trigger,
    ViewModel,
};

/// Line width for separators.
const LINE_WIDTH: usize = 60;

/// Icon prefix for a tone.
pub fn tone_icon(tone: Tone) -> &'static str {
    match tone {
        Tone::Neutral => "•",
        Tone::Success => "✓",
        Tone::Danger => "✗",
    }
}

/// ```text
/// POSE VERIFY - Pukulan Dasar [live]
/// ════════════════════════════════════════════════════════════
/// ```
fn header(out: &mut String, title: &str) {
    let _ = writeln!(out, "{}", title);
    let _ = writeln!(out, "{}", "═".repeat(LINE_WIDTH));
}

/// ```text
/// REFERENCES
/// ────────────────────────────────────────────────────────────
/// ```
fn section(out: &mut String, title: &str) {
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", title);
    let _ = writeln!(out, "{}", "─".repeat(LINE_WIDTH));
}

fn line(out: &mut String, icon: &str, message: &str) {
    let _ = writeln!(out, "  {} {}", icon, message);
}

fn status(out: &mut String, status: &StatusLine) {
    line(out, tone_icon(status.tone), &status.text);
}

fn trigger(trigger: &Trigger) -> String {
    if trigger.enabled {
        format!("[{}]", trigger.label)
    } else {
        format!("({})", trigger.label)
    }
}

fn progress_bar(percent: f64) -> String {
    const WIDTH: usize = 20;
    let filled = ((percent.clamp(0.0, 100.0) / 100.0) * WIDTH as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(WIDTH - filled))
}

fn live(out: &mut String, panel: &LivePanel) {
    section(out, "LIVE");
    status(out, &panel.status);
    line(out, " ", &format!("{} {:.0}%", progress_bar(panel.progress), panel.progress));
    line(out, " ", &format!("Detected: {}", panel.detected));
    for ((movement, score), (_, refs)) in panel.scores.iter().zip(&panel.ref_counts) {
        line(out, " ", &format!("{:<14} {:>6}  {}", movement.as_str(), score, refs));
    }
    line(out, " ", panel.caption);
}

fn result(out: &mut String, panel: &ResultPanel) {
    line(out, tone_icon(panel.tone), panel.headline);
    line(out, " ", &format!("{} ({})", panel.score_text, panel.tier));
    line(out, " ", &format!("Processed: {}", panel.processed_image));
    line(
        out,
        " ",
        &format!(
            "Reference: {}",
            panel.reference_image.as_deref().unwrap_or("No Match Found")
        ),
    );
    if let Some(note) = &panel.note {
        line(out, " ", note);
    }
}

fn image(out: &mut String, panel: &ImagePanel) {
    section(out, "IMAGE");
    match panel {
        ImagePanel::DropZone => line(out, " ", "No image selected (select <path>)"),
        ImagePanel::Preview { file_name, size } => {
            line(out, " ", &format!("{} ({})", file_name, size))
        }
        ImagePanel::Result(panel) => result(out, panel),
    }
}

fn references(out: &mut String, panel: &ReferencePanel) {
    let count = panel
        .count
        .map(|n| n.to_string())
        .unwrap_or_else(|| "...".to_string());
    section(out, &format!("REFERENCES - {} ({})", panel.movement, count));
    for tile in &panel.tiles {
        line(out, " ", &format!("#{} {}", tile.id, tile.image));
    }
    if let Some(upload_status) = &panel.upload_status {
        status(out, upload_status);
    }
    line(out, " ", &trigger(&panel.upload));
}

/// Render a whole frame.
pub fn render_view(view: &ViewModel) -> String {
    let mut out = String::new();
    header(
        &mut out,
        &format!("POSE VERIFY - {} [{}]", view.movement, view.mode),
    );

    if let Some(panel) = &view.live {
        live(&mut out, panel);
    }
    if let Some(panel) = &view.image {
        image(&mut out, panel);
    }
    let _ = writeln!(
        out,
        "  {}  {}",
        trigger(&view.verify_button),
        trigger(&view.instant_button)
    );

    references(&mut out, &view.references);

    section(&mut out, "HISTORY");
    if view.history.is_empty() {
        line(&mut out, " ", "No history yet");
    }
    for row in &view.history {
        line(
            &mut out,
            " ",
            &format!("#{} {}  {}", row.id, row.timestamp, row.title),
        );
    }

    if let Some(modal) = &view.modal {
        out.push_str(&render_modal(modal));
    }
    out
}

/// Render an open modal.
pub fn render_modal(modal: &ModalView) -> String {
    let mut out = String::new();
    match modal {
        ModalView::Single(single) => {
            section(&mut out, &single.caption);
            line(&mut out, " ", &single.image);
        }
        ModalView::Compare(compare) => {
            section(&mut out, &compare.title);
            line(&mut out, " ", &compare.timestamp);
            line(&mut out, " ", &format!("Processed: {}", compare.processed_image));
            line(&mut out, " ", &format!("Reference: {}", compare.reference_image));
            line(&mut out, " ", &format!("{} ({})", compare.score_text, compare.tier));
            line(&mut out, " ", compare.analysis);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Movement, RecordId, Verdict};
    use crate::state::Mode;
    use crate::view_state::{
        CompareModal, HistoryRow, ReferenceTile, ScoreTier, SingleModal,
    };

    fn base_view() -> ViewModel {
        ViewModel {
            movement: Movement::PukulanDasar,
            mode: Mode::Static,
            live: None,
            image: Some(ImagePanel::DropZone),
            references: ReferencePanel {
                movement: Movement::PukulanDasar,
                count: Some(1),
                tiles: vec![ReferenceTile {
                    id: RecordId(3),
                    image: "/static/uploads/p1.jpg".to_string(),
                }],
                upload_status: None,
                upload: Trigger {
                    label: "Upload References",
                    enabled: true,
                },
            },
            history: vec![],
            verify_button: Trigger {
                label: "Verify Photo",
                enabled: false,
            },
            instant_button: Trigger {
                label: "Instant Verify",
                enabled: true,
            },
            modal: None,
        }
    }

    #[test]
    fn test_render_static_frame() {
        let out = render_view(&base_view());
        assert!(out.starts_with("POSE VERIFY - Pukulan Dasar [static]\n"));
        assert!(out.contains("No image selected"));
        assert!(out.contains("(Verify Photo)  [Instant Verify]"));
        assert!(out.contains("REFERENCES - Pukulan Dasar (1)"));
        assert!(out.contains("#3 /static/uploads/p1.jpg"));
        assert!(out.contains("No history yet"));
    }

    #[test]
    fn test_render_result_and_history() {
        let mut view = base_view();
        view.image = Some(ImagePanel::Result(ResultPanel {
            headline: "VERIFIED (Correct)",
            tone: Tone::Success,
            processed_image: "/static/uploads/out.jpg".to_string(),
            reference_image: None,
            tier: ScoreTier::VerySimilar,
            score_text: "97.0% Match Score".to_string(),
            note: None,
        }));
        view.history = vec![HistoryRow {
            id: RecordId(9),
            timestamp: "01/02/2026 10:00:00".to_string(),
            title: "Pukulan Dasar - Correct".to_string(),
            verdict: Verdict::Correct,
        }];

        let out = render_view(&view);
        assert!(out.contains("✓ VERIFIED (Correct)"));
        assert!(out.contains("97.0% Match Score (very similar)"));
        assert!(out.contains("Reference: No Match Found"));
        assert!(out.contains("#9 01/02/2026 10:00:00  Pukulan Dasar - Correct"));
    }

    #[test]
    fn test_render_pending_reference_count() {
        let mut view = base_view();
        view.references.count = None;
        view.references.tiles.clear();
        assert!(render_view(&view).contains("REFERENCES - Pukulan Dasar (...)"));
    }

    #[test]
    fn test_render_modals() {
        let single = render_modal(&ModalView::Single(SingleModal {
            image: "/static/uploads/a.jpg".to_string(),
            caption: "Reference for Sikap Siap".to_string(),
        }));
        assert!(single.contains("Reference for Sikap Siap"));

        let compare = render_modal(&ModalView::Compare(CompareModal {
            processed_image: "/p.jpg".to_string(),
            reference_image: "/r.jpg".to_string(),
            score_text: "90.0% Match Score".to_string(),
            title: "Pukulan Dasar - Correct".to_string(),
            timestamp: "now".to_string(),
            tier: ScoreTier::GoodSimilarity,
            analysis: ScoreTier::GoodSimilarity.analysis(),
        }));
        assert!(compare.contains("90.0% Match Score (good similarity)"));
        assert!(compare.contains("Kemiripan Baik"));
    }

    #[test]
    fn test_progress_bar_bounds() {
        assert_eq!(progress_bar(0.0), "░".repeat(20));
        assert_eq!(progress_bar(150.0), "█".repeat(20));
    }
}
