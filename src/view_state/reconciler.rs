//! Presentation reconciler: state in, view regions out.
//!
//! [`reconcile`] is a pure function. The controller gathers its owned state
//! into [`ViewInputs`] and hands the resulting [`ViewModel`] to the surface.

use super::modal::{
    compare_modal, reference_modal, resolve_asset, CompareSource, ModalRequest, ModalView,
    SurfaceCaps,
};
use super::panels::{
    HistoryRow, ImagePanel, LivePanel, ReferencePanel, ReferenceTile, ResultPanel, StatusLine,
    Tone, Trigger, ViewModel,
};
use super::score::{match_score_text, score_label, ScoreTier};
use crate::models::{HistoryItem, Movement, ReferenceSet, StatusSnapshot, Verdict, VerifyOrigin};
use crate::state::{RefUploadStatus, SessionState, UploadFlow, UploadStage, VerifyResult};

/// Borrowed view of everything the reconciler reads.
#[derive(Debug, Clone, Copy)]
pub struct ViewInputs<'a> {
    pub session: SessionState,
    pub upload: &'a UploadFlow,
    pub status: Option<&'a StatusSnapshot>,
    pub references: Option<&'a ReferenceSet>,
    pub history: &'a [HistoryItem],
    pub ref_upload: Option<&'a RefUploadStatus>,
    pub modal: Option<ModalRequest>,
    pub uploads_root: &'a str,
    pub caps: SurfaceCaps,
}

pub fn reconcile(inputs: &ViewInputs<'_>) -> ViewModel {
    let session = inputs.session;
    let in_flight = inputs.upload.in_flight();

    ViewModel {
        movement: session.movement,
        mode: session.mode,
        live: session
            .mode
            .is_live()
            .then(|| live_panel(inputs.status, session.movement)),
        image: (!session.mode.is_live())
            .then(|| image_panel(inputs.upload.stage(), inputs.uploads_root)),
        references: reference_panel(inputs),
        history: inputs.history.iter().map(history_row).collect(),
        verify_button: Trigger {
            label: if in_flight == Some(VerifyOrigin::Upload) {
                "Verifying..."
            } else {
                "Verify Photo"
            },
            enabled: matches!(inputs.upload.stage(), UploadStage::Previewing { .. }),
        },
        instant_button: Trigger {
            label: if in_flight == Some(VerifyOrigin::Instant) {
                "Analyzing..."
            } else {
                "Instant Verify"
            },
            enabled: in_flight.is_none(),
        },
        modal: inputs.modal.and_then(|request| modal_view(request, inputs)),
    }
}

/// Headline for a verification result.
pub fn result_headline(origin: VerifyOrigin, matched: bool) -> &'static str {
    match (origin, matched) {
        (VerifyOrigin::Upload, true) => "VERIFIED (Correct)",
        (VerifyOrigin::Upload, false) => "INCORRECT POSE",
        (VerifyOrigin::Instant, true) => "INSTANT VERIFIED",
        (VerifyOrigin::Instant, false) => "INCORRECT",
    }
}

fn live_panel(status: Option<&StatusSnapshot>, movement: Movement) -> LivePanel {
    let Some(snapshot) = status else {
        return LivePanel {
            progress: 0.0,
            status: StatusLine {
                text: "Waiting for camera...".to_string(),
                tone: Tone::Neutral,
            },
            detected: "None".to_string(),
            scores: Movement::ALL.iter().map(|m| (*m, "-".to_string())).collect(),
            ref_counts: Movement::ALL.iter().map(|m| (*m, "0 Refs".to_string())).collect(),
            caption: score_label(None),
        };
    };

    LivePanel {
        progress: snapshot.progress_percent(),
        status: StatusLine {
            text: snapshot.status.clone(),
            tone: if snapshot.verified {
                Tone::Success
            } else {
                Tone::Neutral
            },
        },
        detected: if snapshot.detected.is_empty() {
            "None".to_string()
        } else {
            snapshot.detected.clone()
        },
        scores: Movement::ALL
            .iter()
            .map(|m| {
                let text = snapshot
                    .score_for(*m)
                    .map(|s| format!("{:.2}", s))
                    .unwrap_or_else(|| "-".to_string());
                (*m, text)
            })
            .collect(),
        ref_counts: Movement::ALL
            .iter()
            .map(|m| (*m, format!("{} Refs", snapshot.ref_count_for(*m))))
            .collect(),
        caption: score_label(snapshot.score_for(movement)),
    }
}

fn image_panel(stage: &UploadStage, uploads_root: &str) -> ImagePanel {
    match stage {
        UploadStage::Empty => ImagePanel::DropZone,
        UploadStage::Previewing { file } => ImagePanel::Preview {
            file_name: file.file_name.clone(),
            size: file.format_size(),
        },
        // The surface keeps showing what was there while the call runs
        UploadStage::Verifying { resume, .. } => image_panel(resume, uploads_root),
        UploadStage::Resulted { result } => ImagePanel::Result(result_panel(result, uploads_root)),
    }
}

fn result_panel(result: &VerifyResult, uploads_root: &str) -> ResultPanel {
    let outcome = &result.outcome;
    ResultPanel {
        headline: result_headline(result.origin, outcome.matched),
        tone: if outcome.matched {
            Tone::Success
        } else {
            Tone::Danger
        },
        processed_image: resolve_asset(&outcome.image_url, uploads_root),
        reference_image: outcome
            .best_ref
            .as_deref()
            .map(|r| resolve_asset(r, uploads_root)),
        tier: ScoreTier::from_score(Some(outcome.score)),
        score_text: match_score_text(Some(outcome.score)),
        note: outcome.note.clone(),
    }
}

fn reference_panel(inputs: &ViewInputs<'_>) -> ReferencePanel {
    let movement = inputs.session.movement;
    // Only the current movement's list is ever shown
    let current = inputs.references.filter(|set| set.movement == movement);
    let uploading = inputs.ref_upload.is_some_and(RefUploadStatus::is_in_flight);

    ReferencePanel {
        movement,
        count: current.map(ReferenceSet::len),
        tiles: current
            .map(|set| {
                set.items
                    .iter()
                    .map(|r| ReferenceTile {
                        id: r.id,
                        image: resolve_asset(&r.filepath_annotated, inputs.uploads_root),
                    })
                    .collect()
            })
            .unwrap_or_default(),
        upload_status: inputs.ref_upload.map(|status| StatusLine {
            text: status.text(),
            tone: match status {
                RefUploadStatus::Saved(_) => Tone::Success,
                RefUploadStatus::Rejected(_) => Tone::Danger,
                _ => Tone::Neutral,
            },
        }),
        upload: Trigger {
            label: "Upload References",
            enabled: !uploading,
        },
    }
}

fn history_row(item: &HistoryItem) -> HistoryRow {
    HistoryRow {
        id: item.id,
        timestamp: item.timestamp.clone(),
        title: format!("{} - {}", item.movement, item.result),
        verdict: item.result,
    }
}

fn modal_view(request: ModalRequest, inputs: &ViewInputs<'_>) -> Option<ModalView> {
    match request {
        ModalRequest::Reference(id) => {
            let set = inputs
                .references
                .filter(|set| set.movement == inputs.session.movement)?;
            let reference = set.get(id)?;
            Some(reference_modal(
                &reference.filepath_annotated,
                set.movement,
                inputs.uploads_root,
            ))
        }
        ModalRequest::History(id) => {
            let item = inputs.history.iter().find(|item| item.id == id)?;
            let source = CompareSource {
                image_path: &item.image_path,
                ref_path: item.reference_path(),
                movement: &item.movement,
                result: item.result.as_str(),
                timestamp: &item.timestamp,
                score: item.score,
            };
            Some(compare_modal(&source, inputs.uploads_root, inputs.caps))
        }
        ModalRequest::Result => {
            let result = inputs.upload.result()?;
            let outcome = &result.outcome;
            let source = CompareSource {
                image_path: &outcome.image_url,
                ref_path: outcome.best_ref.as_deref(),
                movement: result.movement.as_str(),
                result: Verdict::from_match(outcome.matched).as_str(),
                timestamp: &result.received_at,
                score: Some(outcome.score),
            };
            Some(compare_modal(&source, inputs.uploads_root, inputs.caps))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RecordId, Reference, StagedFile, VerifyOutcome};
    use crate::state::Mode;
    use std::collections::BTreeMap;

    const ROOT: &str = "/static/uploads";

    fn inputs<'a>(
        session: SessionState,
        upload: &'a UploadFlow,
        references: Option<&'a ReferenceSet>,
        history: &'a [HistoryItem],
    ) -> ViewInputs<'a> {
        ViewInputs {
            session,
            upload,
            status: None,
            references,
            history,
            ref_upload: None,
            modal: None,
            uploads_root: ROOT,
            caps: SurfaceCaps::default(),
        }
    }

    fn reference(id: i64, path: &str) -> Reference {
        Reference {
            id: RecordId(id),
            filepath_annotated: path.to_string(),
            filepath_orig: None,
            movement: None,
            timestamp: None,
        }
    }

    fn resulted_flow(origin_instant: bool, matched: bool) -> UploadFlow {
        let mut flow = UploadFlow::new();
        let attempt = if origin_instant {
            flow.begin_instant(Movement::PukulanDasar).unwrap()
        } else {
            flow.select(StagedFile::new("f.jpg", vec![1])).unwrap();
            flow.begin_verify(Movement::PukulanDasar).unwrap().0
        };
        flow.complete(
            attempt,
            VerifyOutcome {
                matched,
                score: 0.97,
                image_url: "/u/a.jpg".to_string(),
                best_ref: Some("/u/b.jpg".to_string()),
                note: None,
            },
            "01/05/2024 10:00:00".to_string(),
        );
        flow
    }

    #[test]
    fn test_mode_selects_region() {
        let flow = UploadFlow::new();
        let live = reconcile(&inputs(SessionState::default(), &flow, None, &[]));
        assert!(live.live.is_some());
        assert!(live.image.is_none());

        let session = SessionState::default().with_mode(Mode::Static);
        let static_view = reconcile(&inputs(session, &flow, None, &[]));
        assert!(static_view.live.is_none());
        assert_eq!(static_view.image, Some(ImagePanel::DropZone));
        // Reference manager stays visible in both modes
        assert_eq!(static_view.references.movement, Movement::SikapSiap);
    }

    #[test]
    fn test_live_panel_from_snapshot() {
        let flow = UploadFlow::new();
        let snapshot = StatusSnapshot {
            progress: 42.0,
            status: "VERIFIED".to_string(),
            detected: "Sikap Siap".to_string(),
            scores: BTreeMap::from([
                ("Sikap Siap".to_string(), 0.962),
                ("Pukulan Dasar".to_string(), 0.4),
            ]),
            ref_counts: BTreeMap::from([("Sikap Siap".to_string(), 3)]),
            verified: true,
            movement: None,
        };
        let mut view_inputs = inputs(SessionState::default(), &flow, None, &[]);
        view_inputs.status = Some(&snapshot);

        let live = reconcile(&view_inputs).live.unwrap();
        assert_eq!(live.progress, 42.0);
        assert_eq!(live.status.tone, Tone::Success);
        assert_eq!(live.detected, "Sikap Siap");
        assert_eq!(
            live.scores,
            vec![
                (Movement::SikapSiap, "0.96".to_string()),
                (Movement::PukulanDasar, "0.40".to_string())
            ]
        );
        assert_eq!(
            live.ref_counts,
            vec![
                (Movement::SikapSiap, "3 Refs".to_string()),
                (Movement::PukulanDasar, "0 Refs".to_string())
            ]
        );
        assert_eq!(live.caption, "very similar");
    }

    #[test]
    fn test_upload_result_panel() {
        let flow = resulted_flow(false, true);
        let session = SessionState::new(Movement::PukulanDasar, Mode::Static);
        let view = reconcile(&inputs(session, &flow, None, &[]));

        let Some(ImagePanel::Result(panel)) = view.image else {
            panic!("expected result panel");
        };
        assert_eq!(panel.headline, "VERIFIED (Correct)");
        assert_eq!(panel.tone, Tone::Success);
        assert_eq!(panel.tier.as_str(), "very similar");
        assert_eq!(panel.processed_image, "/u/a.jpg");
        assert_eq!(panel.reference_image.as_deref(), Some("/u/b.jpg"));
        assert_eq!(panel.score_text, "97.0% Match Score");
    }

    #[test]
    fn test_result_headlines() {
        assert_eq!(result_headline(VerifyOrigin::Upload, false), "INCORRECT POSE");
        assert_eq!(result_headline(VerifyOrigin::Instant, true), "INSTANT VERIFIED");
        assert_eq!(result_headline(VerifyOrigin::Instant, false), "INCORRECT");
    }

    #[test]
    fn test_triggers_while_verifying() {
        let mut flow = UploadFlow::new();
        flow.select(StagedFile::new("f.jpg", vec![1])).unwrap();
        let idle = reconcile(&inputs(SessionState::default(), &flow, None, &[]));
        assert_eq!(
            idle.verify_button,
            Trigger {
                label: "Verify Photo",
                enabled: true
            }
        );

        flow.begin_verify(Movement::SikapSiap).unwrap();
        let busy = reconcile(&inputs(
            SessionState::default().with_mode(Mode::Static),
            &flow,
            None,
            &[],
        ));
        assert_eq!(
            busy.verify_button,
            Trigger {
                label: "Verifying...",
                enabled: false
            }
        );
        assert!(!busy.instant_button.enabled);
        assert!(matches!(busy.image, Some(ImagePanel::Preview { .. })));
    }

    #[test]
    fn test_instant_trigger_label() {
        let mut flow = UploadFlow::new();
        flow.begin_instant(Movement::SikapSiap).unwrap();
        let view = reconcile(&inputs(SessionState::default(), &flow, None, &[]));
        assert_eq!(view.instant_button.label, "Analyzing...");
        assert!(!view.verify_button.enabled);
    }

    #[test]
    fn test_references_of_other_movement_not_shown() {
        let flow = UploadFlow::new();
        let set = ReferenceSet::new(Movement::SikapSiap, vec![reference(1, "a.jpg")]);
        let session = SessionState::default().with_movement(Movement::PukulanDasar);

        let view = reconcile(&inputs(session, &flow, Some(&set), &[]));
        assert_eq!(view.references.count, None);
        assert!(view.references.tiles.is_empty());
    }

    #[test]
    fn test_reference_tiles_resolve_paths() {
        let flow = UploadFlow::new();
        let set = ReferenceSet::new(
            Movement::SikapSiap,
            vec![reference(1, "annotated_ref_a.jpg"), reference(2, "annotated_ref_b.jpg")],
        );
        let view = reconcile(&inputs(SessionState::default(), &flow, Some(&set), &[]));
        assert_eq!(view.references.count, Some(2));
        assert_eq!(
            view.references.tiles[1].image,
            "/static/uploads/annotated_ref_b.jpg"
        );
    }

    #[test]
    fn test_upload_status_line() {
        let flow = UploadFlow::new();
        let status = RefUploadStatus::Rejected(Some("No files uploaded".to_string()));
        let mut view_inputs = inputs(SessionState::default(), &flow, None, &[]);
        view_inputs.ref_upload = Some(&status);

        let line = reconcile(&view_inputs).references.upload_status.unwrap();
        assert_eq!(line.text, "Error: No files uploaded");
        assert_eq!(line.tone, Tone::Danger);

        let in_flight = RefUploadStatus::InFlight;
        view_inputs.ref_upload = Some(&in_flight);
        assert!(!reconcile(&view_inputs).references.upload.enabled);
    }

    #[test]
    fn test_history_rows() {
        let flow = UploadFlow::new();
        let history = vec![HistoryItem {
            id: RecordId(3),
            timestamp: "2024-05-01 10:00:00".to_string(),
            movement: "Pukulan Dasar".to_string(),
            result: Verdict::Incorrect,
            image_path: "result_3.jpg".to_string(),
            ref_path: None,
            score: None,
        }];
        let view = reconcile(&inputs(SessionState::default(), &flow, None, &history));
        assert_eq!(view.history[0].title, "Pukulan Dasar - Incorrect");
        assert_eq!(view.history[0].verdict, Verdict::Incorrect);
    }

    #[test]
    fn test_result_modal() {
        let flow = resulted_flow(false, true);
        let mut view_inputs = inputs(SessionState::default(), &flow, None, &[]);
        view_inputs.modal = Some(ModalRequest::Result);

        let Some(ModalView::Compare(modal)) = reconcile(&view_inputs).modal else {
            panic!("expected compare modal");
        };
        assert_eq!(modal.title, "Pukulan Dasar - Correct");
        assert_eq!(modal.processed_image, "/u/a.jpg");
        assert_eq!(modal.reference_image, "/u/b.jpg");
        assert_eq!(modal.timestamp, "01/05/2024 10:00:00");
    }

    #[test]
    fn test_reference_modal_for_unknown_id_is_hidden() {
        let flow = UploadFlow::new();
        let set = ReferenceSet::new(Movement::SikapSiap, vec![reference(1, "a.jpg")]);
        let mut view_inputs = inputs(SessionState::default(), &flow, Some(&set), &[]);

        view_inputs.modal = Some(ModalRequest::Reference(RecordId(7)));
        assert!(reconcile(&view_inputs).modal.is_none());

        view_inputs.modal = Some(ModalRequest::Reference(RecordId(1)));
        assert!(matches!(
            reconcile(&view_inputs).modal,
            Some(ModalView::Single(_))
        ));
    }
}
