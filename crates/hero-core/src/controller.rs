use crate::error::Result;
use crate::flow::{Flow, FlowKind};
use crate::hero::{HeroData, StagePayload};
use crate::paths;
use crate::session::{SessionFile, SessionRecord};
use crate::store::RecordStore;
use crate::types::Stage;
use std::path::Path;

// ---------------------------------------------------------------------------
// Persistence receipts
// ---------------------------------------------------------------------------

/// Outcome of the best-effort remote mirror after a local write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteSync {
    /// No remote store connected.
    Skipped,
    Synced,
    /// The remote write failed; the local write already succeeded and the
    /// journey carries on. Callers decide whether to mention it.
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistReceipt {
    pub remote: RemoteSync,
}

impl PersistReceipt {
    pub fn remote_failure(&self) -> Option<&str> {
        match &self.remote {
            RemoteSync::Failed(reason) => Some(reason),
            _ => None,
        }
    }
}

/// What a remote resume found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResumeOutcome {
    Resumed { stage: Stage },
    /// No usable prior session; journey starts at defaults.
    Fresh,
    /// The query itself failed. Non-fatal: state stays at defaults.
    RemoteUnavailable { error: String },
}

// ---------------------------------------------------------------------------
// StageController
// ---------------------------------------------------------------------------

struct RemoteLink {
    store: Box<dyn RecordStore>,
    user_id: String,
}

/// The journey state machine. Owns the active stage, the accreting hero
/// data and the `returning` flag, and drives persistence on every completed
/// forward transition: local write first, then a best-effort remote mirror.
///
/// `advance`, `retreat`, `restart` and `resume` are the only mutators.
/// A remote resume, when connected, takes precedence over whatever the
/// local file restored.
pub struct StageController {
    flow: &'static Flow,
    stage: Stage,
    data: HeroData,
    returning: bool,
    session: SessionFile,
    remote: Option<RemoteLink>,
}

// Manual impl: `remote` holds a `Box<dyn RecordStore>`, which has no Debug
// bound, so the derive is unavailable.
impl std::fmt::Debug for StageController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StageController")
            .field("kind", &self.flow.kind())
            .field("stage", &self.stage)
            .field("data", &self.data)
            .field("returning", &self.returning)
            .finish_non_exhaustive()
    }
}

impl StageController {
    /// Fresh journey at the flow's entry stage.
    pub fn new(root: &Path, kind: FlowKind) -> StageController {
        let flow = kind.flow();
        StageController {
            flow,
            stage: flow.entry(),
            data: HeroData::default(),
            returning: false,
            session: SessionFile::new(root),
            remote: None,
        }
    }

    /// Journey restored from the local session file when one exists and its
    /// stage belongs to this flow; otherwise a fresh journey. A local
    /// restore does not mark the session as returning; only a remote
    /// resume does.
    pub fn bootstrap(root: &Path, kind: FlowKind) -> Result<StageController> {
        let mut controller = StageController::new(root, kind);
        if let Some(record) = controller.session.load()? {
            if controller.flow.contains(record.active_step) {
                controller.stage = record.active_step;
                controller.data = record.hero_data;
            }
        }
        Ok(controller)
    }

    /// Attach a remote record store keyed by `user_id`.
    pub fn connect_remote(
        &mut self,
        store: Box<dyn RecordStore>,
        user_id: impl Into<String>,
    ) -> Result<()> {
        let user_id = user_id.into();
        paths::validate_user_id(&user_id)?;
        self.remote = Some(RemoteLink { store, user_id });
        Ok(())
    }

    pub fn flow(&self) -> &'static Flow {
        self.flow
    }

    pub fn kind(&self) -> FlowKind {
        self.flow.kind()
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn data(&self) -> &HeroData {
        &self.data
    }

    pub fn is_returning(&self) -> bool {
        self.returning
    }

    /// Move forward along a flow edge, merging the payload, then persist.
    /// Rejected transitions leave stage and data untouched.
    pub fn advance(&mut self, target: Stage, payload: StagePayload) -> Result<PersistReceipt> {
        self.flow.validate_advance(self.stage, target)?;
        self.data.apply(payload);
        self.stage = target;
        self.persist()
    }

    /// Step back to the stage's predecessor in the flow. A no-op at the
    /// entry stage. Touches neither hero data nor the persisted record:
    /// recovery always lands on the last completed forward transition.
    pub fn retreat(&mut self) -> Stage {
        if let Some(prev) = self.flow.predecessor(self.stage) {
            self.stage = prev;
        }
        self.stage
    }

    /// Persist the current stage and data outside a forward transition.
    /// `retreat` never persists on its own; frontends that want a retreat
    /// to survive a process exit checkpoint explicitly.
    pub fn checkpoint(&self) -> Result<PersistReceipt> {
        self.persist()
    }

    /// Back to the entry stage with everything cleared: hero data, the
    /// returning flag, the local session file, and (best-effort) the
    /// remote record for the current user.
    pub fn restart(&mut self) -> Result<PersistReceipt> {
        self.stage = self.flow.entry();
        self.data = HeroData::default();
        self.returning = false;
        self.session.clear()?;

        let remote = match &self.remote {
            None => RemoteSync::Skipped,
            Some(link) => match link.store.delete_session(&link.user_id) {
                Ok(()) => RemoteSync::Synced,
                Err(e) => RemoteSync::Failed(e.to_string()),
            },
        };
        Ok(PersistReceipt { remote })
    }

    /// Ask the remote store for a prior session. On a hit the stored stage
    /// and data replace the current ones and the session is marked
    /// returning. Records naming a stage outside this flow are stale and
    /// ignored. Query failure is reported, not raised.
    pub fn resume(&mut self) -> Result<ResumeOutcome> {
        let Some(link) = &self.remote else {
            return Ok(ResumeOutcome::Fresh);
        };
        match link.store.get_session(&link.user_id) {
            Ok(Some(record)) if self.flow.contains(record.active_step) => {
                self.stage = record.active_step;
                self.data = record.hero_data;
                self.returning = true;
                Ok(ResumeOutcome::Resumed { stage: self.stage })
            }
            Ok(_) => Ok(ResumeOutcome::Fresh),
            Err(e) => Ok(ResumeOutcome::RemoteUnavailable {
                error: e.to_string(),
            }),
        }
    }

    // Local write first; only then the remote mirror. Exactly one persist
    // per completed transition.
    fn persist(&self) -> Result<PersistReceipt> {
        let record = SessionRecord::new(self.stage, self.data.clone());
        self.session.save(&record)?;

        let remote = match &self.remote {
            None => RemoteSync::Skipped,
            Some(link) => match link.store.save_session(&link.user_id, &record) {
                Ok(_) => RemoteSync::Synced,
                Err(e) => RemoteSync::Failed(e.to_string()),
            },
        };
        Ok(PersistReceipt { remote })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HeroError;
    use crate::gates::Gate;
    use crate::hero::tests::{sample_identity, sample_mantras, sample_story};
    use crate::store::MemoryRecordStore;
    use crate::types::{Authority, HeroType};
    use std::sync::Arc;
    use tempfile::TempDir;

    fn gate(n: u8) -> Gate {
        Gate::new(n).unwrap()
    }

    fn gates_payload() -> StagePayload {
        StagePayload::Gates {
            personality_sun: gate(1),
            design_sun: gate(8),
        }
    }

    /// Remote store that fails every call, for soft-failure paths.
    struct UnreachableStore;

    impl RecordStore for UnreachableStore {
        fn get_session(&self, _user_id: &str) -> Result<Option<SessionRecord>> {
            Err(HeroError::RemoteStore("connection refused".to_string()))
        }
        fn save_session(&self, _user_id: &str, _record: &SessionRecord) -> Result<SessionRecord> {
            Err(HeroError::RemoteStore("connection refused".to_string()))
        }
        fn delete_session(&self, _user_id: &str) -> Result<()> {
            Err(HeroError::RemoteStore("connection refused".to_string()))
        }
    }

    /// Shares one memory store across a controller and the test body.
    struct SharedStore(Arc<MemoryRecordStore>);

    impl RecordStore for SharedStore {
        fn get_session(&self, user_id: &str) -> Result<Option<SessionRecord>> {
            self.0.get_session(user_id)
        }
        fn save_session(&self, user_id: &str, record: &SessionRecord) -> Result<SessionRecord> {
            self.0.save_session(user_id, record)
        }
        fn delete_session(&self, user_id: &str) -> Result<()> {
            self.0.delete_session(user_id)
        }
    }

    fn walk_express_to_final(controller: &mut StageController) {
        controller
            .advance(Stage::Input, StagePayload::Empty)
            .unwrap();
        controller.advance(Stage::Reveal, gates_payload()).unwrap();
        controller
            .advance(
                Stage::Mythos,
                StagePayload::Revelation {
                    identity: sample_identity(),
                    mantras: sample_mantras(),
                },
            )
            .unwrap();
        controller
            .advance(
                Stage::Final,
                StagePayload::Mythos {
                    story: sample_story(),
                },
            )
            .unwrap();
    }

    #[test]
    fn express_journey_accretes_to_completion() {
        let dir = TempDir::new().unwrap();
        let mut controller = StageController::new(dir.path(), FlowKind::Express);
        assert_eq!(controller.stage(), Stage::Welcome);

        walk_express_to_final(&mut controller);

        assert_eq!(controller.stage(), Stage::Final);
        assert!(controller.data().is_complete());
        assert_eq!(controller.data().evolution_gate, Some(gate(23)));
        assert_eq!(controller.data().purpose_gate, Some(gate(30)));
        assert!(controller.flow().is_terminal(controller.stage()));
    }

    #[test]
    fn invalid_transition_changes_nothing() {
        let dir = TempDir::new().unwrap();
        let mut controller = StageController::new(dir.path(), FlowKind::Express);

        let err = controller
            .advance(Stage::Mythos, StagePayload::Empty)
            .unwrap_err();
        assert!(matches!(err, HeroError::InvalidTransition { .. }));
        assert_eq!(controller.stage(), Stage::Welcome);
        assert!(controller.data().is_empty());
        // Nothing persisted either.
        assert!(SessionFile::new(dir.path()).load().unwrap().is_none());
    }

    #[test]
    fn advance_writes_local_record() {
        let dir = TempDir::new().unwrap();
        let mut controller = StageController::new(dir.path(), FlowKind::Express);
        controller
            .advance(Stage::Input, StagePayload::Empty)
            .unwrap();
        let receipt = controller.advance(Stage::Reveal, gates_payload()).unwrap();
        assert_eq!(receipt.remote, RemoteSync::Skipped);

        let record = SessionFile::new(dir.path()).load().unwrap().unwrap();
        assert_eq!(record.active_step, Stage::Reveal);
        assert_eq!(record.hero_data.personality_sun, Some(gate(1)));
        assert!(record.hero_data.has_gates());
    }

    #[test]
    fn retreat_moves_stage_but_keeps_data_and_record() {
        let dir = TempDir::new().unwrap();
        let mut controller = StageController::new(dir.path(), FlowKind::Express);
        controller
            .advance(Stage::Input, StagePayload::Empty)
            .unwrap();
        controller.advance(Stage::Reveal, gates_payload()).unwrap();

        let before = controller.data().clone();
        assert_eq!(controller.retreat(), Stage::Input);
        assert_eq!(controller.data(), &before);

        // The persisted record still reflects the completed transition.
        let record = SessionFile::new(dir.path()).load().unwrap().unwrap();
        assert_eq!(record.active_step, Stage::Reveal);
    }

    #[test]
    fn retreat_then_advance_roundtrip_preserves_data() {
        let dir = TempDir::new().unwrap();
        let mut controller = StageController::new(dir.path(), FlowKind::Express);
        controller
            .advance(Stage::Input, StagePayload::Empty)
            .unwrap();
        controller.advance(Stage::Reveal, gates_payload()).unwrap();

        let before = controller.data().clone();
        controller.retreat();
        controller
            .advance(Stage::Reveal, StagePayload::Empty)
            .unwrap();
        assert_eq!(controller.data(), &before);
    }

    #[test]
    fn checkpoint_persists_a_retreat() {
        let dir = TempDir::new().unwrap();
        let mut controller = StageController::new(dir.path(), FlowKind::Express);
        controller
            .advance(Stage::Input, StagePayload::Empty)
            .unwrap();
        controller.advance(Stage::Reveal, gates_payload()).unwrap();

        controller.retreat();
        controller.checkpoint().unwrap();

        let record = SessionFile::new(dir.path()).load().unwrap().unwrap();
        assert_eq!(record.active_step, Stage::Input);
        assert!(record.hero_data.has_gates());
    }

    #[test]
    fn retreat_at_entry_is_a_noop() {
        let dir = TempDir::new().unwrap();
        let mut controller = StageController::new(dir.path(), FlowKind::Guided);
        assert_eq!(controller.retreat(), Stage::Welcome);
        assert_eq!(controller.stage(), Stage::Welcome);
    }

    #[test]
    fn retreat_is_graph_aware_after_detour() {
        let dir = TempDir::new().unwrap();
        let mut controller = StageController::new(dir.path(), FlowKind::Guided);
        controller
            .advance(Stage::TypeSelection, StagePayload::Empty)
            .unwrap();
        controller
            .advance(
                Stage::TypeReveal,
                StagePayload::TypeChoice {
                    hero_type: HeroType::Generator,
                },
            )
            .unwrap();
        controller
            .advance(Stage::ProfileSelection, StagePayload::Empty)
            .unwrap();
        controller
            .advance(
                Stage::ProfileReveal,
                StagePayload::ProfileChoice {
                    profile: "3/5".parse().unwrap(),
                },
            )
            .unwrap();
        controller
            .advance(Stage::AuthoritySelection, StagePayload::Empty)
            .unwrap();

        // Back lands on the main path, not the detour.
        assert_eq!(controller.retreat(), Stage::ProfileSelection);
        assert_eq!(controller.data().profile.map(|p| p.as_str()), Some("3/5"));
    }

    #[test]
    fn guided_journey_reaches_final_with_grand_revelation() {
        let dir = TempDir::new().unwrap();
        let mut controller = StageController::new(dir.path(), FlowKind::Guided);
        controller
            .advance(Stage::TypeSelection, StagePayload::Empty)
            .unwrap();
        controller
            .advance(
                Stage::TypeReveal,
                StagePayload::TypeChoice {
                    hero_type: HeroType::Projector,
                },
            )
            .unwrap();
        controller
            .advance(Stage::ProfileSelection, StagePayload::Empty)
            .unwrap();
        controller
            .advance(
                Stage::AuthoritySelection,
                StagePayload::ProfileChoice {
                    profile: "5/1".parse().unwrap(),
                },
            )
            .unwrap();
        controller
            .advance(
                Stage::GateInput,
                StagePayload::AuthorityChoice {
                    authority: Authority::SelfProjected,
                },
            )
            .unwrap();
        controller
            .advance(Stage::FinalReveal, gates_payload())
            .unwrap();
        controller
            .advance(
                Stage::Final,
                StagePayload::GrandRevelation {
                    identity: sample_identity(),
                    mantras: sample_mantras(),
                    story: sample_story(),
                },
            )
            .unwrap();

        assert!(controller.data().is_complete());
        assert_eq!(controller.data().hero_type, Some(HeroType::Projector));
        assert_eq!(
            controller.data().authority,
            Some(Authority::SelfProjected)
        );
        let record = SessionFile::new(dir.path()).load().unwrap().unwrap();
        assert_eq!(record.active_step, Stage::Final);
        assert!(record.hero_data.story.is_some());
    }

    #[test]
    fn restart_clears_local_and_remote() {
        let dir = TempDir::new().unwrap();
        let shared = Arc::new(MemoryRecordStore::new());
        let mut controller = StageController::new(dir.path(), FlowKind::Express);
        controller
            .connect_remote(Box::new(SharedStore(shared.clone())), "zed")
            .unwrap();

        controller
            .advance(Stage::Input, StagePayload::Empty)
            .unwrap();
        controller.advance(Stage::Reveal, gates_payload()).unwrap();
        assert!(shared.get_session("zed").unwrap().is_some());

        let receipt = controller.restart().unwrap();
        assert_eq!(receipt.remote, RemoteSync::Synced);
        assert_eq!(controller.stage(), Stage::Welcome);
        assert!(controller.data().is_empty());
        assert!(!controller.is_returning());
        assert!(SessionFile::new(dir.path()).load().unwrap().is_none());
        assert!(shared.get_session("zed").unwrap().is_none());
    }

    #[test]
    fn remote_write_failure_is_soft() {
        let dir = TempDir::new().unwrap();
        let mut controller = StageController::new(dir.path(), FlowKind::Express);
        controller
            .connect_remote(Box::new(UnreachableStore), "zed")
            .unwrap();

        let receipt = controller
            .advance(Stage::Input, StagePayload::Empty)
            .unwrap();
        assert!(receipt.remote_failure().is_some());
        // The local write still happened.
        let record = SessionFile::new(dir.path()).load().unwrap().unwrap();
        assert_eq!(record.active_step, Stage::Input);
    }

    #[test]
    fn restart_remote_failure_is_soft() {
        let dir = TempDir::new().unwrap();
        let mut controller = StageController::new(dir.path(), FlowKind::Express);
        controller
            .connect_remote(Box::new(UnreachableStore), "zed")
            .unwrap();
        controller
            .advance(Stage::Input, StagePayload::Empty)
            .unwrap();

        let receipt = controller.restart().unwrap();
        assert!(receipt.remote_failure().is_some());
        assert_eq!(controller.stage(), Stage::Welcome);
        assert!(SessionFile::new(dir.path()).load().unwrap().is_none());
    }

    #[test]
    fn resume_restores_remote_record_and_marks_returning() {
        let dir = TempDir::new().unwrap();
        let shared = Arc::new(MemoryRecordStore::new());
        let mut data = HeroData::default();
        data.apply(gates_payload());
        shared
            .save_session("zed", &SessionRecord::new(Stage::Mythos, data))
            .unwrap();

        let mut controller = StageController::new(dir.path(), FlowKind::Express);
        controller
            .connect_remote(Box::new(SharedStore(shared)), "zed")
            .unwrap();
        let outcome = controller.resume().unwrap();

        assert_eq!(
            outcome,
            ResumeOutcome::Resumed {
                stage: Stage::Mythos
            }
        );
        assert!(controller.is_returning());
        assert_eq!(controller.stage(), Stage::Mythos);
        assert!(controller.data().has_gates());
    }

    #[test]
    fn resume_without_record_is_fresh() {
        let dir = TempDir::new().unwrap();
        let mut controller = StageController::new(dir.path(), FlowKind::Express);
        controller
            .connect_remote(Box::new(MemoryRecordStore::new()), "zed")
            .unwrap();
        assert_eq!(controller.resume().unwrap(), ResumeOutcome::Fresh);
        assert!(!controller.is_returning());
        assert_eq!(controller.stage(), Stage::Welcome);
    }

    #[test]
    fn resume_query_failure_is_nonfatal() {
        let dir = TempDir::new().unwrap();
        let mut controller = StageController::new(dir.path(), FlowKind::Express);
        controller
            .connect_remote(Box::new(UnreachableStore), "zed")
            .unwrap();
        let outcome = controller.resume().unwrap();
        assert!(matches!(outcome, ResumeOutcome::RemoteUnavailable { .. }));
        assert_eq!(controller.stage(), Stage::Welcome);
        assert!(!controller.is_returning());
    }

    #[test]
    fn resume_ignores_record_from_another_flow() {
        let dir = TempDir::new().unwrap();
        let shared = Arc::new(MemoryRecordStore::new());
        shared
            .save_session(
                "zed",
                &SessionRecord::new(Stage::TypeSelection, HeroData::default()),
            )
            .unwrap();

        let mut controller = StageController::new(dir.path(), FlowKind::Express);
        controller
            .connect_remote(Box::new(SharedStore(shared)), "zed")
            .unwrap();
        assert_eq!(controller.resume().unwrap(), ResumeOutcome::Fresh);
        assert_eq!(controller.stage(), Stage::Welcome);
    }

    #[test]
    fn bootstrap_restores_local_session() {
        let dir = TempDir::new().unwrap();
        {
            let mut controller = StageController::new(dir.path(), FlowKind::Express);
            controller
                .advance(Stage::Input, StagePayload::Empty)
                .unwrap();
            controller.advance(Stage::Reveal, gates_payload()).unwrap();
        }

        let controller = StageController::bootstrap(dir.path(), FlowKind::Express).unwrap();
        assert_eq!(controller.stage(), Stage::Reveal);
        assert!(controller.data().has_gates());
        assert!(!controller.is_returning());
    }

    #[test]
    fn bootstrap_ignores_record_from_another_flow() {
        let dir = TempDir::new().unwrap();
        {
            let mut controller = StageController::new(dir.path(), FlowKind::Express);
            controller
                .advance(Stage::Input, StagePayload::Empty)
                .unwrap();
        }

        let controller = StageController::bootstrap(dir.path(), FlowKind::Guided).unwrap();
        assert_eq!(controller.stage(), Stage::Welcome);
        assert!(controller.data().is_empty());
    }

    #[test]
    fn bootstrap_surfaces_corrupt_session() {
        let dir = TempDir::new().unwrap();
        let file = SessionFile::new(dir.path());
        std::fs::create_dir_all(file.path().parent().unwrap()).unwrap();
        std::fs::write(file.path(), "garbage").unwrap();

        let err = StageController::bootstrap(dir.path(), FlowKind::Express).unwrap_err();
        assert!(matches!(err, HeroError::CorruptSession { .. }));
    }

    #[test]
    fn advance_after_resume_mirrors_to_remote() {
        let dir = TempDir::new().unwrap();
        let shared = Arc::new(MemoryRecordStore::new());
        let mut data = HeroData::default();
        data.apply(gates_payload());
        shared
            .save_session("zed", &SessionRecord::new(Stage::Reveal, data))
            .unwrap();

        let mut controller = StageController::new(dir.path(), FlowKind::Express);
        controller
            .connect_remote(Box::new(SharedStore(shared.clone())), "zed")
            .unwrap();
        controller.resume().unwrap();

        let receipt = controller
            .advance(
                Stage::Mythos,
                StagePayload::Revelation {
                    identity: sample_identity(),
                    mantras: sample_mantras(),
                },
            )
            .unwrap();
        assert_eq!(receipt.remote, RemoteSync::Synced);
        assert_eq!(
            shared.get_session("zed").unwrap().unwrap().active_step,
            Stage::Mythos
        );
    }

    #[test]
    fn connect_remote_validates_user_id() {
        let dir = TempDir::new().unwrap();
        let mut controller = StageController::new(dir.path(), FlowKind::Express);
        let err = controller
            .connect_remote(Box::new(MemoryRecordStore::new()), "Not A Slug")
            .unwrap_err();
        assert!(matches!(err, HeroError::InvalidUserId(_)));
    }
}
