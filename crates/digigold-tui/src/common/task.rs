//! Async task lifecycle bookkeeping.
//!
//! The runtime spawns background work and reports it back through
//! `TaskStarted`/`TaskCompleted` events; the reducer records which task is
//! active per kind so stale completions can be dropped.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(pub u64);

/// Monotonic task id allocator, owned by the reducer state.
#[derive(Debug, Default)]
pub struct TaskSeq {
    next: u64,
}

impl TaskSeq {
    pub fn next_id(&mut self) -> TaskId {
        let id = TaskId(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKind {
    LoginSubmit,
}

#[derive(Debug, Clone)]
pub struct TaskStarted {
    pub id: TaskId,
}

#[derive(Debug)]
pub struct TaskCompleted<E> {
    pub id: TaskId,
    pub result: E,
}

/// Task lifecycle state (stored in `AppState`, mutated only by the reducer).
#[derive(Debug, Default, Clone)]
pub struct TaskState {
    pub active: Option<TaskId>,
}

impl TaskState {
    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    pub fn on_started(&mut self, started: &TaskStarted) {
        self.active = Some(started.id);
    }

    /// Clears the task if `id` is the active one. Returns whether it was.
    pub fn finish_if_active(&mut self, id: TaskId) -> bool {
        let ok = self.active == Some(id);
        if ok {
            self.active = None;
        }
        ok
    }
}

#[derive(Debug, Default, Clone)]
pub struct Tasks {
    pub login_submit: TaskState,
}

impl Tasks {
    pub fn state_mut(&mut self, kind: TaskKind) -> &mut TaskState {
        match kind {
            TaskKind::LoginSubmit => &mut self.login_submit,
        }
    }

    pub fn is_any_running(&self) -> bool {
        self.login_submit.is_running()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Stale completions (from a superseded task id) are ignored.
    #[test]
    fn test_finish_if_active_rejects_stale_id() {
        let mut seq = TaskSeq::default();
        let first = seq.next_id();
        let second = seq.next_id();

        let mut state = TaskState::default();
        state.on_started(&TaskStarted { id: second });

        assert!(!state.finish_if_active(first));
        assert!(state.is_running());
        assert!(state.finish_if_active(second));
        assert!(!state.is_running());
    }
}
