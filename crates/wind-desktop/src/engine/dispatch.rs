//! Applying intents

use crate::error::DesktopResult;
use crate::intent::{Intent, Outcome};
use crate::window::OpenRequest;
use super::WorkspaceManager;

impl WorkspaceManager {
    /// Apply one intent.
    ///
    /// `now_ms` is the host clock, used only to timestamp animations.
    pub fn dispatch(&mut self, intent: Intent, now_ms: f64) -> DesktopResult<Outcome> {
        let outcome = match intent {
            Intent::Open {
                app_id,
                position,
                size,
            } => {
                let opened = self.open_window(OpenRequest {
                    app_id,
                    position,
                    size,
                })?;
                Outcome::Opened {
                    window_id: opened.window_id,
                    kind: opened.kind,
                }
            }
            Intent::Focus { window_id } => self.focus_window(window_id)?.into(),
            Intent::Minimize { window_id } => self.minimize_window(window_id)?.into(),
            Intent::Restore { window_id } => self.restore_window(window_id)?.into(),
            Intent::Maximize { window_id } => self.maximize_window(window_id)?.into(),
            Intent::RestoreSize { window_id } => self.restore_size(window_id)?.into(),
            Intent::ToggleMaximize { window_id } => self.toggle_maximize(window_id)?.into(),
            Intent::Move {
                window_id,
                position,
            } => self.move_window(window_id, position)?.into(),
            Intent::Resize { window_id, size } => self.resize_window(window_id, size)?.into(),
            Intent::Close { window_id } => self.close_window(window_id)?.into(),
            Intent::AnimateRestore { window_id, from } => {
                match self.begin_restore_animation(window_id, from, now_ms)? {
                    Some(animation) => Outcome::Animation { animation },
                    None => Outcome::Unchanged,
                }
            }
            Intent::SwitchWorkspace { workspace_id } => {
                self.switch_workspace(workspace_id)?.into()
            }
        };
        Ok(outcome)
    }

    /// Apply intents in order, stopping at the first error.
    ///
    /// Intents applied before the failure stay applied.
    pub fn dispatch_all(
        &mut self,
        intents: impl IntoIterator<Item = Intent>,
        now_ms: f64,
    ) -> DesktopResult<Vec<Outcome>> {
        intents
            .into_iter()
            .map(|intent| self.dispatch(intent, now_ms))
            .collect()
    }
}
