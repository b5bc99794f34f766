use crate::config::Config;
use crate::desktop::IconPrefs;
use crate::display_action::DisplayAction;
use crate::{CommandPipe, DisplayEvent, Manager, Mode, StateSocket};
use std::path::{Path, PathBuf};
use tokio::sync::mpsc;

/// Host-facing sender half of the display event channel. The UI layer
/// clones this and feeds pointer and viewport events into the loop.
#[derive(Debug, Clone)]
pub struct EventChannel {
    tx: mpsc::UnboundedSender<DisplayEvent>,
}

impl EventChannel {
    #[must_use]
    pub fn new() -> (Self, mpsc::UnboundedReceiver<DisplayEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    pub fn send(&self, event: DisplayEvent) {
        self.tx.send(event).ok();
    }
}

impl<C: Config> Manager<C> {
    /// # Panics
    /// This function panics if it can't create or write to the command file.
    pub async fn event_loop(mut self, mut events: mpsc::UnboundedReceiver<DisplayEvent>) {
        let socket_file = place_runtime_file("current_state.sock")
            .expect("ERROR: couldn't create current_state.sock");
        let mut state_socket = StateSocket::default();
        state_socket
            .listen(socket_file)
            .await
            .expect("ERROR: couldn't connect to current_state.sock");

        let file_name = CommandPipe::pipe_name();
        let pipe_file = place_runtime_file(&file_name)
            .unwrap_or_else(|_| panic!("ERROR: couldn't create {}", file_name.display()));
        let mut command_pipe = CommandPipe::new(pipe_file)
            .await
            .unwrap_or_else(|_| panic!("ERROR: couldn't connect to {}", file_name.display()));

        // Deferred events the loop sends to itself, currently only the
        // second phase of a close.
        let (deferred_tx, mut deferred_rx) = mpsc::unbounded_channel();

        // Custom icon images overlay the configured column at boot; the
        // loop keeps the handle to write changes back.
        let mut icon_prefs = IconPrefs::load().unwrap_or_else(|err| {
            tracing::warn!("icon preferences unavailable: {}", err);
            IconPrefs::default()
        });
        icon_prefs.apply(&mut self.state.icons);

        self.startup_handler();

        //main event loop
        loop {
            if self.state.mode == Mode::Normal {
                state_socket.write_desktop_state(&self.state).await.ok();
            }

            tokio::select! {
                Some(event) = events.recv() => {
                    self.display_event_handler(event);
                }
                Some(cmd) = command_pipe.read_command() => {
                    self.command_handler(&cmd);
                }
                Some(event) = deferred_rx.recv() => {
                    self.display_event_handler(event);
                }
                else => break,
            }

            //perform any actions requested by the handlers
            self.execute_actions(&deferred_tx, &mut icon_prefs);
        }

        state_socket.shutdown().await;
    }

    /// Drain the action queue. A `ScheduleRemoval` becomes a sleep on a
    /// spawned task that feeds `RemoveClosed` back through the channel;
    /// icon actions write the preference file through.
    fn execute_actions(
        &mut self,
        deferred_tx: &mpsc::UnboundedSender<DisplayEvent>,
        icon_prefs: &mut IconPrefs,
    ) {
        while let Some(act) = self.state.actions.pop_front() {
            match act {
                DisplayAction::ScheduleRemoval(id) => {
                    let tx = deferred_tx.clone();
                    let delay = self.state.close_delay;
                    tokio::spawn(async move {
                        tokio::time::sleep(delay).await;
                        tx.send(DisplayEvent::RemoveClosed(id)).ok();
                    });
                }
                DisplayAction::SaveIconImage { label, image } => {
                    if let Err(err) = icon_prefs.set(&label, &image) {
                        tracing::error!("couldn't save icon preference: {}", err);
                    }
                }
                DisplayAction::ResetIconImage(label) => {
                    if let Err(err) = icon_prefs.reset(&label) {
                        tracing::error!("couldn't reset icon preference: {}", err);
                    }
                }
            }
        }
    }
}

fn place_runtime_file<P>(path: P) -> std::io::Result<PathBuf>
where
    P: AsRef<Path>,
{
    xdg::BaseDirectories::with_prefix("retrodesk")?.place_runtime_file(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AppKind;

    #[tokio::test]
    async fn a_close_settles_into_a_removal() {
        let mut manager = Manager::new_test();
        manager.open_handler(AppKind::Blog, None, None, None);
        let id = manager.state.instance_of_kind(AppKind::Blog).unwrap().id;
        manager.close_handler(&id);

        let (tx, mut rx) = mpsc::unbounded_channel();
        manager.execute_actions(&tx, &mut IconPrefs::default());
        assert!(manager.state.actions.is_empty());

        // The removal arrives as an event after the settle delay.
        let event = rx.recv().await.unwrap();
        assert_eq!(event, DisplayEvent::RemoveClosed(id));
        manager.display_event_handler(event);
        assert!(manager.state.find(&id).is_none());
    }

    #[tokio::test]
    async fn icon_changes_write_the_preference_file_through() {
        let dir = tempfile::tempdir().unwrap();
        let prefs_file = dir.path().join("icons.json");
        let mut icon_prefs = IconPrefs::load_from(prefs_file.clone()).unwrap();

        let mut manager = Manager::new_test();
        manager.set_icon_handler("Blog", "custom/blog.png");
        let (tx, _rx) = mpsc::unbounded_channel();
        manager.execute_actions(&tx, &mut icon_prefs);
        assert!(manager.state.actions.is_empty());

        let reloaded = IconPrefs::load_from(prefs_file).unwrap();
        assert_eq!(reloaded.get("Blog"), Some("custom/blog.png"));
    }

    #[tokio::test]
    async fn the_event_channel_delivers_in_order() {
        let (channel, mut rx) = EventChannel::new();
        channel.send(DisplayEvent::PointerMove(crate::models::Xy::new(1, 1)));
        channel.send(DisplayEvent::PointerUp(crate::models::Xy::new(1, 1)));

        assert_eq!(
            rx.recv().await.unwrap(),
            DisplayEvent::PointerMove(crate::models::Xy::new(1, 1))
        );
        assert_eq!(
            rx.recv().await.unwrap(),
            DisplayEvent::PointerUp(crate::models::Xy::new(1, 1))
        );
    }
}
