use super::{Command, Config, Manager};

impl<C: Config> Manager<C> {
    /// Process a command arriving over the command pipe. Commands address
    /// windows by kind; a command for a kind with no live window is
    /// absorbed. Returns true if changes need to be rendered.
    pub fn command_handler(&mut self, command: &Command) -> bool {
        tracing::trace!("{:?}", command);
        match command {
            Command::Open(kind) => self.open_handler(*kind, None, None, None),
            Command::Close(kind) => match self.state.instance_of_kind(*kind) {
                Some(window) => {
                    let id = window.id;
                    self.close_handler(&id)
                }
                None => false,
            },
            Command::Minimize(kind) => match self.state.instance_of_kind(*kind) {
                Some(window) => {
                    let id = window.id;
                    self.minimize_handler(&id)
                }
                None => false,
            },
            Command::Focus(kind) => match self.state.instance_of_kind(*kind) {
                Some(window) => {
                    let id = window.id;
                    self.focus_handler(&id)
                }
                None => false,
            },
            Command::ToggleMaximize(kind) => match self.state.instance_of_kind(*kind) {
                Some(window) => {
                    let id = window.id;
                    self.toggle_maximize_handler(&id)
                }
                None => false,
            },
            Command::SetIcon { label, image } => self.set_icon_handler(label, image),
            Command::ResetIcon(label) => self.reset_icon_handler(label),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AppKind;

    #[test]
    fn open_then_close_by_kind() {
        let mut manager = Manager::new_test();
        assert!(manager.command_handler(&Command::Open(AppKind::Terminal)));
        let id = manager.state.instance_of_kind(AppKind::Terminal).unwrap().id;

        assert!(manager.command_handler(&Command::Close(AppKind::Terminal)));
        assert!(manager.state.find(&id).unwrap().closing());
    }

    #[test]
    fn commands_for_absent_kinds_are_absorbed() {
        let mut manager = Manager::new_test();
        assert!(!manager.command_handler(&Command::Close(AppKind::Browser)));
        assert!(!manager.command_handler(&Command::Minimize(AppKind::Browser)));
        assert!(!manager.command_handler(&Command::Focus(AppKind::Browser)));
        assert!(!manager.command_handler(&Command::ToggleMaximize(AppKind::Browser)));
    }

    #[test]
    fn minimize_by_kind_toggles() {
        let mut manager = Manager::new_test();
        manager.command_handler(&Command::Open(AppKind::Blog));
        manager.command_handler(&Command::Minimize(AppKind::Blog));
        assert!(manager
            .state
            .instance_of_kind(AppKind::Blog)
            .unwrap()
            .minimized());
        manager.command_handler(&Command::Minimize(AppKind::Blog));
        assert!(!manager
            .state
            .instance_of_kind(AppKind::Blog)
            .unwrap()
            .minimized());
    }

    #[test]
    fn icon_commands_reach_the_icon_column() {
        let mut manager = Manager::new_test();
        assert!(manager.command_handler(&Command::SetIcon {
            label: "About Me".to_string(),
            image: "custom/me.png".to_string(),
        }));
        let icon = manager
            .state
            .icons
            .iter()
            .find(|i| i.label == "About Me")
            .unwrap();
        assert_eq!(icon.image, "custom/me.png");

        assert!(manager.command_handler(&Command::ResetIcon("About Me".to_string())));
        let icon = manager
            .state
            .icons
            .iter()
            .find(|i| i.label == "About Me")
            .unwrap();
        assert_eq!(icon.image, "assets/finder.png");
    }
}
