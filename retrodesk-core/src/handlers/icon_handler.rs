use super::{Config, Manager};
use crate::display_action::DisplayAction;

impl<C: Config> Manager<C> {
    /// Swap a desktop icon's image and ask the event loop to persist the
    /// choice. An unknown label is absorbed.
    pub fn set_icon_handler(&mut self, label: &str, image: &str) -> bool {
        match self.state.icons.iter_mut().find(|i| i.label == label) {
            Some(icon) => {
                icon.image = image.to_string();
                self.state.actions.push_back(DisplayAction::SaveIconImage {
                    label: label.to_string(),
                    image: image.to_string(),
                });
                true
            }
            None => false,
        }
    }

    /// Put a desktop icon back on its configured image and drop the
    /// persisted preference.
    pub fn reset_icon_handler(&mut self, label: &str) -> bool {
        let Some(configured) = self
            .config
            .create_list_of_icons()
            .into_iter()
            .find(|i| i.label == label)
        else {
            return false;
        };
        match self.state.icons.iter_mut().find(|i| i.label == label) {
            Some(icon) => {
                icon.image = configured.image;
                self.state
                    .actions
                    .push_back(DisplayAction::ResetIconImage(label.to_string()));
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn icon_image(manager: &Manager<crate::config::TestConfig>, label: &str) -> String {
        manager
            .state
            .icons
            .iter()
            .find(|i| i.label == label)
            .unwrap()
            .image
            .clone()
    }

    #[test]
    fn setting_an_icon_updates_the_column_and_queues_persistence() {
        let mut manager = Manager::new_test();
        assert!(manager.set_icon_handler("Blog", "custom/blog.png"));

        assert_eq!(icon_image(&manager, "Blog"), "custom/blog.png");
        assert_eq!(
            manager.state.actions.front(),
            Some(&DisplayAction::SaveIconImage {
                label: "Blog".to_string(),
                image: "custom/blog.png".to_string(),
            })
        );
    }

    #[test]
    fn resetting_restores_the_configured_image() {
        let mut manager = Manager::new_test();
        manager.set_icon_handler("Terminal", "custom/term.png");
        assert!(manager.reset_icon_handler("Terminal"));

        assert_eq!(icon_image(&manager, "Terminal"), "assets/terminal.png");
        assert_eq!(
            manager.state.actions.back(),
            Some(&DisplayAction::ResetIconImage("Terminal".to_string()))
        );
    }

    #[test]
    fn unknown_labels_are_absorbed() {
        let mut manager = Manager::new_test();
        assert!(!manager.set_icon_handler("Recycle Bin", "custom/bin.png"));
        assert!(!manager.reset_icon_handler("Recycle Bin"));
        assert!(manager.state.actions.is_empty());
    }
}
