use crate::config::Config;
use crate::state::State;

/// Maintains current desktop state.
#[derive(Debug)]
pub struct Manager<C> {
    pub state: State,
    pub config: C,
}

impl<C> Manager<C>
where
    C: Config,
{
    pub fn new(config: C) -> Self {
        Self {
            state: State::new(&config),
            config,
        }
    }
}

#[cfg(test)]
impl Manager<crate::config::TestConfig> {
    pub fn new_test() -> Self {
        Self::new(crate::config::TestConfig::default())
    }

    pub fn new_test_with_viewport(viewport: crate::models::Viewport) -> Self {
        let mut manager = Self::new_test();
        manager.state.viewport = viewport;
        manager
    }
}
