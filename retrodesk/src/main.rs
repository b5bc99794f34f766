mod config;
mod logging;

use retrodesk_core::{EventChannel, Manager};
use std::panic;

fn main() {
    logging::setup_logging();
    tracing::info!("retrodesk-worker booting...");

    let exit_status = panic::catch_unwind(|| {
        let rt = tokio::runtime::Runtime::new().expect("ERROR: couldn't init Tokio runtime");
        let _rt_guard = rt.enter();

        let config = config::load();
        let manager = Manager::new(config);

        // An embedding shell clones the sender and feeds pointer and
        // viewport events through it; standalone, the command pipe is the
        // only input.
        let (_channel, events) = EventChannel::new();
        rt.block_on(manager.event_loop(events));
    });

    match exit_status {
        Ok(()) => tracing::info!("Completed"),
        Err(err) => tracing::info!("Completed with error: {:?}", err),
    }
}
