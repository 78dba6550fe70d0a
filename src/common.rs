use std::sync::Once;

use log::LevelFilter;

use crate::util::setup as setup_logger;

static INIT: Once = Once::new();

pub fn setup() {
    INIT.call_once(|| {
        // the handle has to outlive every test in the binary
        if let Ok(handle) = setup_logger(&LevelFilter::Debug, None, false) {
            std::mem::forget(handle);
        }
    });
}
