use crate::interface::Navigator;
use std::sync::Mutex;

/// Remembers every redirect instead of performing it
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    visited: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn visited(&self) -> Vec<String> {
        self.visited
            .lock()
            .map(|visited| visited.clone())
            .unwrap_or_default()
    }

    pub fn last(&self) -> Option<String> {
        self.visited().pop()
    }
}

impl Navigator for RecordingNavigator {
    fn redirect(&self, path: &str) {
        if let Ok(mut visited) = self.visited.lock() {
            visited.push(path.to_string());
        }
    }
}

/// Navigation for terminals: there is no page to load, so just log it
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNavigator;

impl Navigator for LogNavigator {
    fn redirect(&self, path: &str) {
        log::info!("redirect -> {path}");
    }
}

/// Hard redirect through `window.location`
#[cfg(feature = "wasm")]
#[derive(Debug, Default, Clone, Copy)]
pub struct LocationNavigator;

#[cfg(feature = "wasm")]
impl Navigator for LocationNavigator {
    fn redirect(&self, path: &str) {
        match web_sys::window() {
            Some(window) => {
                if let Err(e) = window.location().set_href(path) {
                    log::error!("redirect to {path} failed: {e:?}");
                }
            }
            None => log::error!("no window to redirect to {path}"),
        }
    }
}
