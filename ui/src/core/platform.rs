//! Platform detection and the host scroll sources.

#[cfg(not(target_arch = "wasm32"))]
use std::sync::atomic::{AtomicU64, Ordering};

use dioxus::logger::tracing::{warn, Level};
#[cfg(not(target_arch = "wasm32"))]
use dioxus::prelude::*;

use super::scroll::{ManualScroll, ScrollCallback, ScrollError, ScrollSource};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Web,
    Desktop,
    Mobile,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_arch = "wasm32") {
            Self::Web
        } else if cfg!(any(target_os = "android", target_os = "ios")) {
            Self::Mobile
        } else {
            Self::Desktop
        }
    }
}

/// Logger verbosity every shell starts with.
pub fn default_log_level() -> Level {
    if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    }
}

/// Scroll source of the running host.
#[cfg(target_arch = "wasm32")]
pub type PlatformScroll = WindowScroll;
#[cfg(not(target_arch = "wasm32"))]
pub type PlatformScroll = EvalScroll;

/// Source used by the scroll navbar: a [`ManualScroll`] when the host
/// provides one through context (headless renders), the platform otherwise.
pub enum HostScroll {
    Platform(PlatformScroll),
    Manual(ManualScroll),
}

pub enum HostHandle {
    Platform(<PlatformScroll as ScrollSource>::Handle),
    Manual(<ManualScroll as ScrollSource>::Handle),
}

impl HostScroll {
    pub fn resolve(manual: Option<ManualScroll>) -> Self {
        match manual {
            Some(source) => Self::Manual(source),
            None => Self::Platform(PlatformScroll::default()),
        }
    }
}

impl ScrollSource for HostScroll {
    type Handle = HostHandle;

    fn subscribe(&self, on_scroll: ScrollCallback) -> Result<HostHandle, ScrollError> {
        match self {
            Self::Platform(source) => source.subscribe(on_scroll).map(HostHandle::Platform),
            Self::Manual(source) => source.subscribe(on_scroll).map(HostHandle::Manual),
        }
    }

    fn unsubscribe(&self, handle: HostHandle) {
        match (self, handle) {
            (Self::Platform(source), HostHandle::Platform(handle)) => source.unsubscribe(handle),
            (Self::Manual(source), HostHandle::Manual(handle)) => source.unsubscribe(handle),
            _ => warn!("scroll handle does not belong to this source"),
        }
    }

    fn offset(&self) -> f64 {
        match self {
            Self::Platform(source) => source.offset(),
            Self::Manual(source) => source.offset(),
        }
    }
}

/// Browser window scroll events via `web-sys`.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowScroll;

#[cfg(target_arch = "wasm32")]
impl ScrollSource for WindowScroll {
    type Handle = wasm_bindgen::closure::Closure<dyn FnMut()>;

    fn subscribe(&self, mut on_scroll: ScrollCallback) -> Result<Self::Handle, ScrollError> {
        use wasm_bindgen::JsCast;

        let window = web_sys::window().ok_or(ScrollError::NoWindow)?;
        let reader = window.clone();
        let listener = wasm_bindgen::closure::Closure::<dyn FnMut()>::new(move || {
            on_scroll(reader.scroll_y().unwrap_or(0.0));
        });

        let options = web_sys::AddEventListenerOptions::new();
        options.set_passive(true);
        window
            .add_event_listener_with_callback_and_add_event_listener_options(
                "scroll",
                listener.as_ref().unchecked_ref(),
                &options,
            )
            .map_err(|err| ScrollError::Listener(format!("{err:?}")))?;

        Ok(listener)
    }

    fn unsubscribe(&self, handle: Self::Handle) {
        use wasm_bindgen::JsCast;

        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(err) =
            window.remove_event_listener_with_callback("scroll", handle.as_ref().unchecked_ref())
        {
            warn!(?err, "failed to remove scroll listener");
        }
        // `handle` drops here, releasing the JS closure.
    }

    fn offset(&self) -> f64 {
        web_sys::window()
            .and_then(|w| w.scroll_y().ok())
            .unwrap_or(0.0)
    }
}

/// Webview scroll events bridged through `document::eval`.
///
/// The script registers a window listener under a unique key and streams
/// offsets back; the Rust side pumps them on a scope-local task.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone, Copy, Default)]
pub struct EvalScroll;

#[cfg(not(target_arch = "wasm32"))]
pub struct EvalListener {
    key: String,
    pump: Task,
}

#[cfg(not(target_arch = "wasm32"))]
static NEXT_LISTENER: AtomicU64 = AtomicU64::new(1);

#[cfg(not(target_arch = "wasm32"))]
impl ScrollSource for EvalScroll {
    type Handle = EvalListener;

    fn subscribe(&self, mut on_scroll: ScrollCallback) -> Result<EvalListener, ScrollError> {
        let key = format!(
            "__projectuiScroll{}",
            NEXT_LISTENER.fetch_add(1, Ordering::Relaxed)
        );
        let script = format!(
            r#"
            const report = () => dioxus.send(window.scrollY);
            window["{key}"] = report;
            window.addEventListener("scroll", report, {{ passive: true }});
            report();
            await new Promise(() => {{}});
            "#
        );

        let mut bridge = document::eval(&script);
        let pump = spawn(async move {
            loop {
                match bridge.recv::<f64>().await {
                    Ok(offset) => on_scroll(offset),
                    Err(err) => {
                        let err = ScrollError::Bridge(format!("{err:?}"));
                        warn!(%err, "scroll updates stopped");
                        break;
                    }
                }
            }
        });

        Ok(EvalListener { key, pump })
    }

    fn unsubscribe(&self, handle: EvalListener) {
        let EvalListener { key, pump } = handle;
        pump.cancel();
        // Fire and forget: the script runs as soon as it is queued.
        let _ = document::eval(&format!(
            r#"
            const report = window["{key}"];
            if (report) {{
                window.removeEventListener("scroll", report);
                delete window["{key}"];
            }}
            "#
        ));
    }

    /// The bridge reports the initial offset itself.
    fn offset(&self) -> f64 {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_tests_run_on_desktop_or_mobile() {
        assert_ne!(Platform::current(), Platform::Web);
    }

    #[test]
    fn log_level_follows_build_profile() {
        #[cfg(debug_assertions)]
        assert_eq!(default_log_level(), Level::DEBUG);
        #[cfg(not(debug_assertions))]
        assert_eq!(default_log_level(), Level::INFO);
    }

    #[test]
    fn host_source_prefers_provided_manual_scroll() {
        let manual = ManualScroll::new();
        manual.scroll_to(42.0);
        let source = HostScroll::resolve(Some(manual.clone()));
        assert_eq!(source.offset(), 42.0);

        let handle = source.subscribe(Box::new(|_| {})).unwrap();
        assert_eq!(manual.listener_count(), 1);
        source.unsubscribe(handle);
        assert_eq!(manual.listener_count(), 0);
    }

    #[test]
    fn host_source_falls_back_to_platform() {
        assert!(matches!(HostScroll::resolve(None), HostScroll::Platform(_)));
    }
}
