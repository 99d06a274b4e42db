use leptos::*;
use uuid::Uuid;

use crate::api::ApiError;

pub const TOAST_TIMEOUT_MS: u32 = 5_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Info,
    Error,
}

impl ToastLevel {
    pub fn css_class(&self) -> &'static str {
        match self {
            ToastLevel::Success => "bg-green-50 text-green-800 border-green-200",
            ToastLevel::Info => "bg-blue-50 text-blue-800 border-blue-200",
            ToastLevel::Error => "bg-red-50 text-red-800 border-red-200",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub level: ToastLevel,
    pub message: String,
}

#[derive(Clone, Copy)]
pub struct Toasts {
    items: RwSignal<Vec<Toast>>,
}

impl Toasts {
    pub fn new() -> Self {
        Self {
            items: create_rw_signal(Vec::new()),
        }
    }

    pub fn items(&self) -> Signal<Vec<Toast>> {
        self.items.into()
    }

    pub fn push(&self, level: ToastLevel, message: impl Into<String>) -> Uuid {
        let toast = Toast {
            id: Uuid::new_v4(),
            level,
            message: message.into(),
        };
        let id = toast.id;
        self.items.update(|items| items.push(toast));
        self.schedule_dismiss(id);
        id
    }

    pub fn success(&self, message: impl Into<String>) -> Uuid {
        self.push(ToastLevel::Success, message)
    }

    pub fn info(&self, message: impl Into<String>) -> Uuid {
        self.push(ToastLevel::Info, message)
    }

    pub fn error(&self, message: impl Into<String>) -> Uuid {
        self.push(ToastLevel::Error, message)
    }

    pub fn api_error(&self, err: &ApiError) -> Uuid {
        self.error(err.error.clone())
    }

    pub fn dismiss(&self, id: Uuid) {
        self.items.update(|items| items.retain(|toast| toast.id != id));
    }

    #[cfg(target_arch = "wasm32")]
    fn schedule_dismiss(&self, id: Uuid) {
        let toasts = *self;
        gloo_timers::callback::Timeout::new(TOAST_TIMEOUT_MS, move || toasts.dismiss(id)).forget();
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn schedule_dismiss(&self, _id: Uuid) {}
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_toasts() -> Toasts {
    match use_context::<Toasts>() {
        Some(toasts) => toasts,
        None => {
            let toasts = Toasts::new();
            provide_context(toasts);
            toasts
        }
    }
}

/// Decides whether a settled load deserves a toast. Each load generation is
/// reported at most once, whatever the number of times its result is read.
#[derive(Debug, Default)]
pub struct BusinessFailureNotifier {
    last_reported: Option<u64>,
}

impl BusinessFailureNotifier {
    pub fn observe(&mut self, generation: u64, failure: Option<&ApiError>) -> Option<String> {
        let failure = failure?;
        if self.last_reported.is_some_and(|seen| seen >= generation) {
            return None;
        }
        self.last_reported = Some(generation);
        Some(failure.error.clone())
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn push_and_dismiss_toasts() {
        with_runtime(|| {
            let toasts = Toasts::new();
            let first = toasts.error("Boom");
            toasts.success("Saved");
            let items = toasts.items().get();
            assert_eq!(items.len(), 2);
            assert_eq!(items[0].level, ToastLevel::Error);
            assert_eq!(items[1].message, "Saved");

            toasts.dismiss(first);
            let items = toasts.items().get();
            assert_eq!(items.len(), 1);
            assert_eq!(items[0].level, ToastLevel::Success);
        });
    }

    #[test]
    fn api_error_toasts_server_message() {
        with_runtime(|| {
            let toasts = use_toasts();
            toasts.api_error(&ApiError::business("X"));
            assert_eq!(use_toasts().items().get()[0].message, "X");
        });
    }

    #[test]
    fn notifier_reports_each_failed_load_once() {
        let mut notifier = BusinessFailureNotifier::default();
        let err = ApiError::business("X");

        assert_eq!(notifier.observe(1, Some(&err)).as_deref(), Some("X"));
        assert_eq!(notifier.observe(1, Some(&err)), None);
        assert_eq!(notifier.observe(2, None), None);
        assert_eq!(notifier.observe(3, Some(&err)).as_deref(), Some("X"));
        assert_eq!(notifier.observe(2, Some(&err)), None);
    }
}
