use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;
use thaw::*;

/// Lifecycle of one asynchronous fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Pending,
    Loaded(T),
    Failed(String),
}

impl<T> LoadState<T> {
    pub fn from_result(result: Result<T, String>) -> Self {
        match result {
            Ok(value) => LoadState::Loaded(value),
            Err(e) => LoadState::Failed(e),
        }
    }
}

/// Log line for a failed fetch of `label`
fn load_error_message(label: &str, error: &str) -> String {
    format!("Failed to load {}: {}", label, error)
}

/// Runs `func` once and shows a spinner, an error alert, or `render(value)`.
///
/// The fetch starts when the view is created. If the view is disposed before
/// the fetch completes, the result is dropped.
#[component]
pub fn LoadableView<T, F, Fut, R>(
    /// Starts the fetch
    func: F,
    /// Renders the loaded value
    render: R,
    /// What is being loaded, for the error log
    label: String,
) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
    F: FnOnce() -> Fut + 'static,
    Fut: Future<Output = Result<T, String>> + 'static,
    R: Fn(T) -> AnyView + Send + Sync + 'static,
{
    let state = RwSignal::new(LoadState::<T>::Pending);

    let request = func();
    spawn_local(async move {
        let result = request.await;
        if let Err(e) = &result {
            log::error!("{}", load_error_message(&label, e));
        }
        // owner may already be gone
        let _ = state.try_set(LoadState::from_result(result));
    });

    view! {
        <div class="loadable-view">
            {move || match state.get() {
                LoadState::Pending => {
                    view! {
                        <Flex gap=FlexGap::Small style="align-items: center; justify-content: center; padding: var(--spacing-xl);">
                            <Spinner />
                            <span>"Loading..."</span>
                        </Flex>
                    }
                        .into_any()
                }
                LoadState::Failed(err) => {
                    view! {
                        <div class="alert alert--error">
                            <strong>"Error: "</strong>
                            {err}
                        </div>
                    }
                        .into_any()
                }
                LoadState::Loaded(value) => render(value),
            }}
        </div>
    }
}
