use std::rc::Rc;

use app_shell::{StateStore, UiState};
use leptos::*;

/// Application context: the persisted UI state handle and the API base URL.
/// Provided once at the root, used anywhere below.
#[derive(Clone)]
pub struct AppCtx {
    pub state: UiState,
    pub api_base: RwSignal<String>,
}

pub fn provide_app_ctx(api_base: String) -> AppCtx {
    #[cfg(target_arch = "wasm32")]
    let store: Rc<dyn StateStore> = Rc::new(app_shell::LocalStore::new());
    #[cfg(not(target_arch = "wasm32"))]
    let store: Rc<dyn StateStore> = Rc::new(app_shell::MemoryStore::new());

    let ctx = AppCtx {
        state: UiState::new(store),
        api_base: create_rw_signal(api_base),
    };
    provide_context(ctx.clone());
    ctx
}

pub fn use_app_ctx() -> AppCtx {
    use_context::<AppCtx>().expect("AppCtx not provided")
}
