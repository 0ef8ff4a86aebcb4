/// Sidebar root component

use yew::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use crate::config::SidebarConfig;
use crate::error::SidebarError;
use crate::refresh::{Refresher, TabQuery};
use crate::render::RenderedView;
use crate::tab_data::ActiveTab;
use crate::ui::components::Pane;

// Import JS bridge functions
#[wasm_bindgen(module = "/sidebar.js")]
extern "C" {
    #[wasm_bindgen(catch)]
    async fn queryActiveTab() -> Result<JsValue, JsValue>;

    fn addTabListeners(callback: &js_sys::Function);

    fn removeTabListeners(callback: &js_sys::Function);
}

/// `TabQuery` backed by the extension's `tabs` API
pub struct BrowserTabs;

impl TabQuery for BrowserTabs {
    async fn active_tab(&self) -> Result<Option<ActiveTab>, SidebarError> {
        let tab_js = queryActiveTab()
            .await
            .map_err(|e| SidebarError::HostQuery(format!("{:?}", e)))?;

        if tab_js.is_null() || tab_js.is_undefined() {
            return Ok(None);
        }

        serde_wasm_bindgen::from_value(tab_js)
            .map(Some)
            .map_err(|e| SidebarError::TabDecode(e.to_string()))
    }
}

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    pub config: SidebarConfig,
}

#[function_component(Sidebar)]
pub fn sidebar(props: &SidebarProps) -> Html {
    let view = use_state(RenderedView::default);
    let refresher = use_memo(props.config.clone(), |config| Refresher::new(config, BrowserTabs));

    // Each trigger runs a full refresh; whichever query resolves last wins.
    let refresh = {
        let view = view.clone();

        Callback::from(move |_: ()| {
            let view = view.clone();
            let refresher = refresher.clone();

            spawn_local(async move {
                if let Some(next) = refresher.refresh().await.into_view() {
                    view.set(next);
                }
            });
        })
    };

    // Listen for tab changes and refresh once right away. Re-registers when
    // the config changes.
    {
        use_effect_with(props.config.clone(), move |config| {
            log::info!("sidebar listening ({:?})", config.variant);

            let on_tab_change = {
                let refresh = refresh.clone();
                Closure::<dyn Fn()>::new(move || refresh.emit(()))
            };
            addTabListeners(on_tab_change.as_ref().unchecked_ref());

            refresh.emit(());

            move || {
                removeTabListeners(on_tab_change.as_ref().unchecked_ref());
            }
        });
    }

    html! {
        <Pane view={(*view).clone()} />
    }
}
