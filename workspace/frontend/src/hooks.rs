use compute::{run_command, Action, Dashboard};
use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;

use crate::api_client::HttpApi;

/// Shared dashboard state plus the callback that feeds it actions.
#[derive(Clone)]
pub struct DashboardHandle {
    pub state: Rc<RefCell<Dashboard>>,
    pub dispatch: Callback<Action>,
}

/// Owns the dashboard view-model for the lifetime of the component.
///
/// Every action is applied immediately and triggers a re-render. If the
/// action calls for a request, it runs in the background and its completion
/// is applied (and rendered) when the response arrives. The initial
/// transaction load is issued once on mount.
#[hook]
pub fn use_dashboard() -> DashboardHandle {
    let state = use_mut_ref(Dashboard::new);
    let update = use_force_update();

    let dispatch = {
        let state = state.clone();
        Callback::from(move |action: Action| {
            log::trace!("Dispatching {:?}", action);
            let command = state.borrow_mut().apply(action);
            update.force_update();

            if let Some(command) = command {
                let state = state.clone();
                let update = update.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    run_command(&state, &HttpApi, command, || update.force_update()).await;
                });
            }
        })
    };

    // Load on mount
    {
        let dispatch = dispatch.clone();
        use_effect_with((), move |_| {
            log::debug!("Loading dashboard transactions");
            dispatch.emit(Action::LoadRequested);
            || ()
        });
    }

    DashboardHandle { state, dispatch }
}
